use bloglist_types::models::UserRecord;
use tracing::warn;

use crate::error::{Error, Result};
use crate::hash::CredentialHasher;
use crate::store::UserStore;

pub const DEFAULT_MIN_PASSWORD_LEN: usize = 3;

/// A user that passed registration checks. Holds only the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub name: String,
    pub credential_hash: String,
}

/// Registration rules: required fields, password length, unique usernames.
pub struct IdentityManager<H> {
    hasher: H,
    min_password_len: usize,
}

impl<H: CredentialHasher> IdentityManager<H> {
    pub fn new(hasher: H, min_password_len: usize) -> Self {
        Self {
            hasher,
            min_password_len,
        }
    }

    pub fn min_password_len(&self) -> usize {
        self.min_password_len
    }

    /// Check a registration against `store` and hash the password.
    ///
    /// Usernames are compared exactly (case-sensitive). The lookup only
    /// reads; inserting the returned draft is up to the caller.
    pub fn register_user<S: UserStore>(
        &self,
        store: &S,
        username: &str,
        name: Option<&str>,
        password: &str,
    ) -> Result<UserDraft> {
        if username.is_empty() {
            return Err(Error::MissingRequiredField { field: "username" });
        }
        if password.is_empty() {
            return Err(Error::MissingRequiredField { field: "password" });
        }
        if password.chars().count() < self.min_password_len {
            return Err(Error::WeakCredential {
                min_len: self.min_password_len,
            });
        }

        if store.find_user_by_username(username)?.is_some() {
            warn!("Registration rejected, username '{}' is taken", username);
            return Err(Error::DuplicateKey { field: "username" });
        }

        let credential_hash = self.hasher.hash(password)?;

        Ok(UserDraft {
            username: username.to_string(),
            name: name.unwrap_or_default().to_string(),
            credential_hash,
        })
    }

    /// Register and persist in one go. A duplicate caught by the store's own
    /// uniqueness constraint surfaces the same way as one caught up front.
    pub fn create_user<S: UserStore>(
        &self,
        store: &S,
        username: &str,
        name: Option<&str>,
        password: &str,
    ) -> Result<UserRecord> {
        let draft = self.register_user(store, username, name, password)?;
        store.insert_user(&draft)
    }

    pub fn verify_credentials(&self, user: &UserRecord, password: &str) -> bool {
        self.hasher.verify(password, &user.credential_hash)
    }
}
