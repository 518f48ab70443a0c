use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every outcome the core can reject a call with.
///
/// The request boundary maps these onto responses, so each variant carries
/// the offending field where there is one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("`{field}` is required")]
    MissingRequiredField { field: &'static str },

    #[error("`{field}` has an invalid value")]
    InvalidField { field: &'static str },

    #[error("password must be at least {min_len} characters long")]
    WeakCredential { min_len: usize },

    #[error("expected `{field}` to be unique")]
    DuplicateKey { field: &'static str },

    #[error("record not found")]
    NotFound,

    #[error("cannot pick a favorite from an empty blog list")]
    EmptyInput,

    #[error("credential hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl Error {
    /// True for rejections caused by the caller's input rather than by a
    /// missing record or a failing collaborator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredField { .. }
                | Error::InvalidField { .. }
                | Error::WeakCredential { .. }
                | Error::DuplicateKey { .. }
        )
    }
}
