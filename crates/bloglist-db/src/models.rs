//! Database row types, mapped straight from SQLite rows. Ids and counters
//! keep their storage representation until converted at the store boundary.

use anyhow::{Context, Result};
use bloglist_types::models::{BlogRecord, UserRecord};

pub struct BlogRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

impl BlogRow {
    pub fn into_record(self) -> Result<BlogRecord> {
        Ok(BlogRecord {
            id: self
                .id
                .parse()
                .with_context(|| format!("corrupt blog id '{}'", self.id))?,
            likes: u64::try_from(self.likes)
                .with_context(|| format!("negative likes on blog '{}'", self.id))?,
            title: self.title,
            author: self.author,
            url: self.url,
        })
    }
}

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub name: String,
    pub password_hash: String,
}

impl UserRow {
    pub fn into_record(self) -> Result<UserRecord> {
        Ok(UserRecord {
            id: self
                .id
                .parse()
                .with_context(|| format!("corrupt user id '{}'", self.id))?,
            username: self.username,
            name: self.name,
            credential_hash: self.password_hash,
        })
    }
}
