use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use bloglist_types::models::{BlogRecord, UserRecord};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::identity::UserDraft;
use crate::store::{BlogStore, UserStore};
use crate::validate::{BlogDraft, BlogPatch};

/// Process-local store backed by vectors. Keeps insertion order and enforces
/// username uniqueness the same way the SQLite store does.
#[derive(Default)]
pub struct MemoryStore {
    blogs: RwLock<Vec<BlogRecord>>,
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
        lock.read()
            .map_err(|e| Error::Storage(anyhow!("memory store lock poisoned: {}", e)))
    }

    fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
        lock.write()
            .map_err(|e| Error::Storage(anyhow!("memory store lock poisoned: {}", e)))
    }
}

impl BlogStore for MemoryStore {
    fn insert_blog(&self, draft: &BlogDraft) -> Result<BlogRecord> {
        let record = BlogRecord {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            author: draft.author.clone(),
            url: draft.url.clone(),
            likes: draft.likes,
        };
        Self::write(&self.blogs)?.push(record.clone());
        Ok(record)
    }

    fn find_all_blogs(&self) -> Result<Vec<BlogRecord>> {
        Ok(Self::read(&self.blogs)?.clone())
    }

    fn find_blog(&self, id: Uuid) -> Result<BlogRecord> {
        Self::read(&self.blogs)?
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn update_blog(&self, id: Uuid, patch: &BlogPatch) -> Result<BlogRecord> {
        let mut blogs = Self::write(&self.blogs)?;
        let blog = blogs.iter_mut().find(|b| b.id == id).ok_or(Error::NotFound)?;

        if let Some(title) = &patch.title {
            blog.title = title.clone();
        }
        if let Some(author) = &patch.author {
            blog.author = author.clone();
        }
        if let Some(url) = &patch.url {
            blog.url = url.clone();
        }
        if let Some(likes) = patch.likes {
            blog.likes = likes;
        }

        Ok(blog.clone())
    }

    fn delete_blog(&self, id: Uuid) -> Result<()> {
        let mut blogs = Self::write(&self.blogs)?;
        let idx = blogs.iter().position(|b| b.id == id).ok_or(Error::NotFound)?;
        blogs.remove(idx);
        Ok(())
    }
}

impl UserStore for MemoryStore {
    fn insert_user(&self, draft: &UserDraft) -> Result<UserRecord> {
        // Check and push under one write lock so concurrent inserts can't both pass.
        let mut users = Self::write(&self.users)?;
        if users.iter().any(|u| u.username == draft.username) {
            return Err(Error::DuplicateKey { field: "username" });
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            username: draft.username.clone(),
            name: draft.name.clone(),
            credential_hash: draft.credential_hash.clone(),
        };
        users.push(record.clone());
        Ok(record)
    }

    fn find_all_users(&self) -> Result<Vec<UserRecord>> {
        Ok(Self::read(&self.users)?.clone())
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        Ok(Self::read(&self.users)?
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}
