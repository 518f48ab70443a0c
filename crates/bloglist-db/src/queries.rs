use bloglist_core::identity::UserDraft;
use bloglist_core::store::{BlogStore, UserStore};
use bloglist_core::validate::{BlogDraft, BlogPatch};
use bloglist_core::{Error, Result};
use bloglist_types::models::{BlogRecord, UserRecord};
use rusqlite::{Connection, OptionalExtension, Row};
use tracing::info;
use uuid::Uuid;

use crate::Database;
use crate::models::{BlogRow, UserRow};

const BLOG_COLUMNS: &str = "id, title, author, url, likes";
const USER_COLUMNS: &str = "id, username, name, password_hash";

// -- Blogs --

impl BlogStore for Database {
    fn insert_blog(&self, draft: &BlogDraft) -> Result<BlogRecord> {
        let id = Uuid::new_v4();
        let likes =
            i64::try_from(draft.likes).map_err(|_| Error::InvalidField { field: "likes" })?;

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO blogs (id, title, author, url, likes) VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![id.to_string(), draft.title, draft.author, draft.url, likes],
            )?;
            Ok(())
        })?;

        info!("Blog {} created: '{}'", id, draft.title);
        Ok(BlogRecord {
            id,
            title: draft.title.clone(),
            author: draft.author.clone(),
            url: draft.url.clone(),
            likes: draft.likes,
        })
    }

    fn find_all_blogs(&self) -> Result<Vec<BlogRecord>> {
        let rows = self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {BLOG_COLUMNS} FROM blogs ORDER BY rowid"))?;
            let rows = stmt
                .query_map([], blog_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        Ok(rows
            .into_iter()
            .map(BlogRow::into_record)
            .collect::<anyhow::Result<Vec<_>>>()?)
    }

    fn find_blog(&self, id: Uuid) -> Result<BlogRecord> {
        let row = self.with_conn(|conn| query_blog(conn, id))?;
        Ok(row.ok_or(Error::NotFound)?.into_record()?)
    }

    fn update_blog(&self, id: Uuid, patch: &BlogPatch) -> Result<BlogRecord> {
        let likes = patch
            .likes
            .map(i64::try_from)
            .transpose()
            .map_err(|_| Error::InvalidField { field: "likes" })?;

        let row = self.with_conn(|conn| {
            if patch.is_empty() {
                return query_blog(conn, id);
            }
            let changed = conn.execute(
                "UPDATE blogs SET
                    title  = COALESCE(?2, title),
                    author = COALESCE(?3, author),
                    url    = COALESCE(?4, url),
                    likes  = COALESCE(?5, likes)
                 WHERE id = ?1",
                rusqlite::params![id.to_string(), patch.title, patch.author, patch.url, likes],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            query_blog(conn, id)
        })?;

        let record = row.ok_or(Error::NotFound)?.into_record()?;
        info!("Blog {} updated", id);
        Ok(record)
    }

    fn delete_blog(&self, id: Uuid) -> Result<()> {
        let deleted = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM blogs WHERE id = ?1", [id.to_string()])?)
        })?;

        if deleted == 0 {
            return Err(Error::NotFound);
        }
        info!("Blog {} deleted", id);
        Ok(())
    }
}

// -- Users --

impl UserStore for Database {
    fn insert_user(&self, draft: &UserDraft) -> Result<UserRecord> {
        let id = Uuid::new_v4();

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, username, name, password_hash) VALUES (?1, ?2, ?3, ?4)",
                (id.to_string(), &draft.username, &draft.name, &draft.credential_hash),
            )?;
            Ok(())
        })
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::DuplicateKey { field: "username" }
            } else {
                Error::Storage(e)
            }
        })?;

        info!("User {} registered as '{}'", id, draft.username);
        Ok(UserRecord {
            id,
            username: draft.username.clone(),
            name: draft.name.clone(),
            credential_hash: draft.credential_hash.clone(),
        })
    }

    fn find_all_users(&self) -> Result<Vec<UserRecord>> {
        let rows = self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY rowid"))?;
            let rows = stmt
                .query_map([], user_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        Ok(rows
            .into_iter()
            .map(UserRow::into_record)
            .collect::<anyhow::Result<Vec<_>>>()?)
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let row = self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"),
                    [username],
                    user_from_row,
                )
                .optional()?;
            Ok(row)
        })?;

        Ok(row.map(UserRow::into_record).transpose()?)
    }
}

fn query_blog(conn: &Connection, id: Uuid) -> anyhow::Result<Option<BlogRow>> {
    let row = conn
        .query_row(
            &format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ?1"),
            [id.to_string()],
            blog_from_row,
        )
        .optional()?;

    Ok(row)
}

fn blog_from_row(row: &Row<'_>) -> rusqlite::Result<BlogRow> {
    Ok(BlogRow {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        url: row.get(3)?,
        likes: row.get(4)?,
    })
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        username: row.get(1)?,
        name: row.get(2)?,
        password_hash: row.get(3)?,
    })
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
