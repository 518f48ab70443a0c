use bloglist_types::models::{BlogRecord, UserRecord};
use uuid::Uuid;

use crate::error::Result;
use crate::identity::UserDraft;
use crate::validate::{BlogDraft, BlogPatch};

/// Persistence for blogs. Implementations assign ids on insert and report
/// unknown ids as [`crate::Error::NotFound`].
pub trait BlogStore {
    fn insert_blog(&self, draft: &BlogDraft) -> Result<BlogRecord>;

    /// Every stored blog, in insertion order.
    fn find_all_blogs(&self) -> Result<Vec<BlogRecord>>;

    fn find_blog(&self, id: Uuid) -> Result<BlogRecord>;

    fn update_blog(&self, id: Uuid, patch: &BlogPatch) -> Result<BlogRecord>;

    fn delete_blog(&self, id: Uuid) -> Result<()>;
}

/// Persistence for users.
///
/// `insert_user` must enforce username uniqueness itself and fail with
/// [`crate::Error::DuplicateKey`]; the registration check that runs before it
/// only catches the common case and can race with a concurrent insert.
pub trait UserStore {
    fn insert_user(&self, draft: &UserDraft) -> Result<UserRecord>;

    fn find_all_users(&self) -> Result<Vec<UserRecord>>;

    fn find_user_by_username(&self, username: &str) -> Result<Option<UserRecord>>;
}
