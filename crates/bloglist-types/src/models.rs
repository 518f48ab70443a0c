use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored blog entry. `title` and `url` are never empty once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

/// A registered account. The credential hash stays server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing, default)]
    pub credential_hash: String,
}

/// Projection of the most-liked blog. `id` and `url` are dropped on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

impl From<&BlogRecord> for FavoriteBlog {
    fn from(blog: &BlogRecord) -> Self {
        Self {
            title: blog.title.clone(),
            author: blog.author.clone(),
            likes: blog.likes,
        }
    }
}

/// Aggregate view over a blog collection, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub total_likes: u64,
    pub favorite: Option<FavoriteBlog>,
}
