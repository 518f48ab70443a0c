use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Untrusted blog body as it arrives from a client. No field is assumed to
/// be present or to have the right shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct BlogPayload(Map<String, Value>);

impl BlogPayload {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Largest like count a blog can hold. Stores keep likes in a signed 64-bit
/// column, so anything above this is rejected instead of failing on write.
pub const MAX_LIKES: u64 = i64::MAX as u64;

/// A blog that passed creation checks and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

/// Sparse set of fields an update applies. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl BlogPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none() && self.likes.is_none()
    }
}

/// Strict check for new blogs: `title` then `url` must be non-empty text.
/// Only the first missing field is reported.
pub fn validate_for_create(payload: &BlogPayload) -> Result<BlogDraft> {
    let title = required_text(payload, "title")?;
    let url = required_text(payload, "url")?;

    let author = match payload.get("author") {
        Some(Value::String(author)) => author.clone(),
        _ => String::new(),
    };

    // Anything that isn't a non-negative integer falls back to zero likes.
    let likes = match payload.get("likes").and_then(Value::as_u64) {
        Some(likes) => bounded_likes(likes)?,
        None => 0,
    };

    Ok(BlogDraft {
        title,
        author,
        url,
        likes,
    })
}

/// Permissive check for updates: nothing is required, but every field that
/// is present has to be well-formed so a stored blog never loses its title,
/// url or a valid like count.
pub fn validate_for_update(payload: &BlogPayload) -> Result<BlogPatch> {
    let title = optional_text(payload, "title")?;
    let url = optional_text(payload, "url")?;

    let author = match payload.get("author") {
        None => None,
        Some(Value::String(author)) => Some(author.clone()),
        Some(_) => return Err(Error::InvalidField { field: "author" }),
    };

    let likes = match payload.get("likes") {
        None => None,
        Some(value) => {
            let likes = value.as_u64().ok_or(Error::InvalidField { field: "likes" })?;
            Some(bounded_likes(likes)?)
        }
    };

    Ok(BlogPatch {
        title,
        author,
        url,
        likes,
    })
}

fn bounded_likes(likes: u64) -> Result<u64> {
    if likes > MAX_LIKES {
        return Err(Error::InvalidField { field: "likes" });
    }
    Ok(likes)
}

fn required_text(payload: &BlogPayload, field: &'static str) -> Result<String> {
    match payload.get(field) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(Error::MissingRequiredField { field }),
    }
}

fn optional_text(payload: &BlogPayload, field: &'static str) -> Result<Option<String>> {
    match payload.get(field) {
        None => Ok(None),
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(Some(text.clone())),
        Some(_) => Err(Error::InvalidField { field }),
    }
}
