//! Data models for Linkmark
//!
//! Defines the core data structures: users and bookmarks. Timestamps are
//! stored as integer Unix epoch milliseconds and surfaced as
//! `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Never carries the stored password hash; credential checks go through
/// [`UserRecord`] inside the auth module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Login email, unique across users
    pub email: String,
    /// When this account was created
    pub created_at: DateTime<Utc>,
}

/// A user row including the stored password hash
///
/// Returned only by email lookup, for verifying login credentials.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique identifier
    pub id: i64,
    /// Login email
    pub email: String,
    /// Self-contained bcrypt hash (algorithm, cost, salt, digest)
    pub password_hash: String,
    /// When this account was created
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Drop the hash and keep the caller-safe fields
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// A saved bookmark, always owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    /// Unique identifier
    pub id: i64,
    /// Owning user; immutable after creation
    pub user_id: i64,
    /// The URL
    pub url: String,
    /// Display title
    pub title: String,
    /// Favicon URL
    pub favicon: String,
    /// Short summary of the page
    pub summary: String,
    /// Flat comma-separated tag string, stored exactly as entered
    pub tags: String,
    /// When this bookmark was created
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a bookmark
///
/// Everything except the URL defaults to the empty string.
#[derive(Debug, Clone, Default)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub favicon: String,
    pub summary: String,
    pub tags: String,
}

impl NewBookmark {
    /// Create a new bookmark payload with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// A partial update to a bookmark
///
/// `None` fields are left untouched. Only title, summary, and tags are
/// updatable; url, owner, and creation time are immutable.
#[derive(Debug, Clone, Default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<String>,
}

impl BookmarkPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.summary.is_none() && self.tags.is_none()
    }
}

/// Convert a stored epoch-milliseconds value back to a timestamp
///
/// Out-of-range values fall back to the epoch rather than failing a row
/// read.
pub(crate) fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bookmark_defaults() {
        let new = NewBookmark::new("https://example.com");
        assert_eq!(new.url, "https://example.com");
        assert_eq!(new.title, "");
        assert_eq!(new.favicon, "");
        assert_eq!(new.summary, "");
        assert_eq!(new.tags, "");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(BookmarkPatch::default().is_empty());

        let patch = BookmarkPatch {
            tags: Some("news".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_user_record_into_user() {
        let record = UserRecord {
            id: 7,
            email: "a@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
        };

        let user = record.clone().into_user();
        assert_eq!(user.id, record.id);
        assert_eq!(user.email, record.email);
        assert_eq!(user.created_at, record.created_at);
    }

    #[test]
    fn test_datetime_from_millis_roundtrip() {
        let now = Utc::now();
        let restored = datetime_from_millis(now.timestamp_millis());
        assert_eq!(restored.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn test_bookmark_serialization() {
        let bookmark = Bookmark {
            id: 1,
            user_id: 2,
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            favicon: String::new(),
            summary: String::new(),
            tags: "news,tech".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&bookmark).unwrap();
        let deserialized: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(bookmark, deserialized);
    }
}
