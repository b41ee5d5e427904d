//! Domain model structs persisted in the writings slot.
//!
//! Field names serialize in camelCase to match the historical on-disk
//! layout, so a blob written by an older build reads back unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use inkpost_shared::{DeviceIdentity, WritingKind};

/// Maximum number of characters carried into the derived excerpt.
pub const EXCERPT_CHARS: usize = 150;

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// A single published piece of creative content.
///
/// Created once by its author and thereafter only mutated by two
/// operations: folding in a rating and appending a comment.  There is no
/// delete path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Writing {
    /// Opaque unique id, assigned at creation, immutable.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Category of the piece (poem/story/essay/other).
    #[serde(rename = "type")]
    pub kind: WritingKind,
    /// Device identity that published this piece.
    pub author_id: String,
    /// Display name derived from the author's device identity.
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Running mean of all ratings received.
    pub average_rating: f64,
    /// Number of ratings folded into [`Self::average_rating`].
    pub total_ratings: u32,
    /// Reader feedback, append-only, insertion order preserved.
    pub comments: Vec<Comment>,
    /// Always equal to `comments.len()`; older blobs may omit it.
    #[serde(default)]
    pub comments_count: usize,
    /// Derived preview of the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl Writing {
    /// Build a fresh, unrated, uncommented piece authored by the given
    /// device identity.  The store itself assigns nothing on `create`;
    /// every field is populated here.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        kind: WritingKind,
        author: &DeviceIdentity,
    ) -> Self {
        let title = title.into();
        let content = content.into();
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            excerpt: Some(excerpt_of(&content)),
            title,
            content,
            kind,
            author_id: author.id().to_string(),
            author_name: author.display_name(),
            created_at: now,
            updated_at: now,
            average_rating: 0.0,
            total_ratings: 0,
            comments: Vec::new(),
            comments_count: 0,
        }
    }
}

/// First [`EXCERPT_CHARS`] characters of the content.
fn excerpt_of(content: &str) -> String {
    content.chars().take(EXCERPT_CHARS).collect()
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// Free-text feedback attached to exactly one [`Writing`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: CommentAuthor,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a comment authored by the given device identity.
    pub fn new(content: impl Into<String>, author: &DeviceIdentity) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            author: CommentAuthor {
                id: author.id().to_string(),
                username: author.display_name(),
                avatar: None,
            },
            created_at: Utc::now(),
        }
    }
}

/// Attribution embedded in each comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
