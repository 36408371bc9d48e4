//! Blog post domain model
//!
//! Posts move from draft to published through the publish pipeline. Each
//! pipeline stage has its own type (`Post` → `EnrichedPost` →
//! `PublishedPost`) so a later stage cannot be fed an earlier stage's
//! output by accident.

use crate::domain::errors::ContentError;
use crate::domain::ids::{AuthorId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editorial state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Written but not yet live
    Draft,
    /// Visible to readers
    Published,
}

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier
    pub id: PostId,

    /// Title shown to readers
    pub title: String,

    /// Post body
    pub content: String,

    /// Author reference
    pub author_id: AuthorId,

    /// Editorial state
    pub status: PostStatus,
}

impl Post {
    /// Creates a draft post
    pub fn draft(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: AuthorId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author_id,
            status: PostStatus::Draft,
        }
    }

    /// Marks a post as already published, for seeding stores
    pub fn published(mut self) -> Self {
        self.status = PostStatus::Published;
        self
    }
}

/// A post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author identifier
    pub id: AuthorId,

    /// Display name
    pub name: String,

    /// Contact address notifications go to
    pub email: String,
}

impl Author {
    /// Creates a new author
    pub fn new(id: AuthorId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A post joined with its author record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPost {
    /// The post as loaded
    pub post: Post,

    /// The resolved author
    pub author: Author,
}

impl EnrichedPost {
    /// Transitions the post to published at the given instant
    ///
    /// The input is consumed and a new `PublishedPost` is returned; nothing
    /// is mutated in place.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::AlreadyPublished`] if the post is already live
    pub fn publish(self, at: DateTime<Utc>) -> Result<PublishedPost, ContentError> {
        if self.post.status == PostStatus::Published {
            return Err(ContentError::AlreadyPublished(self.post.id.value()));
        }
        Ok(PublishedPost {
            id: self.post.id,
            title: self.post.title,
            content: self.post.content,
            author: self.author,
            published_at: at,
        })
    }
}

/// A post that has gone live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedPost {
    /// Post identifier
    pub id: PostId,

    /// Title shown to readers
    pub title: String,

    /// Post body
    pub content: String,

    /// The resolved author
    pub author: Author,

    /// Instant the post went live
    pub published_at: DateTime<Utc>,
}
