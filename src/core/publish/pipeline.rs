//! Post publish pipeline
//!
//! Load → validate → enrich → publish, composed with the step operator
//! from [`crate::core::pipeline`]. The first failing stage determines the
//! outcome and nothing after it runs. Subscriber notification is the one
//! best-effort stage: the post is live whether or not the mails go out, so
//! its failure is inspected here, logged, and the published post is
//! returned regardless.
//!
//! Stages themselves never print or log their failures; the error value is
//! the whole story, and only the caller decides what to show.

use crate::core::pipeline::Step;
use crate::core::publish::store::ContentStore;
use crate::domain::errors::ContentError;
use crate::domain::ids::PostId;
use crate::domain::post::{EnrichedPost, Post, PublishedPost};
use chrono::Utc;
use tracing::{debug, warn};

/// Minimum body length for a publishable post
pub const MIN_CONTENT_LENGTH: usize = 20;

/// Orchestrates publishing posts out of a [`ContentStore`]
pub struct PublishPipeline<'a> {
    store: &'a ContentStore,
}

impl<'a> PublishPipeline<'a> {
    /// Creates a pipeline over the given store
    pub fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    /// Publishes a post by ID
    ///
    /// # Errors
    ///
    /// Returns the first stage failure: not found, missing title, short
    /// content, unknown author, or already published. A notification
    /// failure is not an error here — see the module docs.
    pub fn run(&self, post_id: PostId) -> Result<PublishedPost, ContentError> {
        let now = Utc::now();

        let load = |id: PostId| {
            self.store
                .post(id)
                .cloned()
                .ok_or(ContentError::PostNotFound(id.value()))
        };
        let enrich = |post: Post| {
            let author = self
                .store
                .author(post.author_id)
                .cloned()
                .ok_or(ContentError::AuthorNotFound(post.author_id.value()))?;
            Ok(EnrichedPost { post, author })
        };
        let publish = |enriched: EnrichedPost| enriched.publish(now);

        let published = load
            .then(validate_post)
            .then(enrich)
            .then(publish)
            .apply(post_id)?;

        match self.notify_subscribers(&published) {
            Ok(count) => debug!(post_id = %published.id, count, "Subscribers notified"),
            Err(e) => warn!(post_id = %published.id, error = %e, "Subscriber notification failed"),
        }

        Ok(published)
    }

    /// Notifies the author's subscribers that a post went live
    ///
    /// Returns how many notifications were sent.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NoSubscribers`] if the author has nobody to
    /// notify.
    pub fn notify_subscribers(&self, post: &PublishedPost) -> Result<usize, ContentError> {
        let subscribers = self.store.subscribers(post.author.id);
        if subscribers.is_empty() {
            return Err(ContentError::NoSubscribers(post.author.id.value()));
        }
        for subscriber in subscribers {
            // The println IS the simulated mail channel.
            println!("  [notify] Sent notification to {subscriber} about \"{}\"", post.title);
        }
        Ok(subscribers.len())
    }
}

/// Checks the editorial rules a post must meet before going live
///
/// # Errors
///
/// Names the first rule that failed so the author knows what to fix.
pub fn validate_post(post: Post) -> Result<Post, ContentError> {
    if post.title.trim().is_empty() {
        return Err(ContentError::MissingTitle(post.id.value()));
    }
    if post.content.len() < MIN_CONTENT_LENGTH {
        return Err(ContentError::ContentTooShort {
            id: post.id.value(),
            length: post.content.len(),
            minimum: MIN_CONTENT_LENGTH,
        });
    }
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::AuthorId;

    fn pipeline_on(store: &ContentStore) -> PublishPipeline<'_> {
        PublishPipeline::new(store)
    }

    #[test]
    fn test_publish_valid_post() {
        let store = ContentStore::sample();
        let published = pipeline_on(&store).run(PostId::new(1)).unwrap();
        assert_eq!(published.title, "Hello World");
        assert_eq!(published.author.name, "Jane Doe");
    }

    #[test]
    fn test_missing_title_rejected() {
        let store = ContentStore::sample();
        let err = pipeline_on(&store).run(PostId::new(2)).unwrap_err();
        assert_eq!(err, ContentError::MissingTitle(2));
    }

    #[test]
    fn test_short_content_rejected() {
        let store = ContentStore::sample();
        let err = pipeline_on(&store).run(PostId::new(3)).unwrap_err();
        assert!(matches!(err, ContentError::ContentTooShort { id: 3, .. }));
    }

    #[test]
    fn test_unknown_author_rejected() {
        let store = ContentStore::sample();
        let err = pipeline_on(&store).run(PostId::new(4)).unwrap_err();
        assert_eq!(err, ContentError::AuthorNotFound(99));
    }

    #[test]
    fn test_already_published_rejected() {
        let store = ContentStore::sample();
        let err = pipeline_on(&store).run(PostId::new(5)).unwrap_err();
        assert_eq!(err, ContentError::AlreadyPublished(5));
    }

    #[test]
    fn test_unknown_post_rejected() {
        let store = ContentStore::sample();
        let err = pipeline_on(&store).run(PostId::new(999)).unwrap_err();
        assert_eq!(err, ContentError::PostNotFound(999));
    }

    #[test]
    fn test_publish_succeeds_without_subscribers() {
        // Author exists but has no subscriber list: notification is
        // best-effort, so the publish itself still succeeds.
        let mut store = ContentStore::sample();
        store.set_subscribers(AuthorId::new(42), Vec::new());

        let published = pipeline_on(&store).run(PostId::new(1)).unwrap();
        assert_eq!(published.id, PostId::new(1));
    }

    #[test]
    fn test_notify_counts_sends() {
        let store = ContentStore::sample();
        let pipeline = pipeline_on(&store);
        let published = pipeline.run(PostId::new(1)).unwrap();
        assert_eq!(pipeline.notify_subscribers(&published), Ok(2));
    }

    #[test]
    fn test_validate_post_is_pure() {
        let post = Post::draft(
            PostId::new(10),
            "Title",
            "A body easily over twenty characters.",
            AuthorId::new(42),
        );
        let validated = validate_post(post.clone()).unwrap();
        assert_eq!(validated, post);
    }
}
