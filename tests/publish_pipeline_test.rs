//! Integration tests for the post publish pipeline
//!
//! Walks the demo content set through the pipeline: one post per failure
//! mode, plus the happy path and the best-effort notification contract.

use tally::core::publish::{ContentStore, PublishPipeline, MIN_CONTENT_LENGTH};
use tally::domain::{Author, AuthorId, ContentError, Post, PostId};

fn sample() -> ContentStore {
    ContentStore::sample()
}

#[test]
fn test_valid_post_publishes_with_author_attached() {
    let store = sample();
    let published = PublishPipeline::new(&store).run(PostId::new(1)).unwrap();

    assert_eq!(published.title, "Hello World");
    assert_eq!(published.author.name, "Jane Doe");
    assert_eq!(published.author.email, "jane@example.com");
}

#[test]
fn test_each_failure_mode_reports_its_own_error() {
    let store = sample();
    let pipeline = PublishPipeline::new(&store);

    assert_eq!(
        pipeline.run(PostId::new(2)).unwrap_err(),
        ContentError::MissingTitle(2)
    );
    assert!(matches!(
        pipeline.run(PostId::new(3)).unwrap_err(),
        ContentError::ContentTooShort {
            id: 3,
            minimum: MIN_CONTENT_LENGTH,
            ..
        }
    ));
    assert_eq!(
        pipeline.run(PostId::new(4)).unwrap_err(),
        ContentError::AuthorNotFound(99)
    );
    assert_eq!(
        pipeline.run(PostId::new(5)).unwrap_err(),
        ContentError::AlreadyPublished(5)
    );
    assert_eq!(
        pipeline.run(PostId::new(999)).unwrap_err(),
        ContentError::PostNotFound(999)
    );
}

#[test]
fn test_failure_does_not_change_the_store() {
    let store = sample();
    let pipeline = PublishPipeline::new(&store);

    let _ = pipeline.run(PostId::new(3));

    // The draft is still a draft with its original content
    let post = store.post(PostId::new(3)).unwrap();
    assert_eq!(post.title, "Short");
    assert_eq!(post.content, "Too short.");
}

#[test]
fn test_publishing_does_not_mutate_the_stored_draft() {
    let store = sample();
    let published = PublishPipeline::new(&store).run(PostId::new(1)).unwrap();

    // The pipeline returns a new value; the stored record is untouched
    assert_eq!(published.title, store.post(PostId::new(1)).unwrap().title);
    assert!(matches!(
        store.post(PostId::new(1)).unwrap().status,
        tally::domain::PostStatus::Draft
    ));
}

#[test]
fn test_no_subscribers_is_best_effort() {
    // An author with an empty subscriber list: notification fails, the
    // publish still succeeds.
    let mut store = ContentStore::new();
    let author = AuthorId::new(7);
    store.insert_author(Author::new(author, "Quiet Author", "quiet@example.com"));
    store.insert_post(Post::draft(
        PostId::new(1),
        "Unnoticed",
        "A perfectly fine body with enough characters.",
        author,
    ));

    let pipeline = PublishPipeline::new(&store);
    let published = pipeline.run(PostId::new(1)).unwrap();
    assert_eq!(published.title, "Unnoticed");

    // The notification step itself still reports its failure honestly
    assert_eq!(
        pipeline.notify_subscribers(&published).unwrap_err(),
        ContentError::NoSubscribers(7)
    );
}

#[test]
fn test_notify_reports_send_count() {
    let store = sample();
    let pipeline = PublishPipeline::new(&store);
    let published = pipeline.run(PostId::new(1)).unwrap();

    assert_eq!(pipeline.notify_subscribers(&published).unwrap(), 2);
}

#[test]
fn test_content_exactly_at_minimum_is_accepted() {
    let mut store = ContentStore::new();
    let author = AuthorId::new(42);
    store.insert_author(Author::new(author, "Jane Doe", "jane@example.com"));
    store.set_subscribers(author, vec!["s@example.com".to_string()]);

    let body = "x".repeat(MIN_CONTENT_LENGTH);
    store.insert_post(Post::draft(PostId::new(1), "Edge", body, author));

    assert!(PublishPipeline::new(&store).run(PostId::new(1)).is_ok());
}
