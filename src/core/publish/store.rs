//! In-memory content store
//!
//! Posts, authors, and subscriber lists live in one owned store object.
//! The store is constructed explicitly and handed to the publish pipeline;
//! there is no module-level database to reach around it.

use crate::domain::ids::{AuthorId, PostId};
use crate::domain::post::{Author, Post};
use std::collections::HashMap;

/// Content backing the publish pipeline
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: HashMap<u64, Post>,
    authors: HashMap<u64, Author>,
    subscribers: HashMap<u64, Vec<String>>,
}

impl ContentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a post
    pub fn insert_post(&mut self, post: Post) {
        self.posts.insert(post.id.value(), post);
    }

    /// Adds or replaces an author
    pub fn insert_author(&mut self, author: Author) {
        self.authors.insert(author.id.value(), author);
    }

    /// Sets the subscriber list for an author
    pub fn set_subscribers(&mut self, author_id: AuthorId, emails: Vec<String>) {
        self.subscribers.insert(author_id.value(), emails);
    }

    /// Looks up a post
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.get(&id.value())
    }

    /// Looks up an author
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id.value())
    }

    /// Subscriber emails for an author, empty if none recorded
    pub fn subscribers(&self, author_id: AuthorId) -> &[String] {
        self.subscribers
            .get(&author_id.value())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of stored posts
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// The demo content set used by the CLI and tests
    ///
    /// Deliberately includes one post per failure mode: missing title,
    /// short body, unknown author, already published.
    pub fn sample() -> Self {
        let jane = AuthorId::new(42);
        let ghost = AuthorId::new(99);

        let mut store = Self::new();
        store.insert_author(Author::new(jane, "Jane Doe", "jane@example.com"));
        store.set_subscribers(
            jane,
            vec![
                "subscriber1@example.com".to_string(),
                "subscriber2@example.com".to_string(),
            ],
        );

        store.insert_post(Post::draft(
            PostId::new(1),
            "Hello World",
            "My very first post ever written.",
            jane,
        ));
        store.insert_post(Post::draft(
            PostId::new(2),
            "",
            "No title on this one.",
            jane,
        ));
        store.insert_post(Post::draft(PostId::new(3), "Short", "Too short.", jane));
        store.insert_post(Post::draft(
            PostId::new(4),
            "Good Post",
            "This post is complete and ready.",
            ghost,
        ));
        store.insert_post(
            Post::draft(
                PostId::new(5),
                "Already Live",
                "This post is already published.",
                jane,
            )
            .published(),
        );

        store
    }
}
