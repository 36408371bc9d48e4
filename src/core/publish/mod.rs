//! Content publishing
//!
//! The publish pipeline takes a draft post through editorial validation,
//! author enrichment, and the publish transition, then notifies the
//! author's subscribers best-effort.

pub mod pipeline;
pub mod store;

pub use pipeline::{validate_post, PublishPipeline, MIN_CONTENT_LENGTH};
pub use store::ContentStore;
