//! Publish command implementation
//!
//! Runs the publish pipeline against the built-in demo content set.

use crate::core::publish::{ContentStore, PublishPipeline};
use crate::domain::ids::PostId;
use clap::Args;

/// Arguments for the publish command
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// ID of the post to publish
    #[arg(long)]
    pub post_id: u64,
}

impl PublishArgs {
    /// Execute the publish command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(post_id = self.post_id, "Running publish pipeline");

        let store = ContentStore::sample();
        let pipeline = PublishPipeline::new(&store);

        match pipeline.run(PostId::new(self.post_id)) {
            Ok(published) => {
                println!("✅ Published \"{}\"", published.title);
                println!("   Author: {} <{}>", published.author.name, published.author.email);
                println!("   Published at: {}", published.published_at.to_rfc3339());
                Ok(0)
            }
            Err(e) => {
                println!("❌ Publish failed: {e}");
                Ok(1)
            }
        }
    }
}
