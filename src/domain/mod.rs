//! Domain models and types for Tally.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`UserId`], [`SubscriptionId`], [`PostId`], [`AuthorId`])
//! - **Billing models** ([`Plan`], [`Discount`], [`PaymentMethod`], [`Subscription`])
//! - **Publishing models** ([`Post`], [`Author`], [`EnrichedPost`], [`PublishedPost`])
//! - **Error types** ([`TallyError`], [`BillingError`], [`ContentError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Every operation that can fail for an expected reason returns a `Result`;
//! nothing in the domain layer panics on bad input, prints, or logs. The
//! outermost caller is the only place a failure becomes a user-visible
//! message.
//!
//! ```rust
//! use tally::domain::{Result, TallyError};
//!
//! fn example() -> Result<()> {
//!     let config = tally::config::load_config("tally.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! # Immutability
//!
//! Domain records are values. State transitions return new copies:
//! cancelling a subscription or redeeming a discount code never mutates the
//! record a caller may still hold.

pub mod discount;
pub mod errors;
pub mod ids;
pub mod payment;
pub mod plan;
pub mod post;
pub mod result;
pub mod subscription;

// Re-export commonly used types for convenience
pub use discount::{Discount, DiscountStore};
pub use errors::{BillingError, ContentError, TallyError};
pub use ids::{AuthorId, PostId, SubscriptionId, UserId};
pub use payment::{CardRules, PaymentMethod};
pub use plan::{Plan, PlanCatalog, PlanTier};
pub use post::{Author, EnrichedPost, Post, PostStatus, PublishedPost};
pub use result::Result;
pub use subscription::{Subscription, SubscriptionBuilder, SubscriptionStatus};
