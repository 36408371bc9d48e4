//! Domain error types
//!
//! This module defines the error hierarchy for Tally. All errors are
//! domain-specific: expected failures (bad input, missing records,
//! business-rule rejections) are modeled as `Err` variants, never as panics,
//! and no third-party types leak through the public surface.

use thiserror::Error;

/// Main Tally error type
///
/// This is the primary error type used throughout the application.
/// It wraps the domain-specific error types and provides context for
/// error handling at the outermost caller.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Billing-related errors
    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    /// Content publishing errors
    #[error("Publishing error: {0}")]
    Content(#[from] ContentError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Billing-specific errors
///
/// Every failure a subscription request can hit for expected reasons.
/// The variant carries enough context for the caller to explain the
/// rejection without consulting anything else.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    /// Requested plan does not exist in the catalog
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Discount code does not exist
    #[error("Invalid discount code: {0}")]
    UnknownDiscountCode(String),

    /// Discount code has been redeemed the maximum number of times
    #[error("Discount code {code} has reached its usage limit ({max_uses} uses)")]
    DiscountCodeExhausted { code: String, max_uses: u32 },

    /// Discount code is past its validity date
    #[error("Discount code {code} expired on {valid_until}")]
    DiscountCodeExpired { code: String, valid_until: String },

    /// Payment method failed rule validation
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    /// Payment gateway declined the charge
    #[error("Payment declined for amount {amount:.2}")]
    PaymentDeclined { amount: f64 },

    /// Subscription lookup failed
    #[error("Subscription not found: {0}")]
    SubscriptionNotFound(String),

    /// Notification send failed
    #[error("Notification failed: {0}")]
    NotificationFailed(String),
}

/// Content publishing errors
///
/// Failures of the post publish pipeline. One variant per business rule so
/// callers learn WHY a post was rejected, not just that it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    /// Post does not exist in the store
    #[error("Post {0} not found")]
    PostNotFound(u64),

    /// Post has an empty or whitespace-only title
    #[error("Post {0} has no title")]
    MissingTitle(u64),

    /// Post body is below the minimum length
    #[error("Post {id} content is too short ({length} chars, minimum {minimum})")]
    ContentTooShort {
        id: u64,
        length: usize,
        minimum: usize,
    },

    /// Referenced author does not exist
    #[error("Author {0} not found")]
    AuthorNotFound(u64),

    /// Post is already in the published state
    #[error("Post {0} is already published")]
    AlreadyPublished(u64),

    /// Author has no subscribers to notify
    #[error("No subscribers found for author {0}")]
    NoSubscribers(u64),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        TallyError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        TallyError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TallyError {
    fn from(err: toml::de::Error) -> Self {
        TallyError::Configuration(format!("TOML parse error: {err}"))
    }
}
