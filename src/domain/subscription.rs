//! Subscription domain model
//!
//! A subscription records the outcome of a successful billing run. Records
//! are immutable: state transitions (cancellation) produce a new copy
//! rather than rewriting the original.

use crate::domain::ids::{SubscriptionId, UserId};
use crate::domain::plan::PlanTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Billed monthly, counts toward revenue
    Active,
    /// Terminated by the user, kept for history
    Cancelled,
}

/// An active or historical subscription
///
/// # Examples
///
/// ```
/// use tally::domain::subscription::SubscriptionBuilder;
/// use tally::domain::ids::UserId;
/// use tally::domain::plan::PlanTier;
/// use chrono::Utc;
///
/// let subscription = SubscriptionBuilder::new()
///     .user_id(UserId::new("user-1").unwrap())
///     .tier(PlanTier::Pro)
///     .price(26.991)
///     .started_at(Utc::now())
///     .build()
///     .unwrap();
/// assert!(subscription.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for this subscription
    pub id: SubscriptionId,

    /// Account the subscription belongs to
    pub user_id: UserId,

    /// Plan tier subscribed to
    pub tier: PlanTier,

    /// Monthly price actually charged, after discounts
    pub price: f64,

    /// Current lifecycle state
    pub status: SubscriptionStatus,

    /// Timestamp the subscription started
    pub started_at: DateTime<Utc>,
}

impl Subscription {
    /// Creates a new builder for constructing a Subscription
    pub fn builder() -> SubscriptionBuilder {
        SubscriptionBuilder::default()
    }

    /// Whether the subscription currently bills
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }

    /// Returns a cancelled copy of this subscription
    ///
    /// The original is untouched; the caller decides what to do with both.
    pub fn cancelled(&self) -> Subscription {
        Subscription {
            status: SubscriptionStatus::Cancelled,
            ..self.clone()
        }
    }
}

/// Builder for constructing Subscription instances
///
/// The ID defaults to a freshly generated one and the status to active;
/// everything else is required.
#[derive(Debug, Default)]
pub struct SubscriptionBuilder {
    id: Option<SubscriptionId>,
    user_id: Option<UserId>,
    tier: Option<PlanTier>,
    price: Option<f64>,
    started_at: Option<DateTime<Utc>>,
}

impl SubscriptionBuilder {
    /// Creates a new SubscriptionBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit subscription ID (otherwise generated)
    pub fn id(mut self, id: SubscriptionId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the owning user
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the plan tier
    pub fn tier(mut self, tier: PlanTier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Sets the charged monthly price
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the start timestamp
    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Builds the Subscription
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing
    pub fn build(self) -> Result<Subscription, String> {
        Ok(Subscription {
            id: self.id.unwrap_or_else(SubscriptionId::generate),
            user_id: self.user_id.ok_or("user_id is required")?,
            tier: self.tier.ok_or("tier is required")?,
            price: self.price.ok_or("price is required")?,
            status: SubscriptionStatus::Active,
            started_at: self.started_at.ok_or("started_at is required")?,
        })
    }
}
