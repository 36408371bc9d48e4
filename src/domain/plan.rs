//! Subscription plan catalog
//!
//! Plans form a closed set of tiers. The tier is a tagged enum rather than
//! a class hierarchy so matching over it is exhaustive: adding a tier fails
//! compilation everywhere a match forgot to handle it.

use crate::domain::errors::BillingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plan tier selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Single-user entry plan
    Basic,
    /// Team plan with API access
    Pro,
    /// Large-org plan with SLA
    Enterprise,
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanTier::Basic => "basic",
            PlanTier::Pro => "pro",
            PlanTier::Enterprise => "enterprise",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PlanTier {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(PlanTier::Basic),
            "pro" => Ok(PlanTier::Pro),
            "enterprise" => Ok(PlanTier::Enterprise),
            other => Err(BillingError::UnknownPlan(other.to_string())),
        }
    }
}

/// A subscription plan
///
/// Immutable once constructed; the catalog hands out references and nothing
/// rewrites a plan in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Tier this plan belongs to
    pub tier: PlanTier,

    /// Human-readable plan name
    pub name: String,

    /// Monthly price in the configured currency
    pub monthly_price: f64,

    /// Maximum number of seats
    pub max_users: u32,

    /// Feature flags included in this plan
    pub features: Vec<String>,
}

impl Plan {
    /// Creates a new plan
    pub fn new(
        tier: PlanTier,
        name: impl Into<String>,
        monthly_price: f64,
        max_users: u32,
        features: Vec<String>,
    ) -> Self {
        Self {
            tier,
            name: name.into(),
            monthly_price,
            max_users,
            features,
        }
    }

    /// Whether the plan includes a named feature
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// The set of plans available for subscription
///
/// Constructed once (from defaults or configuration) and passed by
/// reference to whoever needs it.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Builds a catalog from an explicit plan list
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// Looks up a plan by tier
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnknownPlan`] if no plan exists for the tier
    pub fn plan(&self, tier: PlanTier) -> Result<&Plan, BillingError> {
        self.plans
            .iter()
            .find(|p| p.tier == tier)
            .ok_or_else(|| BillingError::UnknownPlan(tier.to_string()))
    }

    /// All plans in the catalog
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }
}

impl Default for PlanCatalog {
    /// The standard three-tier catalog
    fn default() -> Self {
        let feature = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self::new(vec![
            Plan::new(PlanTier::Basic, "Basic", 9.99, 1, feature(&["storage", "email"])),
            Plan::new(
                PlanTier::Pro,
                "Pro",
                29.99,
                5,
                feature(&["storage", "email", "api"]),
            ),
            Plan::new(
                PlanTier::Enterprise,
                "Enterprise",
                99.99,
                50,
                feature(&["storage", "email", "api", "sla"]),
            ),
        ])
    }
}
