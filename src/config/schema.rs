//! Configuration schema types
//!
//! This module defines the configuration structure for Tally as it maps to
//! the TOML file. Each section validates itself; `TallyConfig::validate`
//! aggregates.

use crate::config::SecretString;
use crate::domain::discount::{Discount, DiscountStore};
use crate::domain::payment::CardRules;
use crate::domain::plan::{Plan, PlanCatalog, PlanTier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Main Tally configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Billing settings
    #[serde(default)]
    pub billing: BillingConfig,

    /// Plan catalog overrides (absent = built-in three-tier catalog)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans: Option<Vec<PlanConfig>>,

    /// Discount code seeds (absent = built-in demo codes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<DiscountConfig>>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TallyConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid value
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.billing.validate()?;
        if let Some(plans) = &self.plans {
            for plan in plans {
                plan.validate()?;
            }
        }
        if let Some(discounts) = &self.discounts {
            for discount in discounts {
                discount.validate()?;
            }
        }
        self.logging.validate()?;
        Ok(())
    }

    /// Builds the plan catalog this configuration describes
    pub fn plan_catalog(&self) -> PlanCatalog {
        match &self.plans {
            Some(plans) => PlanCatalog::new(plans.iter().map(PlanConfig::to_plan).collect()),
            None => PlanCatalog::default(),
        }
    }

    /// Builds the discount store this configuration describes
    pub fn discount_store(&self) -> DiscountStore {
        match &self.discounts {
            Some(discounts) => DiscountStore::from_discounts(
                discounts.iter().map(DiscountConfig::to_discount).collect(),
            ),
            None => DiscountStore::sample(),
        }
    }
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            billing: BillingConfig::default(),
            plans: None,
            discounts: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (quote prices, never charge)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Billing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Charges at or above this amount are declined by the gateway
    #[serde(default = "default_max_charge")]
    pub max_charge: f64,

    /// Card validation rules
    #[serde(default)]
    pub card: CardRules,

    /// Payment gateway API key (use ${VAR} substitution, never a literal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_api_key: Option<SecretString>,
}

impl BillingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_charge <= 0.0 {
            return Err(format!(
                "billing.max_charge must be positive, got {}",
                self.max_charge
            ));
        }
        if self.card.card_number_length == 0 || self.card.cvv_length == 0 {
            return Err("billing.card lengths must be non-zero".to_string());
        }
        Ok(())
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            max_charge: default_max_charge(),
            card: CardRules::default(),
            gateway_api_key: None,
        }
    }
}

/// A plan catalog entry as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Tier this entry defines
    pub tier: PlanTier,

    /// Human-readable plan name
    pub name: String,

    /// Monthly price
    pub monthly_price: f64,

    /// Maximum number of seats
    pub max_users: u32,

    /// Included feature flags
    #[serde(default)]
    pub features: Vec<String>,
}

impl PlanConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("plan for tier '{}' has an empty name", self.tier));
        }
        if self.monthly_price < 0.0 {
            return Err(format!(
                "plan '{}' has a negative monthly_price",
                self.name
            ));
        }
        if self.max_users == 0 {
            return Err(format!("plan '{}' allows zero users", self.name));
        }
        Ok(())
    }

    fn to_plan(&self) -> Plan {
        Plan::new(
            self.tier,
            self.name.clone(),
            self.monthly_price,
            self.max_users,
            self.features.clone(),
        )
    }
}

/// A discount code seed as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Code users type in
    pub code: String,

    /// Percentage off (0-100)
    pub percent: u8,

    /// Total redemptions allowed
    pub max_uses: u32,

    /// Redemptions already consumed
    #[serde(default)]
    pub used_count: u32,

    /// Last valid calendar day
    pub valid_until: NaiveDate,
}

impl DiscountConfig {
    fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("discount code cannot be empty".to_string());
        }
        if self.percent > 100 {
            return Err(format!(
                "discount '{}' percent must be 0-100, got {}",
                self.code, self.percent
            ));
        }
        if self.used_count > self.max_uses {
            return Err(format!(
                "discount '{}' used_count exceeds max_uses",
                self.code
            ));
        }
        Ok(())
    }

    fn to_discount(&self) -> Discount {
        Discount::new(
            self.code.clone(),
            self.percent,
            self.max_uses,
            self.valid_until,
        )
        .with_used_count(self.used_count)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_charge() -> f64 {
    1000.0
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
