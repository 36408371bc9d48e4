//! Configuration management
//!
//! Loads `tally.toml`, substitutes `${VAR}` placeholders from the
//! environment, applies `TALLY_*` overrides, and validates the result.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BillingConfig, DiscountConfig, LoggingConfig, PlanConfig, TallyConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
