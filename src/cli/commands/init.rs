//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "tally.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Tally configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set TALLY_BILLING_GATEWAY_API_KEY in a .env file");
                println!("  3. Validate configuration: tally validate-config");
                println!("  4. Try it: tally subscribe --user user-1 --plan pro \\");
                println!("       --discount-code SAVE10 \\");
                println!("       --card-number 1234567890123456 --expiry 12/26 --cvv 123");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Tally Configuration File
# Subscription billing & publishing engine

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (quote prices, never charge)
dry_run = false

[billing]
# Charges at or above this amount are declined
max_charge = 1000.0

# Payment gateway API key (keep it in the environment, not in this file)
# gateway_api_key = "${TALLY_BILLING_GATEWAY_API_KEY}"

[billing.card]
card_number_length = 16
cvv_length = 3

# Plan catalog. Remove this whole section to use the built-in three tiers.
[[plans]]
tier = "basic"
name = "Basic"
monthly_price = 9.99
max_users = 1
features = ["storage", "email"]

[[plans]]
tier = "pro"
name = "Pro"
monthly_price = 29.99
max_users = 5
features = ["storage", "email", "api"]

[[plans]]
tier = "enterprise"
name = "Enterprise"
monthly_price = 99.99
max_users = 50
features = ["storage", "email", "api", "sla"]

# Discount codes. Remove this whole section to use the built-in demo codes.
[[discounts]]
code = "SAVE10"
percent = 10
max_uses = 100
valid_until = "2099-12-31"

[logging]
# Enable local file logging
local_enabled = false

# Local log directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "tally.toml".to_string(),
            force: false,
        };

        assert_eq!(args.output, "tally.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generated_config_parses_and_validates() {
        let content = InitArgs::generate_config();
        let config: crate::config::TallyConfig = toml::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.plan_catalog().plans().len(), 3);
    }
}
