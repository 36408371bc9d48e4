//! Plans command implementation
//!
//! Prints the plan catalog and discount codes the configuration describes.

use crate::config::load_config;
use clap::Args;

/// Arguments for the plans command
#[derive(Args, Debug)]
pub struct PlansArgs {
    /// Also list discount codes and their remaining uses
    #[arg(long)]
    pub with_discounts: bool,
}

impl PlansArgs {
    /// Execute the plans command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let catalog = config.plan_catalog();
        println!("Available plans:");
        for plan in catalog.plans() {
            println!(
                "  {:<12} ${:>6.2}/month  up to {} users  [{}]",
                plan.name,
                plan.monthly_price,
                plan.max_users,
                plan.features.join(", ")
            );
        }

        if self.with_discounts {
            let store = config.discount_store();
            println!();
            println!("Discount codes:");
            let mut codes: Vec<_> = store.codes().collect();
            codes.sort_by(|a, b| a.code.cmp(&b.code));
            for discount in codes {
                println!(
                    "  {:<10} {:>3}% off  {}/{} uses  valid until {}",
                    discount.code,
                    discount.percent,
                    discount.used_count,
                    discount.max_uses,
                    discount.valid_until
                );
            }
        }

        Ok(0)
    }
}
