//! Subscribe command implementation
//!
//! Runs the billing pipeline once for the given user, plan, and card.
//! This is the outermost caller: the only place a billing failure turns
//! into a printed message.

use crate::config::{load_config, secret_string};
use crate::core::billing::{BillingService, ConsoleNotifier, SimulatedGateway, SubscribeRequest};
use crate::domain::ids::UserId;
use crate::domain::payment::PaymentMethod;
use crate::domain::plan::PlanTier;
use clap::Args;

/// Arguments for the subscribe command
#[derive(Args, Debug)]
pub struct SubscribeArgs {
    /// User to subscribe
    #[arg(long)]
    pub user: String,

    /// Plan tier (basic, pro, enterprise)
    #[arg(long)]
    pub plan: PlanTier,

    /// Optional discount code
    #[arg(long)]
    pub discount_code: Option<String>,

    /// Card number
    #[arg(long)]
    pub card_number: String,

    /// Card expiry (MM/YY)
    #[arg(long)]
    pub expiry: String,

    /// Card CVV
    #[arg(long)]
    pub cvv: String,
}

impl SubscribeArgs {
    /// Execute the subscribe command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(user = %self.user, plan = %self.plan, "Running subscription");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let user_id = match UserId::new(self.user.clone()) {
            Ok(id) => id,
            Err(e) => {
                println!("❌ {e}");
                return Ok(1);
            }
        };

        let api_key = config
            .billing
            .gateway_api_key
            .clone()
            .unwrap_or_else(|| secret_string("sk_test_simulated".to_string()));
        let gateway = SimulatedGateway::new(api_key, config.billing.max_charge);
        tracing::debug!(live = gateway.is_live(), "Gateway configured");

        let mut service = BillingService::new(
            config.plan_catalog(),
            config.discount_store(),
            config.billing.card,
            gateway,
            ConsoleNotifier::new(),
        );

        if config.application.dry_run {
            return match service.quote(self.plan, self.discount_code.as_deref()) {
                Ok(price) => {
                    println!("🔍 Dry run: {} would cost ${price:.2}/month", self.plan);
                    Ok(0)
                }
                Err(e) => {
                    println!("❌ Quote failed: {e}");
                    Ok(1)
                }
            };
        }

        let request = SubscribeRequest {
            user_id,
            tier: self.plan,
            discount_code: self.discount_code.clone(),
            payment: PaymentMethod::new(
                self.card_number.clone(),
                self.expiry.clone(),
                self.cvv.clone(),
            ),
        };

        match service.subscribe(request) {
            Ok(subscription) => {
                println!("✅ Subscribed {} to {}", subscription.user_id, subscription.tier);
                println!("   Subscription ID: {}", subscription.id);
                println!("   Monthly price: ${:.2}", subscription.price);
                println!("   Active monthly revenue: ${:.2}", service.active_revenue());
                Ok(0)
            }
            Err(e) => {
                println!("❌ Subscription failed: {e}");
                Ok(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_args_debug() {
        let args = SubscribeArgs {
            user: "user-1".to_string(),
            plan: PlanTier::Pro,
            discount_code: Some("SAVE10".to_string()),
            card_number: "1234567890123456".to_string(),
            expiry: "12/26".to_string(),
            cvv: "123".to_string(),
        };
        let rendered = format!("{args:?}");
        assert!(rendered.contains("SAVE10"));
    }
}
