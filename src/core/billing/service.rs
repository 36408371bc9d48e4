//! Billing orchestration
//!
//! [`BillingService`] drives the subscription pipeline: validate the plan,
//! validate the payment method, redeem the discount, charge the gateway,
//! record the subscription, notify the user. Each step returns a `Result`
//! and the first failure stops everything after it — in particular, the
//! gateway is never charged once an earlier step has failed, and a
//! discount use is never consumed by a request that was going to be
//! rejected anyway.

use crate::core::billing::gateway::PaymentGateway;
use crate::core::billing::notifier::Notifier;
use crate::domain::discount::DiscountStore;
use crate::domain::errors::BillingError;
use crate::domain::ids::{SubscriptionId, UserId};
use crate::domain::payment::{CardRules, PaymentMethod};
use crate::domain::plan::{PlanCatalog, PlanTier};
use crate::domain::subscription::{Subscription, SubscriptionBuilder};
use chrono::Utc;
use tracing::{info, warn};

/// A single subscription request
#[derive(Debug, Clone)]
pub struct SubscribeRequest {
    /// Account to subscribe
    pub user_id: UserId,

    /// Requested plan tier
    pub tier: PlanTier,

    /// Optional discount code
    pub discount_code: Option<String>,

    /// Payment details
    pub payment: PaymentMethod,
}

/// Subscription billing service
///
/// Owns the plan catalog, the discount store, and the subscription list.
/// Constructed explicitly by the process entry point and passed to whoever
/// needs it — there is no global instance.
pub struct BillingService<G, N> {
    catalog: PlanCatalog,
    discounts: DiscountStore,
    card_rules: CardRules,
    gateway: G,
    notifier: N,
    subscriptions: Vec<Subscription>,
}

impl<G, N> BillingService<G, N>
where
    G: PaymentGateway,
    N: Notifier,
{
    /// Creates a billing service from its collaborators
    pub fn new(
        catalog: PlanCatalog,
        discounts: DiscountStore,
        card_rules: CardRules,
        gateway: G,
        notifier: N,
    ) -> Self {
        Self {
            catalog,
            discounts,
            card_rules,
            gateway,
            notifier,
            subscriptions: Vec::new(),
        }
    }

    /// Quotes the monthly price for a tier with an optional discount code
    ///
    /// Validates the code without consuming a use, so quoting is free to
    /// repeat.
    ///
    /// # Errors
    ///
    /// Returns the same errors subscription would: unknown plan, unknown,
    /// exhausted, or expired code.
    pub fn quote(&self, tier: PlanTier, discount_code: Option<&str>) -> Result<f64, BillingError> {
        let plan = self.catalog.plan(tier)?;
        let price = match discount_code {
            Some(code) => {
                let discount = self.discounts.peek(code, Utc::now().date_naive())?;
                discount.apply(plan.monthly_price)
            }
            None => plan.monthly_price,
        };
        Ok(price)
    }

    /// Runs the full subscription pipeline for one request
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error; later steps do not run.
    /// A failed welcome notification does NOT fail the subscription — the
    /// charge has already happened — so it is logged and the subscription
    /// is returned anyway.
    pub fn subscribe(&mut self, request: SubscribeRequest) -> Result<Subscription, BillingError> {
        let plan = self.catalog.plan(request.tier)?.clone();
        request.payment.validate(&self.card_rules)?;

        let price = match request.discount_code.as_deref() {
            Some(code) => {
                let discount = self.discounts.redeem(code, Utc::now().date_naive())?;
                discount.apply(plan.monthly_price)
            }
            None => plan.monthly_price,
        };

        let charge_id = self.gateway.charge(price)?;
        info!(
            user_id = %request.user_id,
            tier = %request.tier,
            price,
            charge_id = %charge_id,
            "Charge accepted"
        );

        let subscription = SubscriptionBuilder::new()
            .user_id(request.user_id.clone())
            .tier(request.tier)
            .price(price)
            .started_at(Utc::now())
            .build()
            .expect("all required subscription fields are set");

        self.subscriptions.push(subscription.clone());

        // Best-effort: the charge already went through, so a failed welcome
        // mail is reported here and nowhere else.
        if let Err(e) = self
            .notifier
            .send_welcome(&request.user_id, &plan.name, price)
        {
            warn!(user_id = %request.user_id, error = %e, "Welcome notification failed");
        }

        Ok(subscription)
    }

    /// Cancels a subscription by ID
    ///
    /// The stored record is replaced with a cancelled copy; the history
    /// entry survives for revenue reporting.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::SubscriptionNotFound`] if the ID is unknown
    pub fn cancel(&mut self, id: &SubscriptionId) -> Result<Subscription, BillingError> {
        let index = self
            .subscriptions
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| BillingError::SubscriptionNotFound(id.to_string()))?;

        let cancelled = self.subscriptions[index].cancelled();
        self.subscriptions[index] = cancelled.clone();

        if let Err(e) = self.notifier.send_cancellation(&cancelled.user_id) {
            warn!(user_id = %cancelled.user_id, error = %e, "Cancellation notification failed");
        }

        Ok(cancelled)
    }

    /// Monthly revenue from currently active subscriptions
    pub fn active_revenue(&self) -> f64 {
        self.subscriptions
            .iter()
            .filter(|s| s.is_active())
            .map(|s| s.price)
            .sum()
    }

    /// All subscriptions, active and cancelled
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// The plan catalog this service sells from
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Read-only view of the discount store
    pub fn discounts(&self) -> &DiscountStore {
        &self.discounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::billing::gateway::ChargeId;
    use std::cell::Cell;

    /// Gateway double that counts charges and always approves
    struct CountingGateway {
        charges: Cell<u32>,
    }

    impl CountingGateway {
        fn new() -> Self {
            Self {
                charges: Cell::new(0),
            }
        }
    }

    impl PaymentGateway for &CountingGateway {
        fn charge(&self, _amount: f64) -> Result<ChargeId, BillingError> {
            self.charges.set(self.charges.get() + 1);
            Ok(ChargeId::generate())
        }
    }

    /// Notifier double that always fails
    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn send_welcome(&self, _: &UserId, _: &str, _: f64) -> Result<(), BillingError> {
            Err(BillingError::NotificationFailed("smtp down".to_string()))
        }

        fn send_cancellation(&self, _: &UserId) -> Result<(), BillingError> {
            Err(BillingError::NotificationFailed("smtp down".to_string()))
        }
    }

    /// Notifier double that silently succeeds
    struct QuietNotifier;

    impl Notifier for QuietNotifier {
        fn send_welcome(&self, _: &UserId, _: &str, _: f64) -> Result<(), BillingError> {
            Ok(())
        }

        fn send_cancellation(&self, _: &UserId) -> Result<(), BillingError> {
            Ok(())
        }
    }

    fn service<'a>(
        gateway: &'a CountingGateway,
    ) -> BillingService<&'a CountingGateway, QuietNotifier> {
        BillingService::new(
            PlanCatalog::default(),
            DiscountStore::sample(),
            CardRules::default(),
            gateway,
            QuietNotifier,
        )
    }

    fn request(tier: PlanTier, code: Option<&str>) -> SubscribeRequest {
        SubscribeRequest {
            user_id: UserId::new("user-1").unwrap(),
            tier,
            discount_code: code.map(|c| c.to_string()),
            payment: PaymentMethod::new("1234567890123456", "12/26", "123"),
        }
    }

    #[test]
    fn test_subscribe_without_discount() {
        let gateway = CountingGateway::new();
        let mut service = service(&gateway);

        let sub = service.subscribe(request(PlanTier::Basic, None)).unwrap();
        assert_eq!(sub.price, 9.99);
        assert_eq!(gateway.charges.get(), 1);
        assert_eq!(service.subscriptions().len(), 1);
    }

    #[test]
    fn test_subscribe_applies_discount() {
        let gateway = CountingGateway::new();
        let mut service = service(&gateway);

        let sub = service
            .subscribe(request(PlanTier::Pro, Some("SAVE10")))
            .unwrap();
        assert!((sub.price - 26.991).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_card_never_reaches_gateway() {
        let gateway = CountingGateway::new();
        let mut service = service(&gateway);

        let mut bad = request(PlanTier::Basic, None);
        bad.payment = PaymentMethod::new("123456789012345", "12/26", "123");

        let err = service.subscribe(bad).unwrap_err();
        assert!(matches!(err, BillingError::InvalidPaymentMethod(_)));
        assert_eq!(gateway.charges.get(), 0);
        assert!(service.subscriptions().is_empty());
    }

    #[test]
    fn test_invalid_request_does_not_burn_discount_use() {
        let gateway = CountingGateway::new();
        let mut service = service(&gateway);

        let mut bad = request(PlanTier::Pro, Some("SAVE10"));
        bad.payment = PaymentMethod::new("short", "12/26", "123");
        let _ = service.subscribe(bad);

        assert_eq!(service.discounts().get("SAVE10").unwrap().used_count, 0);
    }

    #[test]
    fn test_failed_notification_does_not_fail_subscribe() {
        let gateway = CountingGateway::new();
        let mut service = BillingService::new(
            PlanCatalog::default(),
            DiscountStore::sample(),
            CardRules::default(),
            &gateway,
            FailingNotifier,
        );

        let sub = service.subscribe(request(PlanTier::Basic, None)).unwrap();
        assert!(sub.is_active());
        assert_eq!(service.subscriptions().len(), 1);
    }

    #[test]
    fn test_cancel_replaces_with_cancelled_copy() {
        let gateway = CountingGateway::new();
        let mut service = service(&gateway);

        let sub = service.subscribe(request(PlanTier::Pro, None)).unwrap();
        let cancelled = service.cancel(&sub.id).unwrap();

        assert!(!cancelled.is_active());
        assert_eq!(service.subscriptions().len(), 1);
        assert!(!service.subscriptions()[0].is_active());
    }

    #[test]
    fn test_cancel_unknown_subscription() {
        let gateway = CountingGateway::new();
        let mut service = service(&gateway);

        let err = service.cancel(&SubscriptionId::generate()).unwrap_err();
        assert!(matches!(err, BillingError::SubscriptionNotFound(_)));
    }

    #[test]
    fn test_active_revenue_ignores_cancelled() {
        let gateway = CountingGateway::new();
        let mut service = service(&gateway);

        let first = service.subscribe(request(PlanTier::Basic, None)).unwrap();
        service.subscribe(request(PlanTier::Pro, None)).unwrap();
        assert!((service.active_revenue() - (9.99 + 29.99)).abs() < 1e-9);

        service.cancel(&first.id).unwrap();
        assert!((service.active_revenue() - 29.99).abs() < 1e-9);
    }

    #[test]
    fn test_quote_does_not_consume_code() {
        let gateway = CountingGateway::new();
        let service = service(&gateway);

        let quoted = service.quote(PlanTier::Pro, Some("SAVE10")).unwrap();
        assert!((quoted - 26.991).abs() < 1e-9);
        let again = service.quote(PlanTier::Pro, Some("SAVE10")).unwrap();
        assert!((again - 26.991).abs() < 1e-9);
        assert_eq!(gateway.charges.get(), 0);
    }
}
