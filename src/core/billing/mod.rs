//! Subscription billing
//!
//! The billing side of Tally: a [`BillingService`] orchestrator over the
//! plan catalog, discount store, payment gateway, and notifier. The
//! gateway and notifier sit behind traits so tests can substitute doubles
//! and count exactly which steps ran.

pub mod gateway;
pub mod notifier;
pub mod service;

pub use gateway::{ChargeId, PaymentGateway, SimulatedGateway};
pub use notifier::{ConsoleNotifier, Notifier};
pub use service::{BillingService, SubscribeRequest};
