//! Subscriber notification seam
//!
//! Notifications are side effects, so they report their own outcome as a
//! `Result` instead of swallowing failures. Whether a failed send aborts
//! anything is the caller's decision, made where the `Result` is inspected.

use crate::domain::errors::BillingError;
use crate::domain::ids::UserId;

/// Something that can reach a user
pub trait Notifier {
    /// Sends the welcome message after a successful subscription
    fn send_welcome(&self, user_id: &UserId, plan_name: &str, price: f64)
        -> Result<(), BillingError>;

    /// Sends the goodbye message after a cancellation
    fn send_cancellation(&self, user_id: &UserId) -> Result<(), BillingError>;
}

/// Notifier that writes to stdout
///
/// Stands in for the mail delivery channel; the printed line IS the
/// simulated send, not a reaction to one.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Creates a console notifier
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn send_welcome(
        &self,
        user_id: &UserId,
        plan_name: &str,
        price: f64,
    ) -> Result<(), BillingError> {
        println!("  [EMAIL] Welcome to {plan_name}, user {user_id}! You're charged ${price:.2}/month.");
        Ok(())
    }

    fn send_cancellation(&self, user_id: &UserId) -> Result<(), BillingError> {
        println!("  [EMAIL] Sorry to see you go, user {user_id}!");
        Ok(())
    }
}
