//! Payment gateway seam
//!
//! The billing service talks to a [`PaymentGateway`] trait so the real
//! processor can be swapped for a test double. The shipped implementation
//! simulates one: charges under a configured ceiling succeed, everything
//! else is declined.

use crate::config::SecretString;
use crate::domain::errors::BillingError;
use secrecy::ExposeSecret;
use std::fmt;
use uuid::Uuid;

/// Receipt identifier returned by a successful charge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChargeId(String);

impl ChargeId {
    /// Generates a fresh charge ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the charge ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChargeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that can move money
pub trait PaymentGateway {
    /// Attempts to charge the given amount
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::PaymentDeclined`] if the processor rejects
    /// the charge.
    fn charge(&self, amount: f64) -> Result<ChargeId, BillingError>;
}

/// Simulated payment processor
///
/// Holds its API key as a [`SecretString`] so the key can never end up in
/// debug output or logs; callers see only whether the key is a live one.
pub struct SimulatedGateway {
    api_key: SecretString,
    max_charge: f64,
}

impl SimulatedGateway {
    /// Creates a gateway that declines charges at or above `max_charge`
    pub fn new(api_key: SecretString, max_charge: f64) -> Self {
        Self {
            api_key,
            max_charge,
        }
    }

    /// Whether the configured key is a live-mode key
    pub fn is_live(&self) -> bool {
        self.api_key.expose_secret().starts_with("sk_live_")
    }
}

impl PaymentGateway for SimulatedGateway {
    fn charge(&self, amount: f64) -> Result<ChargeId, BillingError> {
        if amount >= self.max_charge {
            return Err(BillingError::PaymentDeclined { amount });
        }
        Ok(ChargeId::generate())
    }
}
