//! Payment method validation
//!
//! Card details never reach a real processor in this crate; validation is
//! the rule check the original billing flow performed before charging.
//! Rules are data (configurable lengths) rather than magic numbers.

use crate::domain::errors::BillingError;
use serde::{Deserialize, Serialize};

/// Card validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRules {
    /// Required number of card digits
    pub card_number_length: usize,

    /// Required number of CVV digits
    pub cvv_length: usize,
}

impl Default for CardRules {
    fn default() -> Self {
        Self {
            card_number_length: 16,
            cvv_length: 3,
        }
    }
}

/// A payment method as submitted by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Card number, digits only
    pub card_number: String,

    /// Expiry in MM/YY form
    pub expiry: String,

    /// Card verification value
    pub cvv: String,
}

impl PaymentMethod {
    /// Creates a new payment method
    pub fn new(
        card_number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    /// Validates the payment method against the given rules
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::InvalidPaymentMethod`] naming the first rule
    /// that failed, so the caller can tell the user what to fix.
    pub fn validate(&self, rules: &CardRules) -> Result<(), BillingError> {
        if self.card_number.len() != rules.card_number_length
            || !self.card_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(BillingError::InvalidPaymentMethod(format!(
                "card number must be {} digits",
                rules.card_number_length
            )));
        }
        if self.expiry.trim().is_empty() {
            return Err(BillingError::InvalidPaymentMethod(
                "missing card expiry".to_string(),
            ));
        }
        if self.cvv.len() != rules.cvv_length || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(BillingError::InvalidPaymentMethod(format!(
                "CVV must be {} digits",
                rules.cvv_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rules() -> CardRules {
        CardRules::default()
    }

    #[test]
    fn test_valid_card() {
        let method = PaymentMethod::new("1234567890123456", "12/26", "123");
        assert!(method.validate(&rules()).is_ok());
    }

    #[test_case("123456789012345", "12/26", "123" ; "fifteen digit number")]
    #[test_case("12345678901234567", "12/26", "123" ; "seventeen digit number")]
    #[test_case("123456789012345a", "12/26", "123" ; "letter in number")]
    #[test_case("1234567890123456", "", "123" ; "missing expiry")]
    #[test_case("1234567890123456", "12/26", "12" ; "short cvv")]
    #[test_case("1234567890123456", "12/26", "12x" ; "non numeric cvv")]
    fn test_invalid_cards(number: &str, expiry: &str, cvv: &str) {
        let method = PaymentMethod::new(number, expiry, cvv);
        assert!(matches!(
            method.validate(&rules()),
            Err(BillingError::InvalidPaymentMethod(_))
        ));
    }

    #[test]
    fn test_error_names_the_rule() {
        let method = PaymentMethod::new("123456789012345", "12/26", "123");
        let err = method.validate(&rules()).unwrap_err();
        assert!(err.to_string().contains("16 digits"));
    }
}
