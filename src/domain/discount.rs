//! Discount codes and their usage store
//!
//! Discount records are immutable values. Redeeming a code never mutates a
//! record in place: the store replaces the stored record with an updated
//! copy. The store itself is an explicit object handed to the billing
//! service at construction, so there is no global usage registry anywhere.

use crate::domain::errors::BillingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A discount code definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Code as entered by the user, stored uppercase
    pub code: String,

    /// Percentage taken off the plan price (0-100)
    pub percent: u8,

    /// How many redemptions the code allows in total
    pub max_uses: u32,

    /// How many redemptions have happened so far
    pub used_count: u32,

    /// Last calendar day the code is valid
    pub valid_until: NaiveDate,
}

impl Discount {
    /// Creates a new unused discount code
    pub fn new(code: impl Into<String>, percent: u8, max_uses: u32, valid_until: NaiveDate) -> Self {
        Self {
            code: code.into().to_ascii_uppercase(),
            percent,
            max_uses,
            used_count: 0,
            valid_until,
        }
    }

    /// Sets the used count, for seeding partially-consumed codes
    pub fn with_used_count(mut self, used_count: u32) -> Self {
        self.used_count = used_count;
        self
    }

    /// Whether the code has redemptions left
    pub fn has_uses_remaining(&self) -> bool {
        self.used_count < self.max_uses
    }

    /// Whether the code is still valid on the given day
    pub fn is_valid_on(&self, day: NaiveDate) -> bool {
        day <= self.valid_until
    }

    /// Applies the discount to a price, returning the reduced price
    ///
    /// Pure: the discount itself is untouched.
    pub fn apply(&self, price: f64) -> f64 {
        price * (1.0 - f64::from(self.percent) / 100.0)
    }
}

/// Owned store of discount codes
///
/// Lookups are by uppercase code. Redemption validates the code and, on
/// success, swaps in a copy with the use recorded.
#[derive(Debug, Clone, Default)]
pub struct DiscountStore {
    codes: HashMap<String, Discount>,
}

impl DiscountStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a list of discounts
    pub fn from_discounts(discounts: Vec<Discount>) -> Self {
        let codes = discounts
            .into_iter()
            .map(|d| (d.code.clone(), d))
            .collect();
        Self { codes }
    }

    /// The demo code set used by the CLI and tests
    pub fn sample() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date literal");
        Self::from_discounts(vec![
            Discount::new("SAVE10", 10, 100, date(2099, 12, 31)),
            Discount::new("HALFOFF", 50, 10, date(2099, 12, 31)).with_used_count(9),
            Discount::new("EXPIRED", 20, 100, date(2020, 1, 1)),
        ])
    }

    /// Looks up a code without redeeming it
    pub fn get(&self, code: &str) -> Option<&Discount> {
        self.codes.get(&code.to_ascii_uppercase())
    }

    /// Iterates over all codes, in no particular order
    pub fn codes(&self) -> impl Iterator<Item = &Discount> {
        self.codes.values()
    }

    /// Number of codes in the store
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the store holds no codes
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Validates a code as of the given day without consuming a use
    ///
    /// Checks existence, the usage cap, and expiry, in that order.
    ///
    /// # Errors
    ///
    /// - [`BillingError::UnknownDiscountCode`] if the code does not exist
    /// - [`BillingError::DiscountCodeExhausted`] if the cap is reached
    /// - [`BillingError::DiscountCodeExpired`] if `day` is past the validity
    pub fn peek(&self, code: &str, day: NaiveDate) -> Result<&Discount, BillingError> {
        let current = self
            .codes
            .get(&code.to_ascii_uppercase())
            .ok_or_else(|| BillingError::UnknownDiscountCode(code.to_string()))?;

        if !current.has_uses_remaining() {
            return Err(BillingError::DiscountCodeExhausted {
                code: current.code.clone(),
                max_uses: current.max_uses,
            });
        }
        if !current.is_valid_on(day) {
            return Err(BillingError::DiscountCodeExpired {
                code: current.code.clone(),
                valid_until: current.valid_until.to_string(),
            });
        }
        Ok(current)
    }

    /// Redeems a code as of the given day
    ///
    /// Runs the same validation as [`peek`](Self::peek); on success the
    /// stored record is replaced with a copy whose use count is incremented,
    /// and a snapshot of the redeemed discount is returned.
    pub fn redeem(&mut self, code: &str, day: NaiveDate) -> Result<Discount, BillingError> {
        let redeemed = {
            let current = self.peek(code, day)?;
            Discount {
                used_count: current.used_count + 1,
                ..current.clone()
            }
        };
        self.codes.insert(redeemed.code.clone(), redeemed.clone());
        Ok(redeemed)
    }
}
