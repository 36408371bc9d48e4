//! Result type alias for Tally
//!
//! This module provides a convenient Result type alias that uses TallyError
//! as the default error type. The error parameter stays overridable so the
//! billing and publishing pipelines can carry their own error enums.

use super::errors::TallyError;

/// Result type alias for Tally operations
///
/// Construction is `Ok(value)` / `Err(error)` — both pure and total.
/// Callers must branch on the variant before extracting a payload; the
/// compiler rejects anything else.
///
/// # Examples
///
/// ```
/// use tally::domain::result::Result;
/// use tally::domain::errors::BillingError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_step() -> Result<f64, BillingError> {
///     Err(BillingError::UnknownPlan("platinum".to_string()))
/// }
/// ```
pub type Result<T, E = TallyError> = std::result::Result<T, E>;
