//! Core business logic
//!
//! This module contains the pipeline operator and the two services built
//! on it:
//!
//! - [`pipeline`] - Typed composition of fallible steps with short-circuit
//! - [`billing`] - Subscription billing (plans, discounts, payments)
//! - [`publish`] - Blog post publishing

pub mod billing;
pub mod pipeline;
pub mod publish;
