// Tally - Subscription billing & publishing engine
// Copyright (c) 2026 Tally Contributors
// Licensed under the MIT License

//! # Tally
//!
//! Tally is a subscription billing and content publishing engine built
//! around one idea: every fallible operation returns a `Result`, and
//! multi-step operations are chains of typed steps that stop at the first
//! failure.
//!
//! ## Architecture
//!
//! Tally follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (pipeline operator, billing, publishing)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## The pipeline operator
//!
//! Any `Fn(A) -> Result<B, E>` is a [`core::pipeline::Step`]. Steps chain
//! with `then`, which short-circuits on the first failure:
//!
//! ```rust
//! use tally::core::pipeline::Step;
//!
//! let parse = |s: &str| s.parse::<u32>().map_err(|_| "not a number");
//! let halve = |n: u32| if n % 2 == 0 { Ok(n / 2) } else { Err("odd") };
//!
//! assert_eq!(parse.then(halve).apply("42"), Ok(21));
//! assert_eq!(parse.then(halve).apply("7"), Err("odd"));
//! ```
//!
//! ## Billing
//!
//! The billing service drives a subscription request through plan lookup,
//! card validation, discount redemption, and the payment gateway, stopping
//! at the first rejection:
//!
//! ```rust
//! use tally::core::billing::{BillingService, ConsoleNotifier, SimulatedGateway, SubscribeRequest};
//! use tally::config::secret_string;
//! use tally::domain::{CardRules, DiscountStore, PaymentMethod, PlanCatalog, PlanTier, UserId};
//!
//! let gateway = SimulatedGateway::new(secret_string("sk_test_demo".into()), 1000.0);
//! let mut service = BillingService::new(
//!     PlanCatalog::default(),
//!     DiscountStore::sample(),
//!     CardRules::default(),
//!     gateway,
//!     ConsoleNotifier::new(),
//! );
//!
//! let subscription = service.subscribe(SubscribeRequest {
//!     user_id: UserId::new("user-1").unwrap(),
//!     tier: PlanTier::Pro,
//!     discount_code: Some("SAVE10".to_string()),
//!     payment: PaymentMethod::new("1234567890123456", "12/26", "123"),
//! }).unwrap();
//!
//! assert!((subscription.price - 26.991).abs() < 1e-9);
//! ```
//!
//! ## Error Handling
//!
//! Expected failures are `Err` values of [`domain::TallyError`] (or the
//! narrower [`domain::BillingError`] / [`domain::ContentError`]); panics
//! are reserved for bugs. Intermediate steps never print or log their own
//! failures — the outermost caller decides what the user sees.
//!
//! ## Logging
//!
//! Tally uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(user_id = "user-1", "Subscription created");
//! warn!(code = "HALFOFF", "Discount code exhausted");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
