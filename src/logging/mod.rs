//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - console output with a configurable level
//! - optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use tally::logging::init_logging;
//! use tally::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::warn!(code = "SAVE10", "Discount code near its usage cap");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
