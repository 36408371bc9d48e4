//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Tally using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Tally - Subscription billing & publishing engine
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
#[command(author = "Tally Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "tally.toml", env = "TALLY_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TALLY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Subscribe a user to a plan
    Subscribe(commands::subscribe::SubscribeArgs),

    /// Publish a post from the demo content set
    Publish(commands::publish::PublishArgs),

    /// List the plan catalog and discount codes
    Plans(commands::plans::PlansArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
