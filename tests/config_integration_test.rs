//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with
//! --test-threads=1 to avoid interference between tests.

use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tally::config::load_config;
use tally::domain::PlanTier;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("TALLY_APPLICATION_LOG_LEVEL");
    std::env::remove_var("TALLY_APPLICATION_DRY_RUN");
    std::env::remove_var("TALLY_BILLING_MAX_CHARGE");
    std::env::remove_var("TALLY_BILLING_GATEWAY_API_KEY");
    std::env::remove_var("TEST_GATEWAY_KEY");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"
dry_run = true

[billing]
max_charge = 500.0

[billing.card]
card_number_length = 16
cvv_length = 3

[[plans]]
tier = "basic"
name = "Starter"
monthly_price = 4.99
max_users = 2
features = ["storage"]

[[plans]]
tier = "pro"
name = "Team"
monthly_price = 19.99
max_users = 10
features = ["storage", "api"]

[[discounts]]
code = "LAUNCH"
percent = 25
max_uses = 500
valid_until = "2099-01-01"

[logging]
local_enabled = false
local_path = "/tmp/tally"
local_rotation = "hourly"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.billing.max_charge, 500.0);

    let catalog = config.plan_catalog();
    assert_eq!(catalog.plans().len(), 2);
    assert_eq!(catalog.plan(PlanTier::Basic).unwrap().name, "Starter");
    assert_eq!(catalog.plan(PlanTier::Pro).unwrap().monthly_price, 19.99);
    assert!(catalog.plan(PlanTier::Enterprise).is_err());

    let store = config.discount_store();
    let launch = store.get("LAUNCH").unwrap();
    assert_eq!(launch.percent, 25);
    assert_eq!(launch.used_count, 0);

    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_minimal_config_gets_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"info\"\n");
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.billing.max_charge, 1000.0);
    assert_eq!(config.billing.card.card_number_length, 16);
    assert_eq!(config.plan_catalog().plans().len(), 3);
    assert!(config.discount_store().get("SAVE10").is_some());
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution_in_secrets() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_GATEWAY_KEY", "sk_test_from_env");

    let toml_content = r#"
[billing]
gateway_api_key = "${TEST_GATEWAY_KEY}"
"#;
    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).unwrap();

    let key = config.billing.gateway_api_key.expect("key should be set");
    assert!(key.expose_secret().starts_with("sk_test_"));

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_fails_load() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[billing]
gateway_api_key = "${TALLY_DEFINITELY_NOT_SET}"
"#;
    let temp_file = write_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("TALLY_DEFINITELY_NOT_SET"));
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TALLY_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("TALLY_BILLING_MAX_CHARGE", "250.5");

    let temp_file = write_config("[application]\nlog_level = \"info\"\n");
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.billing.max_charge, 250.5);

    cleanup_env_vars();
}

#[test]
fn test_invalid_values_rejected_after_parse() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[[discounts]]
code = "TOOBIG"
percent = 120
max_uses = 10
valid_until = "2099-01-01"
"#;
    let temp_file = write_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("percent"));
}

#[test]
fn test_used_count_over_max_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[[discounts]]
code = "BROKEN"
percent = 10
max_uses = 5
used_count = 6
valid_until = "2099-01-01"
"#;
    let temp_file = write_config(toml_content);
    assert!(load_config(temp_file.path()).is_err());
}
