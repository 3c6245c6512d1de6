use std::fs;
use std::path::PathBuf;

use roflswap::error::{ConfigError, Error};
use roflswap::infrastructure::bootstrap::swap_settings;
use roflswap::infrastructure::config::settings::Config;
use tempfile::TempDir;

const TEMPLATE: &str = include_str!("../config.toml.example");

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn template_matches_built_in_defaults() {
    let config = Config::parse_settings(TEMPLATE).unwrap();
    let defaults = Config::parse_settings("").unwrap();

    assert_eq!(config.network.chain_id, defaults.network.chain_id);
    assert_eq!(config.network.rpc_url, defaults.network.rpc_url);
    assert_eq!(config.network.explorer_url, defaults.network.explorer_url);
    assert_eq!(config.contracts.exchange, defaults.contracts.exchange);
    assert_eq!(config.contracts.water_token, defaults.contracts.water_token);
    assert_eq!(config.contracts.fire_token, defaults.contracts.fire_token);
    assert_eq!(config.order.reference_price, defaults.order.reference_price);
    assert_eq!(
        config.order.max_fraction_digits,
        defaults.order.max_fraction_digits
    );
    assert_eq!(
        config.confirmation.poll_interval_ms,
        defaults.confirmation.poll_interval_ms
    );
    assert_eq!(config.logging.level, defaults.logging.level);
}

#[test]
fn load_reads_file_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[order]
reference_price = 0.25
max_fraction_digits = 6

[confirmation]
poll_interval_ms = 500
timeout_secs = 90
"#,
    );

    let config = Config::load(&path).unwrap();
    let settings = swap_settings(&config).unwrap();

    assert_eq!(settings.max_fraction_digits, 6);
    assert_eq!(
        settings.reference_price_units.to_string(),
        "250000000000000000"
    );
    assert_eq!(
        settings.confirmation.timeout,
        Some(std::time::Duration::from_secs(90))
    );
}

#[test]
fn load_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn load_or_default_falls_back_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.network.chain_id, 23295);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[order\nreference_price = 1\n");
    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn unknown_log_format_is_rejected() {
    let result = Config::parse_settings("[logging]\nformat = \"xml\"\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "format",
            ..
        }))
    ));
}

#[test]
fn too_many_fraction_digits_is_rejected() {
    let result = Config::parse_settings("[order]\nmax_fraction_digits = 19\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "max_fraction_digits",
            ..
        }))
    ));
}

#[test]
fn zero_timeout_is_rejected() {
    let result = Config::parse_settings("[confirmation]\ntimeout_secs = 0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "timeout_secs",
            ..
        }))
    ));
}
