//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::operator::{
    operator, read_config_toml, read_config_toml_or_default,
};
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} if you target another deployment", path.display()));
    output::note("2. Set WALLET_PRIVATE_KEY environment variable");
    output::note(&format!("3. Run: roflswap config validate -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
///
/// A missing file is not an error here: the defaults are what would be used.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = read_config_toml_or_default(path)?;
    let view = operator()?.show_config(&config_toml)?;

    output::result(
        "config",
        &json!({
            "path": path.display().to_string(),
            "file_exists": path.exists(),
            "config": view,
        }),
    )?;
    if output::is_json() {
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults)");
    }

    let network = &view.network;
    output::section("Network");
    output::field("Name", &network.name);
    output::field("Chain ID", network.chain_id);
    output::field("RPC", &network.rpc_url);
    output::field("Explorer", &network.explorer_url);
    output::field("Currency", &network.native_currency.symbol);

    output::section("Contracts");
    output::field("Exchange", view.exchange);
    output::field("WATER", view.water_token);
    output::field("FIRE", view.fire_token);

    output::section("Orders");
    output::field("Price", format!("1 : {}", view.reference_price));
    output::field("Max decimals", view.max_fraction_digits);

    output::section("Confirmation");
    output::field("Poll interval", format!("{}ms", view.poll_interval_ms));
    output::field(
        "Timeout",
        view.timeout_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s")),
    );

    output::section("Wallet");
    output::field("RPC", &view.wallet_rpc_url);
    if view.private_key_loaded {
        output::success("Private key loaded");
    } else {
        output::warning("Private key not set");
        output::hint("export WALLET_PRIVATE_KEY or set [wallet] keystore_path");
    }

    output::section("Logging");
    output::field("Level", &view.log_level);
    output::field("Format", &view.log_format);

    Ok(())
}

/// Execute `config validate`. Unlike `show`, the file must exist.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config_toml = read_config_toml(path)?;
    let report = operator()?.validate_config(&config_toml)?;
    output::success("Config file is valid");

    output::result("config_validation", &report)?;
    if !report.warnings.is_empty() {
        output::section("Warnings");
        for warning in &report.warnings {
            output::warning(warning);
        }
    }

    output::field(
        "Next",
        format!("roflswap config show -c {}", path.display()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_execute_init_creates_file_and_parents() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_refuses_overwrite_without_force() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "# mine").unwrap();

        let result = execute_init(&path, false);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");
    }

    #[test]
    fn test_execute_init_overwrites_with_force() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "# mine").unwrap();

        execute_init(&path, true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
