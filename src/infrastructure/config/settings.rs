//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `WALLET_PRIVATE_KEY`. Every section is optional;
//! an empty file yields a configuration for Sapphire testnet.
//!
//! # Example
//!
//! ```no_run
//! use roflswap::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::confirmation::ConfirmationConfig;
use super::contracts::ContractsConfig;
use super::logging::LoggingConfig;
use super::network::NetworkConfig;
use super::order::OrderConfig;
use super::wallet::WalletConfig;
use crate::domain::token::TOKEN_DECIMALS;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Required chain and the descriptor used to switch to it.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Exchange and token contract addresses.
    #[serde(default)]
    pub contracts: ContractsConfig,

    /// Order pricing and amount input rules.
    #[serde(default)]
    pub order: OrderConfig,

    /// Receipt polling cadence.
    #[serde(default)]
    pub confirmation: ConfirmationConfig,

    /// Signing key source.
    ///
    /// Private key is loaded from `WALLET_PRIVATE_KEY` environment variable.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn read_keystore_password() -> Result<String> {
    if let Ok(password) = std::env::var("ROFLSWAP_KEYSTORE_PASSWORD") {
        return Ok(password);
    }
    if let Ok(path) = std::env::var("ROFLSWAP_KEYSTORE_PASSWORD_FILE") {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: "ROFLSWAP_KEYSTORE_PASSWORD_FILE",
            }
            .into());
        }
        return Ok(password);
    }

    Err(ConfigError::MissingField {
        field: "ROFLSWAP_KEYSTORE_PASSWORD",
    }
    .into())
}

#[cfg(feature = "sapphire")]
fn decrypt_keystore_private_key(path: &Path, password: &str) -> Result<String> {
    use alloy_signer_local::PrivateKeySigner;

    let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
        ConfigError::InvalidValue {
            field: "keystore_path",
            reason: e.to_string(),
        }
    })?;
    Ok(format!("{:x}", signer.to_bytes()))
}

#[cfg(not(feature = "sapphire"))]
fn decrypt_keystore_private_key(_path: &Path, _password: &str) -> Result<String> {
    Err(ConfigError::InvalidValue {
        field: "keystore_path",
        reason: "keystore support requires the sapphire feature".to_string(),
    }
    .into())
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the private key from the `WALLET_PRIVATE_KEY` environment variable
    /// or decrypts it from a keystore file if `keystore_path` is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a zero contract address)
    /// - Keystore decryption fails when using keystore authentication
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config = Self::parse_settings(content)?;

        // The key is never read from the file itself.
        config.wallet.private_key = std::env::var("WALLET_PRIVATE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if config.wallet.private_key.is_none() {
            if let Some(keystore) = config.wallet.keystore_file() {
                let password = read_keystore_password()?;
                config.wallet.private_key =
                    Some(decrypt_keystore_private_key(&keystore, &password)?);
            }
        }

        Ok(config)
    }

    /// Parse and validate TOML content without loading a signing key.
    ///
    /// Used where no transaction will be signed, so a keystore password is
    /// never asked for.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed or fails validation.
    #[allow(clippy::result_large_err)]
    pub fn parse_settings(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    ///
    /// The environment is still consulted for the private key.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.network.rpc_url.is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        url::Url::parse(&self.network.rpc_url).map_err(|e| ConfigError::InvalidValue {
            field: "rpc_url",
            reason: e.to_string(),
        })?;
        if let Some(rpc_url) = &self.wallet.rpc_url {
            url::Url::parse(rpc_url).map_err(|e| ConfigError::InvalidValue {
                field: "wallet_rpc_url",
                reason: e.to_string(),
            })?;
        }
        if self.network.chain_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        for (field, address) in [
            ("exchange", self.contracts.exchange),
            ("water_token", self.contracts.water_token),
            ("fire_token", self.contracts.fire_token),
        ] {
            if address == Address::ZERO {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be the zero address".to_string(),
                }
                .into());
            }
        }
        if self.contracts.water_token == self.contracts.fire_token {
            return Err(ConfigError::InvalidValue {
                field: "fire_token",
                reason: "must differ from water_token".to_string(),
            }
            .into());
        }

        if self.order.reference_price <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "reference_price",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.order.reference_price_units().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "reference_price",
                reason: format!("must be representable with {TOKEN_DECIMALS} decimals"),
            }
            .into());
        }
        if self.order.max_fraction_digits > TOKEN_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "max_fraction_digits",
                reason: format!("must be at most {TOKEN_DECIMALS}"),
            }
            .into());
        }

        if self.confirmation.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.confirmation.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be 'pretty' or 'json'".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
