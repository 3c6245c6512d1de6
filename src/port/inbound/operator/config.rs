//! Configuration projections for operator-facing adapters.

use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::network::ChainMetadata;
use crate::error::Result;

/// Effective configuration with defaults applied.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub network: ChainMetadata,
    pub exchange: Address,
    pub water_token: Address,
    pub fire_token: Address,
    pub reference_price: Decimal,
    pub max_fraction_digits: u32,
    pub poll_interval_ms: u64,
    pub timeout_secs: Option<u64>,
    /// Whether a signing key was found in the environment or a keystore.
    pub private_key_loaded: bool,
    pub keystore_path: Option<String>,
    /// Endpoint the wallet connects through before any network switch.
    pub wallet_rpc_url: String,
    pub log_level: String,
    pub log_format: String,
}

/// Result of validating a configuration that parsed successfully.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigValidationReport {
    /// Non-fatal issues worth surfacing.
    pub warnings: Vec<String>,
}

/// Configuration use cases.
pub trait ConfigurationOperator: Send + Sync {
    /// Parse, validate and project `config_toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed or invalid.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate `config_toml` and collect warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed or invalid.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
