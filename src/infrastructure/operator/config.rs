//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::config;
use crate::port::inbound::operator::config::{
    ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = config::settings::Config::parse_toml(config_toml)?;

        Ok(ConfigView {
            network: config.network.metadata(),
            exchange: config.contracts.exchange,
            water_token: config.contracts.water_token,
            fire_token: config.contracts.fire_token,
            reference_price: config.order.reference_price,
            max_fraction_digits: config.order.max_fraction_digits,
            poll_interval_ms: config.confirmation.poll_interval_ms,
            timeout_secs: config.confirmation.timeout_secs,
            private_key_loaded: config.wallet.private_key.is_some(),
            wallet_rpc_url: config.wallet.endpoint(&config.network.rpc_url).to_string(),
            keystore_path: config.wallet.keystore_path,
            log_level: config.logging.level,
            log_format: config.logging.format,
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let mut warnings = Vec::new();

        if !config.network.is_sapphire_testnet() {
            warnings.push(format!(
                "chain {} is not Sapphire testnet; contract addresses must match that deployment",
                config.network.chain_id
            ));
        }

        if config.wallet.private_key.is_none() {
            warnings.push("no signing key available; swaps will fail".to_string());
        }

        if config.confirmation.timeout_secs.is_none() {
            warnings.push("no confirmation timeout; a dropped transaction waits forever".to_string());
        }

        Ok(ConfigValidationReport { warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_projects_defaults() {
        let view = Operator::new().show_config("").unwrap();
        assert_eq!(view.network.chain_id, 23295);
        assert_eq!(view.max_fraction_digits, 2);
        assert_eq!(view.poll_interval_ms, 1_000);
        assert_eq!(view.log_format, "pretty");
        assert_eq!(view.wallet_rpc_url, view.network.rpc_url);
    }

    #[test]
    fn show_reports_separate_wallet_endpoint() {
        let view = Operator::new()
            .show_config("[wallet]\nrpc_url = \"http://localhost:8545\"\n")
            .unwrap();
        assert_eq!(view.wallet_rpc_url, "http://localhost:8545");
        assert_eq!(view.network.rpc_url, "https://testnet.sapphire.oasis.io");
    }

    #[test]
    fn validate_flags_foreign_chain() {
        let report = Operator::new()
            .validate_config("[network]\nchain_id = 1\n")
            .unwrap();
        assert!(report.warnings.iter().any(|w| w.contains("chain 1")));
    }

    #[test]
    fn validate_rejects_malformed_toml() {
        assert!(Operator::new().validate_config("[network").is_err());
    }
}
