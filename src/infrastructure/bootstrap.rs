//! Composition root: turns a [`Config`] into a wired [`SwapOrchestrator`].

use crate::application::swap::confirm::ConfirmationPolicy;
use crate::application::swap::settings::SwapSettings;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Build the orchestrator's settings from configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the reference price cannot be
/// expressed in minor units.
pub fn swap_settings(config: &Config) -> Result<SwapSettings> {
    let reference_price_units = config
        .order
        .reference_price_units()
        .ok_or_else(|| ConfigError::InvalidValue {
            field: "reference_price",
            reason: "not representable in minor units".to_string(),
        })?;

    Ok(SwapSettings {
        chain: config.network.metadata(),
        water_token: config.contracts.water_token,
        fire_token: config.contracts.fire_token,
        reference_price: config.order.reference_price,
        reference_price_units,
        max_fraction_digits: config.order.max_fraction_digits,
        confirmation: ConfirmationPolicy {
            poll_interval: config.confirmation.poll_interval(),
            timeout: config.confirmation.timeout(),
        },
    })
}

#[cfg(feature = "sapphire")]
pub use self::sapphire::{build_orchestrator, build_wallet};

#[cfg(feature = "sapphire")]
mod sapphire {
    use std::sync::Arc;

    use tracing::info;

    use super::swap_settings;
    use crate::adapter::outbound::sapphire::exchange::SapphireExchange;
    use crate::adapter::outbound::sapphire::token::SapphireToken;
    use crate::adapter::outbound::sapphire::wallet::LocalWallet;
    use crate::adapter::outbound::sapphire::watcher::RpcReceiptWatcher;
    use crate::application::swap::orchestrator::SwapOrchestrator;
    use crate::error::{ConfigError, Result};
    use crate::infrastructure::config::settings::Config;

    /// Build the signing wallet from the key loaded into `config`.
    ///
    /// The wallet connects through `[wallet] rpc_url` when set, so a switch to
    /// `[network]` can move it to a different endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when neither `WALLET_PRIVATE_KEY`
    /// nor a keystore supplied a key.
    pub fn build_wallet(config: &Config) -> Result<Arc<LocalWallet>> {
        let key = config
            .wallet
            .private_key
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            })?;
        let endpoint = config.wallet.endpoint(&config.network.rpc_url);
        Ok(Arc::new(LocalWallet::new(key, endpoint)?))
    }

    /// Wire the Sapphire adapters around one shared wallet.
    ///
    /// The wallet is returned alongside so callers can query it directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet cannot be built or the settings are
    /// inconsistent.
    pub fn build_orchestrator(config: &Config) -> Result<(Arc<LocalWallet>, SwapOrchestrator)> {
        let settings = swap_settings(config)?;
        let wallet = build_wallet(config)?;

        let orchestrator = SwapOrchestrator::new(
            wallet.clone(),
            Arc::new(SapphireToken::new(wallet.clone())),
            Arc::new(SapphireExchange::new(
                wallet.clone(),
                config.contracts.exchange,
            )),
            Arc::new(RpcReceiptWatcher::new(wallet.clone())),
            settings,
        );
        info!(
            chain_id = config.network.chain_id,
            rpc = %wallet.default_rpc(),
            exchange = %config.contracts.exchange,
            "Swap orchestrator ready"
        );
        Ok((wallet, orchestrator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    #[test]
    fn settings_follow_config() {
        let config = Config::parse_toml(
            r#"
[order]
reference_price = 1.5
max_fraction_digits = 4

[confirmation]
poll_interval_ms = 250
timeout_secs = 30
"#,
        )
        .unwrap();
        let settings = swap_settings(&config).unwrap();
        assert_eq!(settings.reference_price, dec!(1.5));
        assert_eq!(
            settings.reference_price_units.to_string(),
            "1500000000000000000"
        );
        assert_eq!(settings.max_fraction_digits, 4);
        assert_eq!(settings.confirmation.poll_interval, Duration::from_millis(250));
        assert_eq!(settings.confirmation.timeout, Some(Duration::from_secs(30)));
        assert_eq!(settings.chain.chain_id, 23295);
        assert_eq!(settings.water_token, config.contracts.water_token);
    }

    #[cfg(feature = "sapphire")]
    #[test]
    fn wallet_connects_through_its_own_endpoint() {
        let mut config =
            Config::parse_settings("[wallet]\nrpc_url = \"http://localhost:8545\"\n").unwrap();
        config.wallet.private_key =
            Some("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".into());

        let wallet = build_wallet(&config).unwrap();
        let settings = swap_settings(&config).unwrap();

        assert_eq!(wallet.default_rpc().as_str(), "http://localhost:8545/");
        assert_eq!(settings.chain.rpc_url, "https://testnet.sapphire.oasis.io");
        assert_ne!(wallet.default_rpc().as_str(), settings.chain.rpc_url);
    }

    #[cfg(feature = "sapphire")]
    #[test]
    fn wallet_endpoint_defaults_to_network() {
        let mut config = Config::parse_settings("").unwrap();
        config.wallet.private_key =
            Some("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".into());

        let wallet = build_wallet(&config).unwrap();
        assert_eq!(
            wallet.default_rpc().as_str(),
            "https://testnet.sapphire.oasis.io/"
        );
    }
}
