//! Network operator implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::infrastructure::config;
use crate::port::inbound::operator::network::{NetworkOperator, NetworkStatus};

use super::entry::Operator;

#[async_trait]
impl NetworkOperator for Operator {
    async fn network_status(&self, config_toml: &str) -> Result<NetworkStatus> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        probe(&config, false).await
    }

    async fn network_switch(&self, config_toml: &str) -> Result<NetworkStatus> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        probe(&config, true).await
    }
}

/// Connect, optionally move to the required chain, report, disconnect.
#[cfg(feature = "sapphire")]
async fn probe(config: &config::settings::Config, switch: bool) -> Result<NetworkStatus> {
    use crate::port::outbound::wallet::WalletConnector;

    let (wallet, orchestrator) = crate::infrastructure::bootstrap::build_orchestrator(config)?;
    let account = orchestrator.connect().await?;
    let switched = if switch {
        orchestrator.ensure_network().await
    } else {
        Ok(())
    };
    let chain_id = wallet.chain_id();
    orchestrator.disconnect().await;
    switched?;

    let required = orchestrator.settings().chain.clone();
    Ok(NetworkStatus {
        account,
        chain_id,
        on_required_chain: chain_id == Some(required.chain_id),
        required,
    })
}

#[cfg(not(feature = "sapphire"))]
async fn probe(_config: &config::settings::Config, _switch: bool) -> Result<NetworkStatus> {
    Err(super::shared::sapphire_disabled("network"))
}
