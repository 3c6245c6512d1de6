//! Wallet operator implementation.

use crate::error::Result;
use crate::infrastructure::config;
use crate::port::inbound::operator::wallet::{WalletOperator, WalletView};

use super::{entry::Operator, shared};

impl WalletOperator for Operator {
    fn wallet_address(&self, config_toml: &str) -> Result<WalletView> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let address = signer_address(&config)?;
        Ok(WalletView {
            address,
            explorer_url: shared::account_url(&config.network.explorer_url, address),
        })
    }
}

#[cfg(feature = "sapphire")]
fn signer_address(config: &config::settings::Config) -> Result<alloy_primitives::Address> {
    Ok(crate::infrastructure::bootstrap::build_wallet(config)?.signer_address())
}

#[cfg(not(feature = "sapphire"))]
fn signer_address(_config: &config::settings::Config) -> Result<alloy_primitives::Address> {
    Err(shared::sapphire_disabled("wallet"))
}
