//! Target network configuration.

use serde::Deserialize;

use crate::domain::network::{ChainMetadata, NativeCurrency, SAPPHIRE_TESTNET_CHAIN_ID};

/// The confidential chain swaps must be submitted on.
///
/// Defaults describe Oasis Sapphire testnet. The same values are handed to the
/// wallet when it has to switch networks; the wallet's initial endpoint is
/// `[wallet] rpc_url`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Required chain id.
    pub chain_id: u64,
    /// Human-readable chain name.
    pub name: String,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Block explorer base URL.
    pub explorer_url: String,
    /// Native currency name.
    pub currency_name: String,
    /// Native currency ticker.
    pub currency_symbol: String,
    /// Native currency decimals.
    pub currency_decimals: u8,
}

impl NetworkConfig {
    /// Chain descriptor for network switching.
    #[must_use]
    pub fn metadata(&self) -> ChainMetadata {
        ChainMetadata {
            chain_id: self.chain_id,
            name: self.name.clone(),
            native_currency: NativeCurrency {
                name: self.currency_name.clone(),
                symbol: self.currency_symbol.clone(),
                decimals: self.currency_decimals,
            },
            rpc_url: self.rpc_url.clone(),
            explorer_url: self.explorer_url.clone(),
        }
    }

    /// True when the configured chain is Sapphire testnet.
    #[must_use]
    pub fn is_sapphire_testnet(&self) -> bool {
        self.chain_id == SAPPHIRE_TESTNET_CHAIN_ID
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let chain = ChainMetadata::sapphire_testnet();
        Self {
            chain_id: chain.chain_id,
            name: chain.name,
            rpc_url: chain.rpc_url,
            explorer_url: chain.explorer_url,
            currency_name: chain.native_currency.name,
            currency_symbol: chain.native_currency.symbol,
            currency_decimals: chain.native_currency.decimals,
        }
    }
}
