//! Chain descriptors used when asking a wallet to switch networks.

use serde::{Deserialize, Serialize};

/// Chain id of the Oasis Sapphire testnet.
pub const SAPPHIRE_TESTNET_CHAIN_ID: u64 = 23295;

/// Native gas currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Everything a wallet needs to add an unknown chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainMetadata {
    pub chain_id: u64,
    pub name: String,
    pub native_currency: NativeCurrency,
    pub rpc_url: String,
    pub explorer_url: String,
}

impl ChainMetadata {
    /// Descriptor for Sapphire testnet.
    #[must_use]
    pub fn sapphire_testnet() -> Self {
        Self {
            chain_id: SAPPHIRE_TESTNET_CHAIN_ID,
            name: "Oasis Sapphire Testnet".into(),
            native_currency: NativeCurrency {
                name: "Sapphire Test Rose".into(),
                symbol: "TEST".into(),
                decimals: 18,
            },
            rpc_url: "https://testnet.sapphire.oasis.io".into(),
            explorer_url: "https://explorer.oasis.io/testnet/sapphire".into(),
        }
    }

    /// Explorer link for a transaction.
    #[must_use]
    pub fn tx_url(&self, tx_hash: impl std::fmt::Display) -> String {
        format!("{}/tx/{tx_hash}", self.explorer_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_url_joins_without_double_slash() {
        let mut chain = ChainMetadata::sapphire_testnet();
        chain.explorer_url.push('/');
        assert_eq!(
            chain.tx_url("0xabc"),
            "https://explorer.oasis.io/testnet/sapphire/tx/0xabc"
        );
    }
}
