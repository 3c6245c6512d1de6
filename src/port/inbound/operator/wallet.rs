//! Wallet projections for operator-facing adapters.

use alloy_primitives::Address;
use serde::Serialize;

use crate::error::Result;

/// The signing account.
#[derive(Debug, Clone, Serialize)]
pub struct WalletView {
    pub address: Address,
    /// Explorer page of the account.
    pub explorer_url: String,
}

/// Wallet use cases.
pub trait WalletOperator: Send + Sync {
    /// Derive the configured account without touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error if no wallet is configured.
    fn wallet_address(&self, config_toml: &str) -> Result<WalletView>;
}
