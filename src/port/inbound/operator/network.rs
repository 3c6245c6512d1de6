//! Network projections for operator-facing adapters.

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Serialize;

use crate::domain::network::ChainMetadata;
use crate::error::Result;

/// Where the wallet stands relative to the required chain.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStatus {
    pub account: Address,
    /// Chain reported by the wallet's session.
    pub chain_id: Option<u64>,
    pub required: ChainMetadata,
    pub on_required_chain: bool,
}

/// Network use cases.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait NetworkOperator: Send + Sync {
    /// Connect and report the wallet's chain.
    ///
    /// # Errors
    ///
    /// Returns an error if no key is configured or the RPC endpoint is
    /// unreachable.
    async fn network_status(&self, config_toml: &str) -> Result<NetworkStatus>;

    /// Connect and move the wallet to the required chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the switch is refused or does not take effect.
    async fn network_switch(&self, config_toml: &str) -> Result<NetworkStatus>;
}
