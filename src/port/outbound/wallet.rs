//! Wallet connector port.
//!
//! The wallet owns the signing account and knows which chain it is pointed
//! at. It is the only collaborator that can move between networks.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::network::ChainMetadata;
use crate::error::Result;

/// Port for a signing wallet.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Establish a session and return the connected account.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet cannot reach its network.
    async fn connect(&self) -> Result<Address>;

    /// Drop the current session. Idempotent.
    async fn disconnect(&self);

    /// Connected account, `None` while disconnected.
    fn address(&self) -> Option<Address>;

    /// Chain id of the connected session, `None` while disconnected.
    fn chain_id(&self) -> Option<u64>;

    /// Move the session to `chain_id`, registering the chain from `metadata`
    /// if the wallet does not know it yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet declines or the target network does not
    /// report `chain_id`.
    async fn switch_network(&self, chain_id: u64, metadata: &ChainMetadata) -> Result<()>;
}
