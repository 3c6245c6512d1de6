//! Swap use cases for operator-facing adapters.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::attempt::SwapSnapshot;
use crate::domain::intent::SwapIntent;
use crate::domain::network::ChainMetadata;
use crate::domain::quote::Quote;
use crate::error::Result;

/// A live swap flow: one wallet session and one attempt.
///
/// Adapters poll [`snapshot`](SwapSession::snapshot) while
/// [`submit_swap`](SwapSession::submit_swap) is pending to show progress.
#[async_trait]
pub trait SwapSession: Send + Sync {
    /// Chain the swap will be submitted on.
    fn chain(&self) -> &ChainMetadata;

    /// Estimate the output of `intent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not a positive decimal.
    fn quote(&self, intent: &SwapIntent) -> Result<Quote>;

    /// Open the wallet session.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet cannot reach its network.
    async fn connect(&self) -> Result<Address>;

    /// Close the wallet session.
    async fn disconnect(&self);

    /// Approve, place and decode. See the orchestrator for the error split.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures that prevent the attempt from
    /// starting.
    async fn submit_swap(&self, intent: &SwapIntent) -> Result<SwapSnapshot>;

    /// Current state of the attempt.
    fn snapshot(&self) -> SwapSnapshot;

    /// Return a finished attempt to Idle.
    ///
    /// # Errors
    ///
    /// Returns an error unless the attempt is finished.
    fn dismiss(&self) -> Result<()>;
}

/// Entry points for quoting and swapping.
pub trait SwapOperator: Send + Sync {
    /// Price `intent` without touching the network or requiring a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the amount is invalid.
    fn quote(&self, config_toml: &str, intent: &SwapIntent) -> Result<Quote>;

    /// Wire a swap session from `config_toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or no key is set.
    fn swap_session(&self, config_toml: &str) -> Result<Box<dyn SwapSession>>;
}
