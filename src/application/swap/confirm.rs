//! Receipt polling.

use std::time::Duration;

use tracing::debug;

use crate::domain::id::TxHash;
use crate::domain::receipt::{Confirmation, TxReceipt};
use crate::error::{Result, SwapError};
use crate::port::outbound::receipt::ReceiptWatcher;

/// Polling cadence and optional upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    pub poll_interval: Duration,
    /// `None` waits for as long as the watcher keeps answering.
    pub timeout: Option<Duration>,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            timeout: None,
        }
    }
}

/// Poll `watcher` until `tx_hash` is mined.
///
/// # Errors
///
/// Returns [`SwapError::Reverted`] if the transaction was mined but failed,
/// [`SwapError::Timeout`] if the policy's timeout elapses, and any error the
/// watcher itself reports.
pub async fn wait_for_confirmation(
    watcher: &dyn ReceiptWatcher,
    tx_hash: TxHash,
    policy: &ConfirmationPolicy,
) -> Result<TxReceipt> {
    let poll = poll_until_mined(watcher, tx_hash, policy.poll_interval);
    match policy.timeout {
        Some(limit) => tokio::time::timeout(limit, poll).await.map_err(|_| {
            SwapError::Timeout {
                tx_hash: tx_hash.to_string(),
            }
        })?,
        None => poll.await,
    }
}

async fn poll_until_mined(
    watcher: &dyn ReceiptWatcher,
    tx_hash: TxHash,
    interval: Duration,
) -> Result<TxReceipt> {
    let mut polls: u64 = 0;
    loop {
        polls += 1;
        match watcher.confirmation(tx_hash).await? {
            Confirmation::Pending => {
                debug!(tx_hash = %tx_hash, polls, "Transaction pending");
                tokio::time::sleep(interval).await;
            }
            Confirmation::Confirmed(receipt) => {
                debug!(
                    tx_hash = %tx_hash,
                    block = ?receipt.block_number,
                    polls,
                    "Transaction confirmed"
                );
                return Ok(receipt);
            }
            Confirmation::Reverted(_) => {
                return Err(SwapError::Reverted {
                    tx_hash: tx_hash.to_string(),
                }
                .into());
            }
        }
    }
}
