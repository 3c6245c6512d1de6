//! Receipt lookups over JSON-RPC.

use std::sync::Arc;

use alloy_provider::network::ReceiptResponse as _;
use alloy_provider::Provider;
use async_trait::async_trait;

use super::wallet::LocalWallet;
use crate::domain::id::TxHash;
use crate::domain::receipt::{Confirmation, ReceiptLog, TxReceipt};
use crate::error::{Error, Result};
use crate::port::outbound::receipt::ReceiptWatcher;

/// [`ReceiptWatcher`] that asks the wallet's current endpoint for receipts.
pub struct RpcReceiptWatcher {
    wallet: Arc<LocalWallet>,
}

impl RpcReceiptWatcher {
    #[must_use]
    pub const fn new(wallet: Arc<LocalWallet>) -> Self {
        Self { wallet }
    }
}

#[async_trait]
impl ReceiptWatcher for RpcReceiptWatcher {
    async fn confirmation(&self, tx_hash: TxHash) -> Result<Confirmation> {
        let provider = self.wallet.read_provider()?;
        let receipt = provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| Error::Connection(format!("eth_getTransactionReceipt: {e}")))?;

        Ok(Confirmation::from_receipt(receipt.map(|r| TxReceipt {
            tx_hash: r.transaction_hash,
            block_number: r.block_number,
            success: r.status(),
            logs: r
                .inner
                .logs()
                .iter()
                .map(|log| ReceiptLog {
                    address: log.inner.address,
                    topics: log.inner.data.topics().to_vec(),
                    data: log.inner.data.data.clone(),
                })
                .collect(),
        })))
    }
}
