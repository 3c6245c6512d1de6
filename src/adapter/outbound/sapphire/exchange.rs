//! ROFLSwap order placement.

use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;
use tracing::debug;

use super::abi::ROFLSwap;
use super::wallet::LocalWallet;
use crate::domain::id::TxHash;
use crate::domain::order::EncodedOrder;
use crate::error::{Error, Result};
use crate::port::outbound::contract::ExchangeContract;

/// [`ExchangeContract`] for the deployed ROFLSwap contract.
pub struct SapphireExchange {
    wallet: Arc<LocalWallet>,
    address: Address,
}

impl SapphireExchange {
    #[must_use]
    pub const fn new(wallet: Arc<LocalWallet>, address: Address) -> Self {
        Self { wallet, address }
    }
}

#[async_trait]
impl ExchangeContract for SapphireExchange {
    fn address(&self) -> Address {
        self.address
    }

    async fn place_order(&self, order: &EncodedOrder) -> Result<TxHash> {
        let provider = self.wallet.signing_provider()?;
        let exchange = ROFLSwap::new(self.address, &provider);

        debug!(exchange = %self.address, bytes = order.bytes().len(), "Sending placeOrder");
        let pending = exchange
            .placeOrder(order.bytes().clone())
            .send()
            .await
            .map_err(|e| Error::Transaction(format!("placeOrder: {e}")))?;
        Ok(*pending.tx_hash())
    }
}
