//! ERC-20 approvals.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use tracing::debug;

use super::abi::IERC20;
use super::wallet::LocalWallet;
use crate::domain::id::TxHash;
use crate::error::{Error, Result};
use crate::port::outbound::contract::TokenContract;

/// [`TokenContract`] that signs through a [`LocalWallet`].
pub struct SapphireToken {
    wallet: Arc<LocalWallet>,
}

impl SapphireToken {
    #[must_use]
    pub const fn new(wallet: Arc<LocalWallet>) -> Self {
        Self { wallet }
    }
}

#[async_trait]
impl TokenContract for SapphireToken {
    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        let provider = self.wallet.signing_provider()?;
        let erc20 = IERC20::new(token, &provider);

        debug!(token = %token, spender = %spender, amount = %amount, "Sending approve");
        let pending = erc20
            .approve(spender, amount)
            .send()
            .await
            .map_err(|e| Error::Transaction(format!("approve: {e}")))?;
        Ok(*pending.tx_hash())
    }
}
