//! Contract client ports.
//!
//! Both calls return as soon as the wallet has broadcast the transaction.
//! Confirmation is observed separately through
//! [`ReceiptWatcher`](super::receipt::ReceiptWatcher).

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::id::TxHash;
use crate::domain::order::EncodedOrder;
use crate::error::Result;

/// Port for the ERC-20 side of a swap.
#[async_trait]
pub trait TokenContract: Send + Sync {
    /// Authorize `spender` to move `amount` minor units of `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature is declined or the node refuses the
    /// transaction.
    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash>;
}

/// Port for the dark-pool exchange contract.
#[async_trait]
pub trait ExchangeContract: Send + Sync {
    /// Address of the exchange; also the approval spender and the emitter of
    /// `OrderPlaced`.
    fn address(&self) -> Address;

    /// Submit an encoded order.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature is declined or the node refuses the
    /// transaction.
    async fn place_order(&self, order: &EncodedOrder) -> Result<TxHash>;
}
