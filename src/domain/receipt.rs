//! Transaction receipts as the orchestrator sees them.
//!
//! Adapters translate node-specific receipt types into these so the swap flow
//! and the event decoder stay free of transport details.

use alloy_primitives::{Address, Bytes, B256};

use super::id::TxHash;

/// A single log emitted by a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLog {
    /// Contract that emitted the log.
    pub address: Address,
    /// Indexed topics; the first is the event signature hash.
    pub topics: Vec<B256>,
    /// ABI-encoded non-indexed fields.
    pub data: Bytes,
}

/// A mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    /// Execution status; `false` means the transaction reverted.
    pub success: bool,
    pub logs: Vec<ReceiptLog>,
}

/// Where a submitted transaction currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Not yet mined.
    Pending,
    /// Mined and executed successfully.
    Confirmed(TxReceipt),
    /// Mined but reverted.
    Reverted(TxReceipt),
}

impl Confirmation {
    /// Classify an optional receipt fetched from a node.
    #[must_use]
    pub fn from_receipt(receipt: Option<TxReceipt>) -> Self {
        match receipt {
            None => Self::Pending,
            Some(receipt) if receipt.success => Self::Confirmed(receipt),
            Some(receipt) => Self::Reverted(receipt),
        }
    }
}
