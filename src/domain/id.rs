//! Identifiers handed out by the chain.

use std::fmt;

use alloy_primitives::U256;
use serde::{Serialize, Serializer};

pub use alloy_primitives::TxHash;

/// Order identifier assigned by the exchange contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(U256);

impl OrderId {
    /// Create a new `OrderId` from the contract's `uint256`.
    #[must_use]
    pub const fn new(id: U256) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn value(&self) -> U256 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<U256> for OrderId {
    fn from(id: U256) -> Self {
        Self::new(id)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self::new(U256::from(id))
    }
}

impl Serialize for OrderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
