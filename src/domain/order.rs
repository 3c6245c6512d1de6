//! The order record handed to the exchange's `placeOrder`.
//!
//! The contract accepts an opaque byte blob. This client serializes the order
//! as JSON and submits its UTF-8 bytes unchanged; confidentiality is left to
//! the confidential runtime behind the contract, not provided here.

use alloy_primitives::{Address, Bytes, U256};
use serde::Serialize;

use super::amount::TokenAmount;

/// Plaintext order fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub owner: Address,
    /// Contract address of the token being sold.
    pub token: Address,
    /// Limit price in minor units of the counter token per whole token.
    #[serde(serialize_with = "decimal_string")]
    pub price: U256,
    pub size: TokenAmount,
    pub is_buy: bool,
}

fn decimal_string<S: serde::Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl OrderPayload {
    /// Serialize and wrap as the contract's `bytes` argument.
    pub fn encode(&self) -> Result<EncodedOrder, serde_json::Error> {
        serde_json::to_vec(self).map(|json| EncodedOrder(Bytes::from(json)))
    }
}

/// The serialized order as submitted on chain. Displays as 0x-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOrder(Bytes);

impl EncodedOrder {
    #[must_use]
    pub const fn bytes(&self) -> &Bytes {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Parse the blob back into JSON, for inspection and tests.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.0)
    }
}

impl std::fmt::Display for EncodedOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
