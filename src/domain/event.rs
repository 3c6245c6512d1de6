//! Typed view of the exchange contract's `OrderPlaced` event.
//!
//! Decoding is a pure scan over a receipt's logs: only logs emitted by the
//! exchange are considered, logs that do not decode as `OrderPlaced` are
//! skipped, and the first match wins.

use alloy_primitives::Address;
use alloy_sol_types::{sol, SolEvent};
use tracing::trace;

use super::id::OrderId;
use super::receipt::{ReceiptLog, TxReceipt};

sol! {
    /// Emitted by the exchange once an order has been accepted into the book.
    #[derive(Debug, PartialEq, Eq)]
    event OrderPlaced(uint256 indexed orderId, address indexed owner, address token, bool isBuy);
}

impl OrderPlaced {
    /// Decode a single log, `None` if it is not an `OrderPlaced` record.
    #[must_use]
    pub fn from_log(log: &ReceiptLog) -> Option<Self> {
        Self::decode_raw_log(log.topics.iter().copied(), log.data.as_ref()).ok()
    }

    /// Render this event as the log the exchange would emit.
    #[must_use]
    pub fn to_log(&self, exchange: Address) -> ReceiptLog {
        let data = self.encode_log_data();
        ReceiptLog {
            address: exchange,
            topics: data.topics().to_vec(),
            data: data.data,
        }
    }

    /// The order identifier carried by the event.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        OrderId::new(self.orderId)
    }
}

/// Find the first `OrderPlaced` event emitted by `exchange`.
#[must_use]
pub fn find_order_placed(receipt: &TxReceipt, exchange: Address) -> Option<OrderPlaced> {
    receipt
        .logs
        .iter()
        .filter(|log| log.address == exchange)
        .find_map(|log| {
            let decoded = OrderPlaced::from_log(log);
            if decoded.is_none() {
                trace!(topics = log.topics.len(), "Skipping undecodable exchange log");
            }
            decoded
        })
}

/// Recover the order identifier from a confirmed placement receipt.
#[must_use]
pub fn decode_order_id(receipt: &TxReceipt, exchange: Address) -> Option<OrderId> {
    find_order_placed(receipt, exchange).map(|event| event.order_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Bytes, TxHash, B256, U256};
    use std::str::FromStr;

    const EXCHANGE: Address = address!("7bd42a436Ad8c2BA2d06d5Fd9416A774d2936098");
    const OWNER: Address = address!("1111111111111111111111111111111111111111");
    const WATER: Address = address!("96c5F50000dE0B12CBa648eAfAab818aBCadAaA4");

    fn placed(id: u64) -> OrderPlaced {
        OrderPlaced {
            orderId: U256::from(id),
            owner: OWNER,
            token: WATER,
            isBuy: true,
        }
    }

    fn receipt(logs: Vec<ReceiptLog>) -> TxReceipt {
        TxReceipt {
            tx_hash: TxHash::ZERO,
            block_number: Some(1),
            success: true,
            logs,
        }
    }

    #[test]
    fn decodes_order_id_from_exchange_log() {
        let receipt = receipt(vec![placed(42).to_log(EXCHANGE)]);
        assert_eq!(decode_order_id(&receipt, EXCHANGE), Some(OrderId::from(42u64)));
    }

    #[test]
    fn address_match_ignores_hex_case() {
        let lower = Address::from_str("0x7bd42a436ad8c2ba2d06d5fd9416a774d2936098").unwrap();
        let receipt = receipt(vec![placed(7).to_log(EXCHANGE)]);
        assert_eq!(decode_order_id(&receipt, lower), Some(OrderId::from(7u64)));
    }

    #[test]
    fn skips_logs_from_other_contracts() {
        let receipt = receipt(vec![placed(1).to_log(WATER), placed(2).to_log(EXCHANGE)]);
        assert_eq!(decode_order_id(&receipt, EXCHANGE), Some(OrderId::from(2u64)));
    }

    #[test]
    fn skips_other_events_from_exchange() {
        let foreign = ReceiptLog {
            address: EXCHANGE,
            topics: vec![B256::repeat_byte(0xab)],
            data: Bytes::from_static(&[0u8; 32]),
        };
        let receipt = receipt(vec![foreign, placed(9).to_log(EXCHANGE)]);
        assert_eq!(decode_order_id(&receipt, EXCHANGE), Some(OrderId::from(9u64)));
    }

    #[test]
    fn first_decodable_event_wins() {
        let receipt = receipt(vec![placed(3).to_log(EXCHANGE), placed(4).to_log(EXCHANGE)]);
        assert_eq!(decode_order_id(&receipt, EXCHANGE), Some(OrderId::from(3u64)));
    }

    #[test]
    fn returns_none_without_matching_log() {
        assert_eq!(decode_order_id(&receipt(vec![]), EXCHANGE), None);

        let truncated = ReceiptLog {
            data: Bytes::new(),
            ..placed(5).to_log(EXCHANGE)
        };
        assert_eq!(decode_order_id(&receipt(vec![truncated]), EXCHANGE), None);
    }

    #[test]
    fn find_returns_full_event() {
        let receipt = receipt(vec![placed(11).to_log(EXCHANGE)]);
        let event = find_order_placed(&receipt, EXCHANGE).unwrap();
        assert_eq!(event.owner, OWNER);
        assert_eq!(event.token, WATER);
        assert!(event.isBuy);
    }
}
