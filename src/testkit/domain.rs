//! Fixtures for domain values used across tests.

use std::time::Duration;

use alloy_primitives::{address, b256, Address, B256, U256};
use rust_decimal::Decimal;

use crate::application::swap::confirm::ConfirmationPolicy;
use crate::application::swap::settings::SwapSettings;
use crate::domain::event::OrderPlaced;
use crate::domain::id::TxHash;
use crate::domain::network::ChainMetadata;
use crate::domain::receipt::{ReceiptLog, TxReceipt};

/// Exchange address used by the harness.
pub const EXCHANGE: Address = address!("7bd42a436Ad8c2BA2d06d5Fd9416A774d2936098");
/// WATER token address used by the harness.
pub const WATER: Address = address!("96c5F50000dE0B12CBa648eAfAab818aBCadAaA4");
/// FIRE token address used by the harness.
pub const FIRE: Address = address!("f2b3B8BE27A7712e06eEA16175cC8BacC6980f5C");
/// The connected account.
pub const OWNER: Address = address!("1111111111111111111111111111111111111111");

/// Hash returned for the approval transaction.
pub const APPROVAL_TX: TxHash =
    b256!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
/// Hash returned for the order transaction.
pub const ORDER_TX: TxHash =
    b256!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

/// `10^18`, one whole token in minor units.
pub fn one_token() -> U256 {
    U256::from(10u64).pow(U256::from(18u64))
}

/// Settings for Sapphire testnet with a 1:1 price and millisecond polling.
pub fn swap_settings() -> SwapSettings {
    SwapSettings {
        chain: ChainMetadata::sapphire_testnet(),
        water_token: WATER,
        fire_token: FIRE,
        reference_price: Decimal::ONE,
        reference_price_units: one_token(),
        max_fraction_digits: 2,
        confirmation: ConfirmationPolicy {
            poll_interval: Duration::from_millis(1),
            timeout: Some(Duration::from_secs(5)),
        },
    }
}

/// An `OrderPlaced` log emitted by `exchange`.
pub fn order_placed_log(exchange: Address, order_id: u64, owner: Address) -> ReceiptLog {
    OrderPlaced {
        orderId: U256::from(order_id),
        owner,
        token: WATER,
        isBuy: true,
    }
    .to_log(exchange)
}

/// A log from some other event, e.g. an ERC-20 `Transfer`.
pub fn foreign_log(address: Address) -> ReceiptLog {
    ReceiptLog {
        address,
        topics: vec![B256::repeat_byte(0x42)],
        data: vec![0u8; 32].into(),
    }
}

/// A successful receipt carrying `logs`.
pub fn receipt(tx_hash: TxHash, logs: Vec<ReceiptLog>) -> TxReceipt {
    TxReceipt {
        tx_hash,
        block_number: Some(1),
        success: true,
        logs,
    }
}
