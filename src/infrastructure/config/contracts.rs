//! Deployed contract addresses.

use alloy_primitives::{address, Address};
use serde::Deserialize;

/// ROFLSwap exchange on Sapphire testnet.
const ROFL_SWAP_ADDRESS: Address = address!("7bd42a436Ad8c2BA2d06d5Fd9416A774d2936098");

/// WATER token on Sapphire testnet.
const WATER_TOKEN_ADDRESS: Address = address!("96c5F50000dE0B12CBa648eAfAab818aBCadAaA4");

/// FIRE token on Sapphire testnet.
const FIRE_TOKEN_ADDRESS: Address = address!("f2b3B8BE27A7712e06eEA16175cC8BacC6980f5C");

/// Exchange and token addresses.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContractsConfig {
    pub exchange: Address,
    pub water_token: Address,
    pub fire_token: Address,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            exchange: ROFL_SWAP_ADDRESS,
            water_token: WATER_TOKEN_ADDRESS,
            fire_token: FIRE_TOKEN_ADDRESS,
        }
    }
}
