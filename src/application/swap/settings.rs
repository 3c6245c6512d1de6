//! Values the orchestrator reads from configuration.

use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;

use super::confirm::ConfirmationPolicy;
use crate::domain::network::ChainMetadata;
use crate::domain::token::Token;

/// Static inputs to every swap.
#[derive(Debug, Clone)]
pub struct SwapSettings {
    /// The chain swaps must be submitted on.
    pub chain: ChainMetadata,
    pub water_token: Address,
    pub fire_token: Address,
    /// Fixed price quoted for every order.
    pub reference_price: Decimal,
    /// `reference_price` in minor units, as written into the order payload.
    pub reference_price_units: U256,
    /// Digits accepted after the decimal point of an entered amount.
    pub max_fraction_digits: u32,
    pub confirmation: ConfirmationPolicy,
}

impl SwapSettings {
    /// Contract address of `token`.
    #[must_use]
    pub const fn token_address(&self, token: Token) -> Address {
        match token {
            Token::Water => self.water_token,
            Token::Fire => self.fire_token,
        }
    }
}
