//! Output estimate for a swap intent.

use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::TokenAmount;
use super::error::DomainError;
use super::intent::SwapIntent;
use super::token::Token;

/// What a swap would return at the fixed reference price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub from_token: Token,
    pub to_token: Token,
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
    pub price: Decimal,
}

impl Quote {
    /// Price `intent` at `price` counter tokens per token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the amount does not parse or
    /// the output would round down to zero.
    pub fn new(
        intent: &SwapIntent,
        price: Decimal,
        max_fraction_digits: u32,
    ) -> Result<Self, DomainError> {
        let amount_in = intent.parsed_amount(max_fraction_digits)?;
        let amount_out = amount_in
            .mul_price(price)
            .ok_or_else(|| DomainError::InvalidAmount {
                input: intent.amount.clone(),
                reason: format!("output at price {price} rounds to zero"),
            })?;

        Ok(Self {
            from_token: intent.from_token,
            to_token: intent.to_token,
            amount_in,
            amount_out,
            price,
        })
    }
}
