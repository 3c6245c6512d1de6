//! What the user asked to swap.

use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;
use super::error::DomainError;
use super::token::Token;

/// A swap request as entered, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapIntent {
    pub from_token: Token,
    pub to_token: Token,
    /// Raw amount string as typed.
    pub amount: String,
}

impl SwapIntent {
    /// Create an intent selling `amount` of `from_token` for its complement.
    pub fn new(from_token: Token, amount: impl Into<String>) -> Self {
        Self {
            from_token,
            to_token: from_token.other(),
            amount: amount.into(),
        }
    }

    /// Reverse the swap direction, keeping the amount.
    #[must_use]
    pub fn flip(self) -> Self {
        Self {
            from_token: self.to_token,
            to_token: self.from_token,
            amount: self.amount,
        }
    }

    /// Parse the amount into minor units.
    pub fn parsed_amount(&self, max_fraction_digits: u32) -> Result<TokenAmount, DomainError> {
        TokenAmount::parse(&self.amount, max_fraction_digits)
    }

    /// Whether this intent buys on the WATER/FIRE book.
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        self.from_token.is_buy_side()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pairs_with_complement() {
        let intent = SwapIntent::new(Token::Fire, "1");
        assert_eq!(intent.to_token, Token::Water);
        assert!(!intent.is_buy());
    }

    #[test]
    fn flip_swaps_direction() {
        let intent = SwapIntent::new(Token::Water, "2.5").flip();
        assert_eq!(intent.from_token, Token::Fire);
        assert_eq!(intent.to_token, Token::Water);
        assert_eq!(intent.amount, "2.5");
    }
}
