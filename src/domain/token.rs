//! The fixed WATER/FIRE token pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Decimals of both pool tokens.
pub const TOKEN_DECIMALS: u32 = 18;

/// One of the two tokens traded on the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Water,
    Fire,
}

impl Token {
    /// Both tokens, in display order.
    pub const ALL: [Token; 2] = [Token::Water, Token::Fire];

    /// The complementary token.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Water => Self::Fire,
            Self::Fire => Self::Water,
        }
    }

    /// Ticker symbol as shown to the user.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Water => "WATER",
            Self::Fire => "FIRE",
        }
    }

    /// Selling WATER is a buy on the WATER/FIRE book.
    #[must_use]
    pub const fn is_buy_side(self) -> bool {
        matches!(self, Self::Water)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Token {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "water" => Ok(Self::Water),
            "fire" => Ok(Self::Fire),
            _ => Err(DomainError::UnknownToken(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_an_involution() {
        for token in Token::ALL {
            assert_ne!(token.other(), token);
            assert_eq!(token.other().other(), token);
        }
    }

    #[test]
    fn parses_symbols_case_insensitively() {
        assert_eq!("WATER".parse::<Token>().unwrap(), Token::Water);
        assert_eq!(" fire ".parse::<Token>().unwrap(), Token::Fire);
        assert!(matches!(
            "earth".parse::<Token>(),
            Err(DomainError::UnknownToken(_))
        ));
    }

    #[test]
    fn water_is_buy_side() {
        assert!(Token::Water.is_buy_side());
        assert!(!Token::Fire.is_buy_side());
    }
}
