//! Fixed-point token amounts.
//!
//! Amounts are entered as decimal strings and carried as integer minor units
//! (18 decimals) from the moment they are parsed.

use std::fmt;

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::error::DomainError;
use super::token::TOKEN_DECIMALS;

/// A strictly positive token quantity in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Parse a user-entered decimal string.
    ///
    /// Only ASCII digits and a single `.` are accepted, and at most
    /// `max_fraction_digits` digits may follow the point (capped at the token's
    /// 18 decimals). Zero is rejected.
    pub fn parse(input: &str, max_fraction_digits: u32) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidAmount {
            input: input.to_string(),
            reason,
        };

        let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("amount is empty".into()));
        }
        let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !digits_only(whole) || !digits_only(fraction) {
            return Err(invalid(
                "only digits and a single decimal point are allowed".into(),
            ));
        }

        let limit = max_fraction_digits.min(TOKEN_DECIMALS) as usize;
        if fraction.len() > limit {
            return Err(invalid(format!("at most {limit} decimal places")));
        }

        let scaled = format!(
            "{whole}{fraction:0<width$}",
            width = TOKEN_DECIMALS as usize
        );
        let units = U256::from_str_radix(&scaled, 10).map_err(|e| invalid(e.to_string()))?;

        Self::from_units(units).ok_or_else(|| invalid("amount must be greater than zero".into()))
    }

    /// Wrap a raw minor-unit value; `None` for zero.
    #[must_use]
    pub fn from_units(units: U256) -> Option<Self> {
        (!units.is_zero()).then_some(Self(units))
    }

    /// Minor units (10^-18 of a token).
    #[must_use]
    pub const fn units(&self) -> U256 {
        self.0
    }

    /// Multiply by a decimal price, truncating to whole minor units.
    ///
    /// Returns `None` for a non-positive price or when the product truncates
    /// to zero.
    #[must_use]
    pub fn mul_price(&self, price: Decimal) -> Option<Self> {
        if price <= Decimal::ZERO {
            return None;
        }
        let mantissa = U256::from(price.mantissa().unsigned_abs());
        let divisor = U256::from(10u64).pow(U256::from(price.scale()));
        Self::from_units(self.0.checked_mul(mantissa)? / divisor)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = U256::from(10u64).pow(U256::from(TOKEN_DECIMALS));
        let whole = self.0 / base;
        let fraction = self.0 % base;
        if fraction.is_zero() {
            return write!(f, "{whole}");
        }
        let fraction = format!(
            "{:0>width$}",
            fraction.to_string(),
            width = TOKEN_DECIMALS as usize
        );
        write!(f, "{whole}.{}", fraction.trim_end_matches('0'))
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
