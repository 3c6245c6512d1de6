//! Order construction settings.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::amount::TokenAmount;
use crate::domain::token::TOKEN_DECIMALS;

/// How orders are priced and how amounts may be entered.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfig {
    /// Fixed price quoted for every order, in counter tokens per token.
    #[serde(default = "default_reference_price")]
    pub reference_price: Decimal,
    /// Maximum digits accepted after the decimal point.
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: u32,
}

fn default_reference_price() -> Decimal {
    Decimal::ONE
}

const fn default_max_fraction_digits() -> u32 {
    2
}

impl OrderConfig {
    /// Reference price in minor units of the counter token per whole token.
    #[must_use]
    pub fn reference_price_units(&self) -> Option<U256> {
        let one = U256::from(10u64).pow(U256::from(TOKEN_DECIMALS));
        TokenAmount::from_units(one)?
            .mul_price(self.reference_price)
            .map(|amount| amount.units())
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            reference_price: default_reference_price(),
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reference_price_scales_to_minor_units() {
        let config = OrderConfig::default();
        assert_eq!(
            config.reference_price_units(),
            Some(U256::from(1_000_000_000_000_000_000u64))
        );

        let half = OrderConfig {
            reference_price: dec!(0.5),
            ..OrderConfig::default()
        };
        assert_eq!(
            half.reference_price_units(),
            Some(U256::from(500_000_000_000_000_000u64))
        );
    }

    #[test]
    fn non_positive_price_has_no_units() {
        let config = OrderConfig {
            reference_price: Decimal::ZERO,
            ..OrderConfig::default()
        };
        assert_eq!(config.reference_price_units(), None);
    }
}
