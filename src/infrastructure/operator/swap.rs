//! Swap operator implementation.

use crate::domain::intent::SwapIntent;
use crate::domain::quote::Quote;
use crate::error::Result;
use crate::infrastructure::config;
use crate::port::inbound::operator::swap::{SwapOperator, SwapSession};

use super::entry::Operator;

impl SwapOperator for Operator {
    fn quote(&self, config_toml: &str, intent: &SwapIntent) -> Result<Quote> {
        let config = config::settings::Config::parse_settings(config_toml)?;
        Ok(Quote::new(
            intent,
            config.order.reference_price,
            config.order.max_fraction_digits,
        )?)
    }

    fn swap_session(&self, config_toml: &str) -> Result<Box<dyn SwapSession>> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        session(&config)
    }
}

#[cfg(feature = "sapphire")]
fn session(config: &config::settings::Config) -> Result<Box<dyn SwapSession>> {
    let (_, orchestrator) = crate::infrastructure::bootstrap::build_orchestrator(config)?;
    Ok(Box::new(orchestrator))
}

#[cfg(not(feature = "sapphire"))]
fn session(_config: &config::settings::Config) -> Result<Box<dyn SwapSession>> {
    Err(super::shared::sapphire_disabled("swap"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::Token;

    #[test]
    fn quote_uses_configured_price() {
        let quote = Operator::new()
            .quote(
                "[order]\nreference_price = 2\n",
                &SwapIntent::new(Token::Water, "10.5"),
            )
            .unwrap();
        assert_eq!(quote.to_token, Token::Fire);
        assert_eq!(quote.amount_out.to_string(), "21");
    }

    #[test]
    fn quote_rejects_bad_amount() {
        assert!(Operator::new()
            .quote("", &SwapIntent::new(Token::Fire, "abc"))
            .is_err());
    }
}
