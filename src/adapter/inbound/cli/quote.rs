//! Handler for the `quote` command.

use crate::adapter::inbound::cli::command::QuoteArgs;
use crate::adapter::inbound::cli::operator::{operator, read_config_toml_or_default};
use crate::adapter::inbound::cli::output;
use crate::domain::intent::SwapIntent;
use crate::domain::quote::Quote;
use crate::error::Result;

/// Execute `quote`. Needs neither a key nor a network connection.
pub fn execute(args: &QuoteArgs) -> Result<()> {
    let config_toml = read_config_toml_or_default(&args.config)?;
    let intent = SwapIntent::new(args.from, args.amount.clone());
    let quote = operator()?.quote(&config_toml, &intent)?;

    render(&quote)
}

pub(crate) fn render(quote: &Quote) -> Result<()> {
    output::result("quote", quote)?;
    if output::is_json() {
        return Ok(());
    }

    output::section("Quote");
    output::field(
        "You pay",
        format!("{} {}", quote.amount_in, quote.from_token),
    );
    output::field(
        "You receive",
        output::highlight(format!("{} {}", quote.amount_out, quote.to_token)),
    );
    output::field(
        "Price",
        output::muted(format!(
            "1 {} = {} {}",
            quote.from_token, quote.price, quote.to_token
        )),
    );
    Ok(())
}
