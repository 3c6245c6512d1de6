//! Handler for the `wallet` command group.

use std::path::Path;

use crate::adapter::inbound::cli::operator::{operator, read_config_toml_or_default};
use crate::adapter::inbound::cli::output;
use crate::error::Result;

/// Execute `wallet address`. Derives the account locally without touching
/// the network.
pub fn execute_address(path: &Path) -> Result<()> {
    let config_toml = read_config_toml_or_default(path)?;
    let wallet = operator()?.wallet_address(&config_toml)?;

    output::result("wallet", &wallet)?;
    if output::is_json() {
        return Ok(());
    }

    output::section("Wallet");
    output::field("Address", output::highlight(wallet.address));
    output::field("Explorer", output::muted(&wallet.explorer_url));
    Ok(())
}
