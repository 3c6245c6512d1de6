//! Handlers for the `network` command group.

use std::path::Path;

use crate::adapter::inbound::cli::operator::{operator, read_config_toml_or_default};
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::port::inbound::operator::network::NetworkStatus;

/// Execute `network status`.
pub async fn execute_status(path: &Path) -> Result<()> {
    let config_toml = read_config_toml_or_default(path)?;

    let pb = output::spinner("Querying RPC endpoint");
    let status = match operator()?.network_status(&config_toml).await {
        Ok(status) => status,
        Err(e) => {
            output::spinner_fail(&pb, "RPC endpoint unreachable");
            return Err(e);
        }
    };
    output::spinner_success(&pb, "Connected");

    render(&status)?;
    if !output::is_json() && !status.on_required_chain {
        output::hint("run `roflswap network switch` or let `swap` switch for you");
    }
    Ok(())
}

/// Execute `network switch`.
pub async fn execute_switch(path: &Path) -> Result<()> {
    let config_toml = read_config_toml_or_default(path)?;

    let pb = output::spinner("Switching network");
    let status = match operator()?.network_switch(&config_toml).await {
        Ok(status) => status,
        Err(e) => {
            output::spinner_fail(&pb, "Network switch failed");
            return Err(e);
        }
    };
    output::spinner_success(&pb, &format!("On {}", status.required.name));

    render(&status)
}

fn render(status: &NetworkStatus) -> Result<()> {
    output::result("network", status)?;
    if output::is_json() {
        return Ok(());
    }

    output::section("Network");
    output::field("Account", status.account);
    output::field(
        "Chain ID",
        status
            .chain_id
            .map_or_else(|| "unknown".to_string(), |id| id.to_string()),
    );
    output::field(
        "Required",
        format!("{} ({})", status.required.chain_id, status.required.name),
    );
    if status.on_required_chain {
        output::success("Wallet is on the required network");
    } else {
        output::warning("Wallet is on a different network");
    }
    Ok(())
}
