//! Handler for the `swap` command.

use std::time::Duration;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::adapter::inbound::cli::command::SwapArgs;
use crate::adapter::inbound::cli::operator::{operator, read_config_toml_or_default};
use crate::adapter::inbound::cli::{output, quote};
use crate::domain::attempt::{SwapSnapshot, SwapStatus};
use crate::domain::intent::SwapIntent;
use crate::domain::network::ChainMetadata;
use crate::error::{Error, Result};

/// Execute `swap`.
///
/// Fails with a non-zero exit when the attempt ends in [`SwapStatus::Error`].
pub async fn execute(args: &SwapArgs) -> Result<()> {
    let config_toml = read_config_toml_or_default(&args.config)?;
    let session = operator()?.swap_session(&config_toml)?;
    let intent = SwapIntent::new(args.from, args.amount.clone());

    // Rejects bad amounts before anything touches the network.
    let quote = session.quote(&intent)?;
    quote::render(&quote)?;

    if !args.yes && !output::is_json() && !confirm()? {
        output::note("Cancelled");
        return Ok(());
    }

    let pb = output::spinner("Connecting wallet");
    match session.connect().await {
        Ok(address) => output::spinner_success(&pb, &format!("Connected {address}")),
        Err(e) => {
            output::spinner_fail(&pb, "Wallet connection failed");
            return Err(e);
        }
    }

    let pb = output::spinner(progress_message(SwapStatus::Idle));
    let submit = session.submit_swap(&intent);
    tokio::pin!(submit);
    let mut ticker = tokio::time::interval(Duration::from_millis(200));
    let result = loop {
        tokio::select! {
            result = &mut submit => break result,
            _ = ticker.tick() => {
                pb.set_message(progress_message(session.snapshot().status));
            }
        }
    };
    session.disconnect().await;

    let snapshot = match result {
        Ok(snapshot) => snapshot,
        Err(e) => {
            output::spinner_fail(&pb, "Swap not started");
            return Err(e);
        }
    };

    if snapshot.status == SwapStatus::Success {
        output::spinner_success(&pb, "Order placed");
    } else {
        output::spinner_fail(&pb, "Swap failed");
    }
    render(&snapshot, session.chain())?;

    match snapshot.error_message {
        Some(message) if snapshot.status == SwapStatus::Error => Err(Error::Transaction(message)),
        _ => Ok(()),
    }
}

fn confirm() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Submit approval and order?")
        .default(false)
        .interact()?)
}

const fn progress_message(status: SwapStatus) -> &'static str {
    match status {
        SwapStatus::Idle => "Checking network",
        SwapStatus::Approving => "Waiting for approval",
        SwapStatus::Placing => "Placing order",
        SwapStatus::Success | SwapStatus::Error => "Finishing",
    }
}

fn render(snapshot: &SwapSnapshot, chain: &ChainMetadata) -> Result<()> {
    output::result("swap", snapshot)?;
    if output::is_json() {
        return Ok(());
    }

    output::section("Swap");
    output::field("Status", snapshot.status);
    if let Some(tx) = snapshot.approval_tx_hash {
        output::field("Approval tx", output::muted(chain.tx_url(tx)));
    }
    if let Some(tx) = snapshot.order_tx_hash {
        output::field("Order tx", output::muted(chain.tx_url(tx)));
    }
    match (snapshot.status, snapshot.order_id) {
        (_, Some(id)) => output::field("Order ID", output::highlight(id)),
        (SwapStatus::Success, None) => {
            output::warning("Order placed but no OrderPlaced event was found");
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_follows_status() {
        assert_eq!(progress_message(SwapStatus::Approving), "Waiting for approval");
        assert_eq!(progress_message(SwapStatus::Placing), "Placing order");
    }
}
