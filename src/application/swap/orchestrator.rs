//! Approve-then-place sequencing.
//!
//! The orchestrator owns the single live [`SwapAttempt`]. All mutations go
//! through the attempt's named transitions; callers only ever see a
//! [`SwapSnapshot`].
//!
//! Precondition failures (bad amount, no wallet, another swap in flight) are
//! returned as errors and leave the attempt untouched. Anything that fails
//! once the attempt has started is recorded on the attempt itself, which ends
//! in [`SwapStatus::Error`], and the snapshot is returned normally.

use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::confirm::wait_for_confirmation;
use super::settings::SwapSettings;
use crate::domain::amount::TokenAmount;
use crate::domain::attempt::{SwapAttempt, SwapSnapshot, SwapStatus};
use crate::domain::error::DomainError;
use crate::domain::event::decode_order_id;
use crate::domain::id::OrderId;
use crate::domain::intent::SwapIntent;
use crate::domain::network::ChainMetadata;
use crate::domain::order::OrderPayload;
use crate::domain::quote::Quote;
use crate::error::{Error, Result, SwapError};
use crate::port::inbound::operator::swap::SwapSession;
use crate::port::outbound::contract::{ExchangeContract, TokenContract};
use crate::port::outbound::receipt::ReceiptWatcher;
use crate::port::outbound::wallet::WalletConnector;

/// Drives a swap through approval and order placement.
pub struct SwapOrchestrator {
    wallet: Arc<dyn WalletConnector>,
    token: Arc<dyn TokenContract>,
    exchange: Arc<dyn ExchangeContract>,
    watcher: Arc<dyn ReceiptWatcher>,
    settings: SwapSettings,
    attempt: RwLock<SwapAttempt>,
    in_flight: Mutex<()>,
}

impl SwapOrchestrator {
    pub fn new(
        wallet: Arc<dyn WalletConnector>,
        token: Arc<dyn TokenContract>,
        exchange: Arc<dyn ExchangeContract>,
        watcher: Arc<dyn ReceiptWatcher>,
        settings: SwapSettings,
    ) -> Self {
        Self {
            wallet,
            token,
            exchange,
            watcher,
            settings,
            attempt: RwLock::new(SwapAttempt::new()),
            in_flight: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &SwapSettings {
        &self.settings
    }

    /// Read-only view of the live attempt.
    #[must_use]
    pub fn snapshot(&self) -> SwapSnapshot {
        self.attempt.read().snapshot()
    }

    /// Connect the wallet and return the account.
    pub async fn connect(&self) -> Result<Address> {
        let address = self.wallet.connect().await?;
        info!(
            address = %address,
            chain_id = ?self.wallet.chain_id(),
            "Wallet connected"
        );
        Ok(address)
    }

    /// Disconnect the wallet.
    pub async fn disconnect(&self) {
        self.wallet.disconnect().await;
        info!("Wallet disconnected");
    }

    /// Estimate the output of `intent` at the reference price.
    pub fn quote(&self, intent: &SwapIntent) -> Result<Quote> {
        Ok(Quote::new(
            intent,
            self.settings.reference_price,
            self.settings.max_fraction_digits,
        )?)
    }

    /// Make sure the wallet sits on the required chain, switching if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::WalletNotConnected`] without a session and
    /// [`SwapError::NetworkSwitch`] if the switch is declined or does not
    /// take effect.
    pub async fn ensure_network(&self) -> Result<()> {
        let required = &self.settings.chain;
        let current = self.wallet.chain_id().ok_or(SwapError::WalletNotConnected)?;
        if current == required.chain_id {
            return Ok(());
        }

        info!(
            current,
            required = required.chain_id,
            network = %required.name,
            "Requesting network switch"
        );
        self.wallet
            .switch_network(required.chain_id, required)
            .await
            .map_err(|e| SwapError::NetworkSwitch {
                chain_id: required.chain_id,
                reason: e.to_string(),
            })?;

        match self.wallet.chain_id() {
            Some(id) if id == required.chain_id => Ok(()),
            other => Err(SwapError::NetworkSwitch {
                chain_id: required.chain_id,
                reason: format!("wallet still reports chain {other:?}"),
            }
            .into()),
        }
    }

    /// Submit `intent`: approve, wait, place the order, wait, decode.
    ///
    /// # Errors
    ///
    /// Returns an error without touching the attempt when the amount is not a
    /// strictly positive decimal, no wallet is connected, or another swap is
    /// still in flight. Failures after that point end the attempt in
    /// [`SwapStatus::Error`] and are reported through the returned snapshot.
    pub async fn submit_swap(&self, intent: &SwapIntent) -> Result<SwapSnapshot> {
        let amount = intent.parsed_amount(self.settings.max_fraction_digits)?;
        let owner = self.wallet.address().ok_or(SwapError::WalletNotConnected)?;
        let _guard = self.in_flight.try_lock().map_err(|_| SwapError::InFlight)?;

        if let Err(e) = self.ensure_network().await {
            warn!(error = %e, "Swap aborted before submission");
            self.transition(|attempt| attempt.abort(e.to_string()))?;
            return Ok(self.snapshot());
        }

        self.transition(|attempt| attempt.begin(amount))?;
        info!(
            from = %intent.from_token,
            to = %intent.to_token,
            amount = %amount,
            owner = %owner,
            "Swap started"
        );

        match self.execute(owner, intent).await {
            Ok(order_id) => {
                self.transition(|attempt| attempt.order_confirmed(order_id))?;
                let snapshot = self.snapshot();
                info!(
                    order_id = ?snapshot.order_id.map(|id| id.to_string()),
                    order_tx = ?snapshot.order_tx_hash,
                    "Swap succeeded"
                );
                Ok(snapshot)
            }
            Err(e) => {
                warn!(error = %e, "Swap failed");
                self.transition(|attempt| attempt.fail(e.to_string()))?;
                Ok(self.snapshot())
            }
        }
    }

    /// Acknowledge a finished attempt, returning to Idle.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTransition`] unless the attempt is in
    /// Success or Error.
    pub fn dismiss(&self) -> Result<()> {
        self.transition(SwapAttempt::dismiss)?;
        Ok(())
    }

    async fn execute(
        &self,
        owner: Address,
        intent: &SwapIntent,
    ) -> std::result::Result<Option<OrderId>, SwapError> {
        let amount = self.pending_amount()?;
        self.approve(amount, intent)
            .await
            .map_err(|e| phase_error(e, SwapError::ApprovalFailed))?;
        self.place(owner, amount, intent)
            .await
            .map_err(|e| phase_error(e, SwapError::OrderFailed))
    }

    async fn approve(&self, amount: TokenAmount, intent: &SwapIntent) -> Result<()> {
        let token = self.settings.token_address(intent.from_token);
        let spender = self.exchange.address();

        let tx_hash = self.token.approve(token, spender, amount.units()).await?;
        self.transition(|attempt| attempt.approval_submitted(tx_hash))?;
        info!(
            tx_hash = %tx_hash,
            token = %intent.from_token,
            spender = %spender,
            "Approval submitted"
        );

        wait_for_confirmation(self.watcher.as_ref(), tx_hash, &self.settings.confirmation).await?;
        self.transition(SwapAttempt::approval_confirmed)?;
        info!(tx_hash = %tx_hash, "Approval confirmed");
        Ok(())
    }

    async fn place(
        &self,
        owner: Address,
        amount: TokenAmount,
        intent: &SwapIntent,
    ) -> Result<Option<OrderId>> {
        let payload = OrderPayload {
            owner,
            token: self.settings.token_address(intent.from_token),
            price: self.settings.reference_price_units,
            size: amount,
            is_buy: intent.is_buy(),
        };
        let encoded = payload.encode()?;
        debug!(payload = %encoded, "Order encoded");

        let tx_hash = self.exchange.place_order(&encoded).await?;
        self.transition(|attempt| attempt.order_submitted(tx_hash))?;
        info!(tx_hash = %tx_hash, is_buy = payload.is_buy, "Order submitted");

        let receipt =
            wait_for_confirmation(self.watcher.as_ref(), tx_hash, &self.settings.confirmation)
                .await?;
        let order_id = decode_order_id(&receipt, self.exchange.address());
        if order_id.is_none() {
            warn!(
                tx_hash = %tx_hash,
                logs = receipt.logs.len(),
                "No OrderPlaced event in receipt, order id unavailable"
            );
        }
        Ok(order_id)
    }

    /// The amount captured when the attempt began. Later steps read it from
    /// here rather than from the intent.
    fn pending_amount(&self) -> std::result::Result<TokenAmount, SwapError> {
        self.attempt
            .read()
            .pending_amount()
            .ok_or_else(|| SwapError::ApprovalFailed("no pending amount captured".into()))
    }

    fn transition(
        &self,
        step: impl FnOnce(&mut SwapAttempt) -> std::result::Result<(), DomainError>,
    ) -> Result<SwapStatus> {
        let mut attempt = self.attempt.write();
        let from = attempt.status();
        step(&mut attempt)?;
        let to = attempt.status();
        drop(attempt);
        if from != to {
            debug!(from = %from, to = %to, "Swap status changed");
        }
        Ok(to)
    }
}

#[async_trait]
impl SwapSession for SwapOrchestrator {
    fn chain(&self) -> &ChainMetadata {
        &self.settings.chain
    }

    fn quote(&self, intent: &SwapIntent) -> Result<Quote> {
        Self::quote(self, intent)
    }

    async fn connect(&self) -> Result<Address> {
        Self::connect(self).await
    }

    async fn disconnect(&self) {
        Self::disconnect(self).await;
    }

    async fn submit_swap(&self, intent: &SwapIntent) -> Result<SwapSnapshot> {
        Self::submit_swap(self, intent).await
    }

    fn snapshot(&self) -> SwapSnapshot {
        Self::snapshot(self)
    }

    fn dismiss(&self) -> Result<()> {
        Self::dismiss(self)
    }
}

/// Attribute a failure to the step it happened in, without double-wrapping.
fn phase_error(error: Error, wrap: fn(String) -> SwapError) -> SwapError {
    match error {
        Error::Swap(e @ (SwapError::ApprovalFailed(_) | SwapError::OrderFailed(_))) => e,
        other => wrap(other.to_string()),
    }
}
