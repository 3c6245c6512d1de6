//! A [`SwapOrchestrator`] wired to in-memory ports.

use std::sync::Arc;

use alloy_primitives::Address;

use super::chain::{CallLog, MockExchange, MockToken, MockWallet, MockWatcher, SwitchBehavior};
use super::domain::{
    order_placed_log, receipt, swap_settings, APPROVAL_TX, EXCHANGE, ORDER_TX, OWNER,
};
use crate::application::swap::orchestrator::SwapOrchestrator;
use crate::application::swap::settings::SwapSettings;
use crate::domain::id::TxHash;
use crate::domain::network::SAPPHIRE_TESTNET_CHAIN_ID;

/// Order id carried by the default placement receipt.
pub const DEFAULT_ORDER_ID: u64 = 42;

/// Builder for [`SwapHarness`].
///
/// By default the wallet is connected on Sapphire testnet, both transactions
/// are accepted and mined at once, and the placement receipt carries an
/// `OrderPlaced` event with [`DEFAULT_ORDER_ID`].
pub struct SwapHarnessBuilder {
    chain_id: u64,
    connected: bool,
    switch: SwitchBehavior,
    approval: Result<TxHash, String>,
    order: Result<TxHash, String>,
    settings: SwapSettings,
}

impl Default for SwapHarnessBuilder {
    fn default() -> Self {
        Self {
            chain_id: SAPPHIRE_TESTNET_CHAIN_ID,
            connected: true,
            switch: SwitchBehavior::Accept,
            approval: Ok(APPROVAL_TX),
            order: Ok(ORDER_TX),
            settings: swap_settings(),
        }
    }
}

impl SwapHarnessBuilder {
    /// Wallet starts on `chain_id`.
    #[must_use]
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Wallet starts without a session.
    #[must_use]
    pub const fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    #[must_use]
    pub const fn switch(mut self, behavior: SwitchBehavior) -> Self {
        self.switch = behavior;
        self
    }

    /// The approval is refused with `reason`.
    #[must_use]
    pub fn approval_rejected(mut self, reason: &str) -> Self {
        self.approval = Err(reason.to_string());
        self
    }

    /// The placement is refused with `reason`.
    #[must_use]
    pub fn order_rejected(mut self, reason: &str) -> Self {
        self.order = Err(reason.to_string());
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: SwapSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn build(self) -> SwapHarness {
        let log = CallLog::default();

        let mut wallet = MockWallet::new(OWNER, self.chain_id, self.switch, log.clone());
        if self.connected {
            wallet = wallet.connected();
        }

        let watcher = Arc::new(MockWatcher::new(log.clone()));
        watcher.confirm(receipt(APPROVAL_TX, vec![]));
        watcher.confirm(receipt(
            ORDER_TX,
            vec![order_placed_log(EXCHANGE, DEFAULT_ORDER_ID, OWNER)],
        ));

        let orchestrator = SwapOrchestrator::new(
            Arc::new(wallet),
            Arc::new(MockToken::new(self.approval, log.clone())),
            Arc::new(MockExchange::new(EXCHANGE, self.order, log.clone())),
            watcher.clone(),
            self.settings,
        );

        SwapHarness {
            orchestrator: Arc::new(orchestrator),
            watcher,
            log,
        }
    }
}

/// An orchestrator plus handles on its mocks.
pub struct SwapHarness {
    pub orchestrator: Arc<SwapOrchestrator>,
    /// Re-script receipts after building.
    pub watcher: Arc<MockWatcher>,
    pub log: CallLog,
}

impl SwapHarness {
    #[must_use]
    pub fn builder() -> SwapHarnessBuilder {
        SwapHarnessBuilder::default()
    }

    /// Exchange address the orchestrator was built with.
    #[must_use]
    pub const fn exchange(&self) -> Address {
        EXCHANGE
    }
}
