//! In-memory implementations of the wallet, contract and receipt ports.
//!
//! Every mock records what it was asked to do into a shared [`CallLog`], so
//! tests can assert on ordering across collaborators (for instance that no
//! `placeOrder` was sent before the approval was confirmed).

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::id::TxHash;
use crate::domain::network::ChainMetadata;
use crate::domain::order::EncodedOrder;
use crate::domain::receipt::{Confirmation, TxReceipt};
use crate::error::{Error, Result};
use crate::port::outbound::contract::{ExchangeContract, TokenContract};
use crate::port::outbound::receipt::ReceiptWatcher;
use crate::port::outbound::wallet::WalletConnector;

/// One observed port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect,
    SwitchNetwork(u64),
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
    PlaceOrder(EncodedOrder),
    Confirmation(TxHash),
}

/// Ordered record of calls shared by all mocks of one harness.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.lock().push(call);
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    /// All approvals, in order.
    #[must_use]
    pub fn approvals(&self) -> Vec<(Address, Address, U256)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Approve {
                    token,
                    spender,
                    amount,
                } => Some((token, spender, amount)),
                _ => None,
            })
            .collect()
    }

    /// All submitted orders, in order.
    #[must_use]
    pub fn orders(&self) -> Vec<EncodedOrder> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::PlaceOrder(order) => Some(order),
                _ => None,
            })
            .collect()
    }

    /// Position of the first call matching `pred`.
    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls().iter().position(pred)
    }
}

/// How a mock wallet answers a network switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchBehavior {
    /// Move to the requested chain.
    Accept,
    /// Refuse with an error.
    Reject,
    /// Report success but stay on the old chain.
    Ignore,
}

/// Wallet with a fixed account that starts disconnected.
pub struct MockWallet {
    account: Address,
    chain_id: Mutex<u64>,
    connected: Mutex<bool>,
    switch: SwitchBehavior,
    log: CallLog,
}

impl MockWallet {
    pub fn new(account: Address, chain_id: u64, switch: SwitchBehavior, log: CallLog) -> Self {
        Self {
            account,
            chain_id: Mutex::new(chain_id),
            connected: Mutex::new(false),
            switch,
            log,
        }
    }

    /// Start with an open session.
    #[must_use]
    pub fn connected(self) -> Self {
        *self.connected.lock() = true;
        self
    }
}

#[async_trait]
impl WalletConnector for MockWallet {
    async fn connect(&self) -> Result<Address> {
        self.log.push(Call::Connect);
        *self.connected.lock() = true;
        Ok(self.account)
    }

    async fn disconnect(&self) {
        *self.connected.lock() = false;
    }

    fn address(&self) -> Option<Address> {
        self.connected.lock().then_some(self.account)
    }

    fn chain_id(&self) -> Option<u64> {
        self.connected.lock().then(|| *self.chain_id.lock())
    }

    async fn switch_network(&self, chain_id: u64, _metadata: &ChainMetadata) -> Result<()> {
        self.log.push(Call::SwitchNetwork(chain_id));
        match self.switch {
            SwitchBehavior::Accept => {
                *self.chain_id.lock() = chain_id;
                Ok(())
            }
            SwitchBehavior::Reject => Err(Error::Connection("user rejected the request".into())),
            SwitchBehavior::Ignore => Ok(()),
        }
    }
}

/// Token contract that returns a fixed hash or a fixed rejection.
pub struct MockToken {
    outcome: std::result::Result<TxHash, String>,
    log: CallLog,
}

impl MockToken {
    pub fn new(outcome: std::result::Result<TxHash, String>, log: CallLog) -> Self {
        Self { outcome, log }
    }
}

#[async_trait]
impl TokenContract for MockToken {
    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        self.log.push(Call::Approve {
            token,
            spender,
            amount,
        });
        self.outcome.clone().map_err(Error::Transaction)
    }
}

/// Exchange contract that returns a fixed hash or a fixed rejection.
pub struct MockExchange {
    address: Address,
    outcome: std::result::Result<TxHash, String>,
    log: CallLog,
}

impl MockExchange {
    pub fn new(
        address: Address,
        outcome: std::result::Result<TxHash, String>,
        log: CallLog,
    ) -> Self {
        Self {
            address,
            outcome,
            log,
        }
    }
}

#[async_trait]
impl ExchangeContract for MockExchange {
    fn address(&self) -> Address {
        self.address
    }

    async fn place_order(&self, order: &EncodedOrder) -> Result<TxHash> {
        self.log.push(Call::PlaceOrder(order.clone()));
        self.outcome.clone().map_err(Error::Transaction)
    }
}

/// Receipt source scripted per transaction.
///
/// Each hash has a queue of answers; the last answer repeats once the queue
/// is down to one. Unknown hashes stay pending forever.
pub struct MockWatcher {
    script: Mutex<HashMap<TxHash, VecDeque<Confirmation>>>,
    log: CallLog,
}

impl MockWatcher {
    pub fn new(log: CallLog) -> Self {
        Self {
            script: Mutex::new(HashMap::new()),
            log,
        }
    }

    /// Answer `pending_polls` times with Pending, then with `final_state`.
    pub fn script(&self, tx_hash: TxHash, pending_polls: usize, final_state: Confirmation) {
        let mut answers: VecDeque<Confirmation> =
            std::iter::repeat(Confirmation::Pending).take(pending_polls).collect();
        answers.push_back(final_state);
        self.script.lock().insert(tx_hash, answers);
    }

    /// Mined successfully with `receipt`.
    pub fn confirm(&self, receipt: TxReceipt) {
        self.script(receipt.tx_hash, 0, Confirmation::Confirmed(receipt));
    }

    /// Mined but reverted.
    pub fn revert(&self, mut receipt: TxReceipt) {
        receipt.success = false;
        self.script(receipt.tx_hash, 0, Confirmation::Reverted(receipt));
    }
}

#[async_trait]
impl ReceiptWatcher for MockWatcher {
    async fn confirmation(&self, tx_hash: TxHash) -> Result<Confirmation> {
        self.log.push(Call::Confirmation(tx_hash));
        let mut script = self.script.lock();
        let Some(answers) = script.get_mut(&tx_hash) else {
            return Ok(Confirmation::Pending);
        };
        let answer = if answers.len() > 1 {
            answers.pop_front()
        } else {
            answers.front().cloned()
        };
        Ok(answer.unwrap_or(Confirmation::Pending))
    }
}
