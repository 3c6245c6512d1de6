//! The lifecycle of a single swap attempt.
//!
//! ```text
//! Idle ──begin──▶ Approving ──approval_confirmed──▶ Placing ──order_confirmed──▶ Success
//!   │                 │                                │
//!   └──abort──┐       └────────fail───────┐  ┌──fail───┘
//!             ▼                           ▼  ▼
//!                          Error
//! Success / Error ──dismiss──▶ Idle
//! ```
//!
//! Every mutation goes through a named transition. A transition requested
//! from the wrong state is rejected and leaves the attempt untouched.

use std::fmt;

use serde::Serialize;

use super::amount::TokenAmount;
use super::error::DomainError;
use super::id::{OrderId, TxHash};

/// Where the live attempt stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    #[default]
    Idle,
    Approving,
    Placing,
    Success,
    Error,
}

impl SwapStatus {
    /// Approving and Placing are never resting states.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Approving | Self::Placing)
    }

    /// Success and Error wait for dismissal.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Approving => "approving",
            Self::Placing => "placing",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Read-only projection of a [`SwapAttempt`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwapSnapshot {
    pub status: SwapStatus,
    pub approval_tx_hash: Option<TxHash>,
    pub order_tx_hash: Option<TxHash>,
    pub pending_amount: Option<TokenAmount>,
    pub order_id: Option<OrderId>,
    pub error_message: Option<String>,
}

/// Mutable state of the current attempt.
#[derive(Debug, Clone, Default)]
pub struct SwapAttempt {
    status: SwapStatus,
    approval_tx_hash: Option<TxHash>,
    order_tx_hash: Option<TxHash>,
    pending_amount: Option<TokenAmount>,
    order_id: Option<OrderId>,
    error_message: Option<String>,
}

impl SwapAttempt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(&self) -> SwapStatus {
        self.status
    }

    #[must_use]
    pub const fn pending_amount(&self) -> Option<TokenAmount> {
        self.pending_amount
    }

    #[must_use]
    pub fn snapshot(&self) -> SwapSnapshot {
        SwapSnapshot {
            status: self.status,
            approval_tx_hash: self.approval_tx_hash,
            order_tx_hash: self.order_tx_hash,
            pending_amount: self.pending_amount,
            order_id: self.order_id,
            error_message: self.error_message.clone(),
        }
    }

    fn require_status(
        &self,
        allowed: &[SwapStatus],
        action: &'static str,
    ) -> Result<(), DomainError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.status,
                action,
            })
        }
    }

    /// Start a new attempt, discarding whatever a finished one left behind.
    pub fn begin(&mut self, amount: TokenAmount) -> Result<(), DomainError> {
        self.require_status(
            &[SwapStatus::Idle, SwapStatus::Success, SwapStatus::Error],
            "begin",
        )?;
        *self = Self {
            status: SwapStatus::Approving,
            pending_amount: Some(amount),
            ..Self::default()
        };
        Ok(())
    }

    /// Record the approval transaction once the wallet has broadcast it.
    pub fn approval_submitted(&mut self, tx_hash: TxHash) -> Result<(), DomainError> {
        self.require_status(&[SwapStatus::Approving], "record approval")?;
        self.approval_tx_hash = Some(tx_hash);
        Ok(())
    }

    /// The approval receipt is confirmed; placement may begin.
    pub fn approval_confirmed(&mut self) -> Result<(), DomainError> {
        self.require_status(&[SwapStatus::Approving], "confirm approval")?;
        if self.approval_tx_hash.is_none() {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                action: "confirm approval without a transaction",
            });
        }
        self.status = SwapStatus::Placing;
        Ok(())
    }

    /// Record the placement transaction once the wallet has broadcast it.
    pub fn order_submitted(&mut self, tx_hash: TxHash) -> Result<(), DomainError> {
        self.require_status(&[SwapStatus::Placing], "record order")?;
        self.order_tx_hash = Some(tx_hash);
        Ok(())
    }

    /// The placement receipt is confirmed.
    pub fn order_confirmed(&mut self, order_id: Option<OrderId>) -> Result<(), DomainError> {
        self.require_status(&[SwapStatus::Placing], "confirm order")?;
        if self.order_tx_hash.is_none() {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                action: "confirm order without a transaction",
            });
        }
        self.status = SwapStatus::Success;
        self.order_id = order_id;
        Ok(())
    }

    /// An in-flight step was rejected or failed.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        self.require_status(&[SwapStatus::Approving, SwapStatus::Placing], "fail")?;
        self.status = SwapStatus::Error;
        self.pending_amount = None;
        self.error_message = Some(message.into());
        Ok(())
    }

    /// Give up before any transaction was requested.
    pub fn abort(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        self.require_status(
            &[SwapStatus::Idle, SwapStatus::Success, SwapStatus::Error],
            "abort",
        )?;
        *self = Self {
            status: SwapStatus::Error,
            error_message: Some(message.into()),
            ..Self::default()
        };
        Ok(())
    }

    /// Acknowledge a finished attempt.
    pub fn dismiss(&mut self) -> Result<(), DomainError> {
        self.require_status(&[SwapStatus::Success, SwapStatus::Error], "dismiss")?;
        *self = Self::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount() -> TokenAmount {
        TokenAmount::parse("1", 2).unwrap()
    }

    fn hash(byte: u8) -> TxHash {
        TxHash::repeat_byte(byte)
    }

    #[test]
    fn happy_path_reaches_success() {
        let mut attempt = SwapAttempt::new();
        attempt.begin(amount()).unwrap();
        assert_eq!(attempt.status(), SwapStatus::Approving);
        attempt.approval_submitted(hash(1)).unwrap();
        attempt.approval_confirmed().unwrap();
        assert_eq!(attempt.status(), SwapStatus::Placing);
        attempt.order_submitted(hash(2)).unwrap();
        attempt.order_confirmed(Some(OrderId::from(5u64))).unwrap();

        let snap = attempt.snapshot();
        assert_eq!(snap.status, SwapStatus::Success);
        assert_eq!(snap.approval_tx_hash, Some(hash(1)));
        assert_eq!(snap.order_tx_hash, Some(hash(2)));
        assert_eq!(snap.order_id, Some(OrderId::from(5u64)));
        assert_eq!(snap.pending_amount, Some(amount()));
    }

    #[test]
    fn placing_requires_confirmed_approval() {
        let mut attempt = SwapAttempt::new();
        assert!(attempt.order_submitted(hash(2)).is_err());

        attempt.begin(amount()).unwrap();
        assert!(attempt.approval_confirmed().is_err(), "no approval tx yet");
        assert!(attempt.order_submitted(hash(2)).is_err());
        assert_eq!(attempt.status(), SwapStatus::Approving);
    }

    #[test]
    fn fail_clears_pending_amount() {
        let mut attempt = SwapAttempt::new();
        attempt.begin(amount()).unwrap();
        attempt.fail("user rejected").unwrap();

        let snap = attempt.snapshot();
        assert_eq!(snap.status, SwapStatus::Error);
        assert_eq!(snap.pending_amount, None);
        assert_eq!(snap.error_message.as_deref(), Some("user rejected"));
    }

    #[test]
    fn fail_is_only_legal_in_flight() {
        let mut attempt = SwapAttempt::new();
        assert_eq!(
            attempt.fail("nope"),
            Err(DomainError::InvalidTransition {
                from: SwapStatus::Idle,
                action: "fail",
            })
        );
    }

    #[test]
    fn dismiss_resets_everything() {
        let mut attempt = SwapAttempt::new();
        attempt.begin(amount()).unwrap();
        attempt.fail("boom").unwrap();
        attempt.dismiss().unwrap();
        assert_eq!(attempt.snapshot(), SwapSnapshot::default());
    }

    #[test]
    fn dismiss_rejected_while_in_flight_or_idle() {
        let mut attempt = SwapAttempt::new();
        assert!(attempt.dismiss().is_err());
        attempt.begin(amount()).unwrap();
        assert!(attempt.dismiss().is_err());
        assert_eq!(attempt.status(), SwapStatus::Approving);
    }

    #[test]
    fn begin_supersedes_finished_attempt() {
        let mut attempt = SwapAttempt::new();
        attempt.begin(amount()).unwrap();
        attempt.approval_submitted(hash(1)).unwrap();
        attempt.fail("boom").unwrap();

        attempt.begin(amount()).unwrap();
        let snap = attempt.snapshot();
        assert_eq!(snap.status, SwapStatus::Approving);
        assert_eq!(snap.approval_tx_hash, None);
        assert_eq!(snap.error_message, None);
    }

    #[test]
    fn begin_rejected_while_in_flight() {
        let mut attempt = SwapAttempt::new();
        attempt.begin(amount()).unwrap();
        assert!(attempt.begin(amount()).is_err());
    }

    #[test]
    fn abort_moves_straight_to_error() {
        let mut attempt = SwapAttempt::new();
        attempt.abort("wrong network").unwrap();
        let snap = attempt.snapshot();
        assert_eq!(snap.status, SwapStatus::Error);
        assert_eq!(snap.pending_amount, None);
        assert_eq!(snap.approval_tx_hash, None);
    }
}
