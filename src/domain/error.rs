//! Domain validation errors.
//!
//! Returned when user input or a requested state change violates a domain
//! rule. None of these errors touch the chain.
//!
//! # Examples
//!
//! ```
//! use roflswap::domain::amount::TokenAmount;
//! use roflswap::domain::error::DomainError;
//!
//! let result = TokenAmount::parse("0", 2);
//! assert!(matches!(result, Err(DomainError::InvalidAmount { .. })));
//! ```

use thiserror::Error;

use super::attempt::SwapStatus;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The entered amount is not a strictly positive decimal.
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The raw input as entered.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A swap attempt was asked to move along an edge the state machine lacks.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        /// Status at the time of the request.
        from: SwapStatus,
        /// Name of the rejected transition.
        action: &'static str,
    },

    /// Token symbol did not name WATER or FIRE.
    #[error("unknown token '{0}'")]
    UnknownToken(String),
}
