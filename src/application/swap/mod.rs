//! Order submission.
//!
//! A swap is two dependent on-chain writes: an ERC-20 approval that lets the
//! exchange pull the sold token, then the order placement itself. The second
//! write is only issued after the first is observed confirmed.
//!
//! # Modules
//!
//! - [`orchestrator`]: owns the live attempt and sequences the two writes
//! - [`confirm`]: receipt polling
//! - [`settings`]: values the orchestrator needs from configuration

pub mod confirm;
pub mod orchestrator;
pub mod settings;
