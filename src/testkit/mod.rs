//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`chain`]: mock wallet, token, exchange and receipt watcher sharing one
//!   call log.
//! - [`domain`]: fixed addresses, hashes, settings and receipt fixtures.
//! - [`harness`]: a [`SwapOrchestrator`](crate::application::swap::orchestrator::SwapOrchestrator)
//!   wired to the mocks.

pub mod chain;
pub mod domain;
pub mod harness;
