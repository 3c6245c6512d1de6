//! Oasis Sapphire adapters.
//!
//! One [`wallet::LocalWallet`] is shared by the token, exchange and receipt adapters
//! so that a network switch is seen by all of them.

pub mod abi;
pub mod exchange;
pub mod token;
pub mod wallet;
pub mod watcher;
