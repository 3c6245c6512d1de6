//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the wallet, the two contracts, and the receipt
//! source the swap flow depends on.

pub mod contract;
pub mod receipt;
pub mod wallet;
