//! Exchange-agnostic swap types.
//!
//! Nothing in this module talks to a wallet or a node. Adapters translate
//! their own types into these, and the swap orchestrator works purely in
//! terms of them.

pub mod amount;
pub mod attempt;
pub mod error;
pub mod event;
pub mod id;
pub mod intent;
pub mod network;
pub mod order;
pub mod quote;
pub mod receipt;
pub mod token;
