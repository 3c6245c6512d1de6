//! Operator implementations for inbound adapters.

pub mod config;
pub mod entry;
pub mod network;
pub mod swap;
pub mod wallet;

mod shared;
