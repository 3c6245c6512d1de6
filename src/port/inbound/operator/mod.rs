//! Operator-facing inbound ports consumed by CLI adapters.
//!
//! Every use case takes the raw TOML configuration, so adapters never parse
//! configuration themselves.

pub mod config;
pub mod network;
pub mod port;
pub mod swap;
pub mod wallet;
