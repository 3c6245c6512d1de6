//! Outbound adapters (driven side).

#[cfg(feature = "sapphire")]
pub mod sapphire;
