//! Infrastructure configuration modules.

pub mod confirmation;
pub mod contracts;
pub mod logging;
pub mod network;
pub mod order;
pub mod settings;
pub mod wallet;
