//! Unified operator capability surface for inbound adapters.

use super::config::ConfigurationOperator;
use super::network::NetworkOperator;
use super::swap::SwapOperator;
use super::wallet::WalletOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort:
    ConfigurationOperator + NetworkOperator + SwapOperator + WalletOperator
{
}

impl<T> OperatorPort for T where
    T: ConfigurationOperator + NetworkOperator + SwapOperator + WalletOperator
{
}
