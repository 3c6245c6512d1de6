//! Transaction confirmation port.

use async_trait::async_trait;

use crate::domain::id::TxHash;
use crate::domain::receipt::Confirmation;
use crate::error::Result;

/// Reports whether a broadcast transaction has been mined.
///
/// One call is one observation; polling cadence belongs to the caller.
#[async_trait]
pub trait ReceiptWatcher: Send + Sync {
    /// Current confirmation state of `tx_hash`.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt source cannot be queried.
    async fn confirmation(&self, tx_hash: TxHash) -> Result<Confirmation>;
}
