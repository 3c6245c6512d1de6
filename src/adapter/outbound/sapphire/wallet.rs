//! Local-key wallet.
//!
//! Signs with a private key held in memory. A session is the RPC endpoint the
//! wallet is currently pointed at together with the chain id that endpoint
//! reported; switching networks means re-pointing at another endpoint and
//! checking it answers with the expected id.

use std::str::FromStr;

use alloy_primitives::Address;
use alloy_provider::network::EthereumWallet;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info};
use url::Url;

use crate::domain::network::ChainMetadata;
use crate::error::{ConfigError, Error, Result, SwapError};
use crate::port::outbound::wallet::WalletConnector;

#[derive(Debug, Clone)]
struct Session {
    chain_id: u64,
    rpc_url: Url,
}

/// [`WalletConnector`] backed by a [`PrivateKeySigner`].
pub struct LocalWallet {
    signer: PrivateKeySigner,
    /// Endpoint used by `connect`.
    default_rpc: Url,
    session: RwLock<Option<Session>>,
}

impl LocalWallet {
    /// Create a wallet from a hex private key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or malformed, or `rpc_url` does
    /// not parse.
    pub fn new(private_key: &str, rpc_url: &str) -> Result<Self> {
        if private_key.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            }
            .into());
        }
        let signer = PrivateKeySigner::from_str(private_key.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "WALLET_PRIVATE_KEY",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            signer,
            default_rpc: Url::parse(rpc_url)?,
            session: RwLock::new(None),
        })
    }

    /// Endpoint `connect` opens a session on.
    #[must_use]
    pub fn default_rpc(&self) -> &Url {
        &self.default_rpc
    }

    /// Account derived from the key, whether or not a session is open.
    #[must_use]
    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }

    fn session(&self) -> std::result::Result<Session, SwapError> {
        self.session
            .read()
            .clone()
            .ok_or(SwapError::WalletNotConnected)
    }

    /// Provider that signs with this wallet on the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::WalletNotConnected`] without a session.
    pub fn signing_provider(&self) -> Result<impl Provider> {
        let session = self.session()?;
        let wallet = EthereumWallet::from(self.signer.clone());
        Ok(ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(session.rpc_url))
    }

    /// Read-only provider on the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::WalletNotConnected`] without a session.
    pub fn read_provider(&self) -> Result<impl Provider> {
        let session = self.session()?;
        Ok(ProviderBuilder::new().connect_http(session.rpc_url))
    }

    async fn probe(rpc_url: &Url) -> Result<u64> {
        let provider = ProviderBuilder::new().connect_http(rpc_url.clone());
        provider
            .get_chain_id()
            .await
            .map_err(|e| Error::Connection(format!("{rpc_url}: {e}")))
    }
}

#[async_trait]
impl WalletConnector for LocalWallet {
    async fn connect(&self) -> Result<Address> {
        let chain_id = Self::probe(&self.default_rpc).await?;
        debug!(rpc = %self.default_rpc, chain_id, "RPC endpoint reachable");
        *self.session.write() = Some(Session {
            chain_id,
            rpc_url: self.default_rpc.clone(),
        });
        Ok(self.signer.address())
    }

    async fn disconnect(&self) {
        self.session.write().take();
    }

    fn address(&self) -> Option<Address> {
        self.session
            .read()
            .as_ref()
            .map(|_| self.signer.address())
    }

    fn chain_id(&self) -> Option<u64> {
        self.session.read().as_ref().map(|s| s.chain_id)
    }

    async fn switch_network(&self, chain_id: u64, metadata: &ChainMetadata) -> Result<()> {
        self.session()?;
        let rpc_url = Url::parse(&metadata.rpc_url)?;
        let reported = Self::probe(&rpc_url).await?;
        if reported != chain_id {
            return Err(Error::Connection(format!(
                "{rpc_url} reports chain {reported}, expected {chain_id}"
            )));
        }

        info!(chain_id, network = %metadata.name, rpc = %rpc_url, "Switched network");
        *self.session.write() = Some(Session { chain_id, rpc_url });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known anvil test key #0.
    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn derives_address_from_key() {
        let wallet = LocalWallet::new(KEY, "http://localhost:8545").unwrap();
        assert_eq!(
            wallet.signer_address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn disconnected_until_connect() {
        let wallet = LocalWallet::new(KEY, "http://localhost:8545").unwrap();
        assert!(wallet.address().is_none());
        assert!(wallet.chain_id().is_none());
        assert!(wallet.signing_provider().is_err());
    }

    #[test]
    fn rejects_empty_key() {
        let err = LocalWallet::new("  ", "http://localhost:8545").err().unwrap();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn rejects_malformed_key() {
        assert!(LocalWallet::new("0xnothex", "http://localhost:8545").is_err());
    }

    #[tokio::test]
    async fn switch_requires_session() {
        let wallet = LocalWallet::new(KEY, "http://localhost:8545").unwrap();
        let err = wallet
            .switch_network(23295, &ChainMetadata::sapphire_testnet())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Swap(SwapError::WalletNotConnected)));
    }
}
