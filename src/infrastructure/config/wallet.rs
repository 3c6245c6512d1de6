//! Signing key source.

use std::path::PathBuf;

use serde::Deserialize;

/// Where the signing key comes from.
///
/// `WALLET_PRIVATE_KEY` always wins; the keystore is only opened when it is
/// unset. The key itself never comes from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Encrypted JSON keystore. A leading `~/` is expanded.
    #[serde(default)]
    pub keystore_path: Option<String>,
    /// Endpoint the wallet connects through. Falls back to `[network] rpc_url`.
    #[serde(default)]
    pub rpc_url: Option<String>,
    /// Hex key filled in at load time.
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl WalletConfig {
    /// The keystore path with `~/` resolved against the home directory.
    #[must_use]
    pub fn keystore_file(&self) -> Option<PathBuf> {
        let raw = self.keystore_path.as_deref()?;
        match (raw.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => Some(home.join(rest)),
            _ => Some(PathBuf::from(raw)),
        }
    }

    /// The endpoint `connect` uses, given the target network's endpoint.
    #[must_use]
    pub fn endpoint<'a>(&'a self, network_rpc_url: &'a str) -> &'a str {
        self.rpc_url.as_deref().unwrap_or(network_rpc_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystore_file_expands_home() {
        let config = WalletConfig {
            keystore_path: Some("~/.roflswap/keystores/default.json".into()),
            ..WalletConfig::default()
        };
        let path = config.keystore_file().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join(".roflswap/keystores/default.json"));
        }
    }

    #[test]
    fn keystore_file_keeps_absolute_paths() {
        let config = WalletConfig {
            keystore_path: Some("/etc/roflswap/key.json".into()),
            ..WalletConfig::default()
        };
        assert_eq!(
            config.keystore_file(),
            Some(PathBuf::from("/etc/roflswap/key.json"))
        );
    }

    #[test]
    fn no_keystore_configured() {
        assert!(WalletConfig::default().keystore_file().is_none());
    }

    #[test]
    fn endpoint_falls_back_to_network() {
        let config = WalletConfig::default();
        assert_eq!(
            config.endpoint("https://testnet.sapphire.oasis.io"),
            "https://testnet.sapphire.oasis.io"
        );
    }

    #[test]
    fn endpoint_prefers_own_rpc() {
        let config = WalletConfig {
            rpc_url: Some("http://localhost:8545".into()),
            ..WalletConfig::default()
        };
        assert_eq!(
            config.endpoint("https://testnet.sapphire.oasis.io"),
            "http://localhost:8545"
        );
    }
}
