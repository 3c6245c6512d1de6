//! Path utilities for roflswap.
//!
//! Configuration lives under `~/.roflswap/`:
//! - `~/.roflswap/config.toml` - main configuration
//! - `~/.roflswap/keystores/` - encrypted wallet keystores

use std::path::PathBuf;

/// Returns the roflswap home directory (`~/.roflswap/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roflswap")
}

/// Returns the default config file path (`~/.roflswap/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_roflswap_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".roflswap"));
        assert_eq!(config.file_name().unwrap(), "config.toml");
    }
}
