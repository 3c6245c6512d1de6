//! Inbound operator accessor for CLI handlers.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::port::OperatorPort;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
///
/// # Errors
///
/// Returns an error if `main` never called [`install`].
pub fn operator() -> Result<&'static dyn OperatorPort> {
    OPERATOR
        .get()
        .map(AsRef::as_ref)
        .ok_or_else(|| ConfigError::MissingField { field: "operator" }.into())
}

/// Load config TOML from disk for operator-facing use cases.
pub fn read_config_toml(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile(e).into())
}

/// Like [`read_config_toml`], but a missing file reads as empty so every
/// section takes its default.
pub fn read_config_toml_or_default(path: &Path) -> Result<String> {
    if path.exists() {
        read_config_toml(path)
    } else {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let toml = read_config_toml_or_default(&dir.path().join("absent.toml")).unwrap();
        assert!(toml.is_empty());
    }

    #[test]
    fn strict_read_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config_toml(&dir.path().join("absent.toml")).is_err());
    }
}
