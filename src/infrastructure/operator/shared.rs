//! Shared helper routines for operator implementations.

use alloy_primitives::Address;

#[cfg(not(feature = "sapphire"))]
use crate::error::{ConfigError, Error};

pub(super) fn account_url(explorer_url: &str, address: Address) -> String {
    format!("{}/address/{address}", explorer_url.trim_end_matches('/'))
}

#[cfg(not(feature = "sapphire"))]
pub(super) fn sapphire_disabled(use_case: &str) -> Error {
    ConfigError::InvalidValue {
        field: "features",
        reason: format!("{use_case} requires the sapphire feature"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_url_strips_trailing_slash() {
        let url = account_url("https://explorer.oasis.io/testnet/sapphire/", Address::ZERO);
        assert_eq!(
            url,
            format!("https://explorer.oasis.io/testnet/sapphire/address/{}", Address::ZERO)
        );
    }
}
