//! Chain endpoint configuration loaded from environment variables.

use debug_core::Address;

use crate::error::ConfigError;

/// Well-known local-development deployment addresses (the first two
/// contracts deployed by a fresh hardhat node).
const DEFAULT_BOUNTY_FACTORY: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const DEFAULT_REPORT_FACTORY: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

/// Where the deployed factory contracts live and which node to talk to.
///
/// All fields have defaults suitable for a local development node; in
/// production, override via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// JSON-RPC endpoint of the chain node (default: `http://localhost:8545`).
    pub rpc_url: String,
    /// Address of the deployed bounty factory contract.
    pub bounty_factory: Address,
    /// Address of the deployed report factory contract.
    pub report_factory: Address,
}

impl ChainConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `DEBUG_RPC_URL`        | `http://localhost:8545`       |
    /// | `DEBUG_BOUNTY_FACTORY` | local hardhat deploy address  |
    /// | `DEBUG_REPORT_FACTORY` | local hardhat deploy address  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("DEBUG_RPC_URL").ok(),
            std::env::var("DEBUG_BOUNTY_FACTORY").ok(),
            std::env::var("DEBUG_REPORT_FACTORY").ok(),
        )
    }

    fn from_vars(
        rpc_url: Option<String>,
        bounty_factory: Option<String>,
        report_factory: Option<String>,
    ) -> Result<Self, ConfigError> {
        let rpc_url = rpc_url.unwrap_or_else(|| "http://localhost:8545".into());

        let bounty_factory = bounty_factory
            .as_deref()
            .unwrap_or(DEFAULT_BOUNTY_FACTORY)
            .parse()
            .map_err(|source| ConfigError::InvalidAddress {
                var: "DEBUG_BOUNTY_FACTORY",
                source,
            })?;

        let report_factory = report_factory
            .as_deref()
            .unwrap_or(DEFAULT_REPORT_FACTORY)
            .parse()
            .map_err(|source| ConfigError::InvalidAddress {
                var: "DEBUG_REPORT_FACTORY",
                source,
            })?;

        Ok(Self {
            rpc_url,
            bounty_factory,
            report_factory,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_apply_when_vars_are_unset() {
        let config = ChainConfig::from_vars(None, None, None).unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(
            config.bounty_factory,
            DEFAULT_BOUNTY_FACTORY.parse().unwrap()
        );
        assert_eq!(
            config.report_factory,
            DEFAULT_REPORT_FACTORY.parse().unwrap()
        );
    }

    #[test]
    fn explicit_vars_override_defaults() {
        let config = ChainConfig::from_vars(
            Some("https://rpc.example.net".into()),
            Some("0x1000000000000000000000000000000000000001".into()),
            None,
        )
        .unwrap();
        assert_eq!(config.rpc_url, "https://rpc.example.net");
        assert_eq!(
            config.bounty_factory.to_string(),
            "0x1000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn malformed_factory_address_is_rejected() {
        let result = ChainConfig::from_vars(None, Some("not-an-address".into()), None);
        assert_matches!(
            result,
            Err(ConfigError::InvalidAddress {
                var: "DEBUG_BOUNTY_FACTORY",
                ..
            })
        );
    }
}
