//! Attestor configuration

use eyre::{eyre, Result};
use std::env;
use std::fmt;

/// Default bech32 prefix for recipient addresses
pub const DEFAULT_ADDRESS_PREFIX: &str = "terra";

/// Attestor configuration
#[derive(Clone)]
pub struct Config {
    /// Validator secp256k1 private key (hex)
    pub validator_private_key: String,
    /// Bech32 prefix expected on recipient addresses
    pub address_prefix: String,
    /// Source bridge contract whose swaps are attested
    pub bridge_contract: String,
}

impl Config {
    /// Load configuration from environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded .env from {:?}", path);
        }

        Self::from_env()
    }

    /// Build from the current process environment without reading `.env`.
    pub fn from_env() -> Result<Self> {
        let validator_private_key = env::var("VALIDATOR_PRIVATE_KEY")
            .map_err(|_| eyre!("VALIDATOR_PRIVATE_KEY required"))?;
        if validator_private_key.trim().is_empty() {
            return Err(eyre!("VALIDATOR_PRIVATE_KEY must not be empty"));
        }

        let bridge_contract = env::var("BRIDGE_CONTRACT")
            .map_err(|_| eyre!("BRIDGE_CONTRACT required"))?;
        if bridge_contract.trim().is_empty() {
            return Err(eyre!("BRIDGE_CONTRACT must not be empty"));
        }

        Ok(Self {
            validator_private_key,
            address_prefix: env::var("ADDRESS_PREFIX")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_ADDRESS_PREFIX.to_string()),
            bridge_contract,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("validator_private_key", &"<redacted>")
            .field("address_prefix", &self.address_prefix)
            .field("bridge_contract", &self.bridge_contract)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var("VALIDATOR_PRIVATE_KEY");
        env::remove_var("ADDRESS_PREFIX");
        env::remove_var("BRIDGE_CONTRACT");
    }

    #[test]
    #[serial]
    fn test_missing_key() {
        clear();
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("VALIDATOR_PRIVATE_KEY"));
    }

    #[test]
    #[serial]
    fn test_missing_bridge_contract() {
        clear();
        env::set_var("VALIDATOR_PRIVATE_KEY", "0x01");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("BRIDGE_CONTRACT"));

        env::set_var("BRIDGE_CONTRACT", "  ");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("BRIDGE_CONTRACT"));
        clear();
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        env::set_var("VALIDATOR_PRIVATE_KEY", "0x01");
        env::set_var("BRIDGE_CONTRACT", "terra1bridge");
        let config = Config::from_env().unwrap();
        assert_eq!(config.address_prefix, "terra");
        assert_eq!(config.bridge_contract, "terra1bridge");
        clear();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear();
        env::set_var("VALIDATOR_PRIVATE_KEY", "0x01");
        env::set_var("ADDRESS_PREFIX", "cosmos");
        env::set_var("BRIDGE_CONTRACT", "cosmos1bridge");
        let config = Config::from_env().unwrap();
        assert_eq!(config.address_prefix, "cosmos");
        assert_eq!(config.bridge_contract, "cosmos1bridge");
        clear();
    }

    #[test]
    #[serial]
    fn test_debug_redacts_key() {
        clear();
        env::set_var("VALIDATOR_PRIVATE_KEY", "deadbeef");
        env::set_var("BRIDGE_CONTRACT", "terra1bridge");
        let config = Config::from_env().unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("deadbeef"));
        assert!(rendered.contains("<redacted>"));
        clear();
    }
}
