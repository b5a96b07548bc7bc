//! JSON configuration for which built-in networks a registry carries.
//!
//! ```json
//! {
//!   "unregister": ["american-express"],
//!   "register": ["discover", "jcb"]
//! }
//! ```
//!
//! A [`NetworkConfig`] is itself a [`RegistryOption`]: it unregisters first,
//! then registers in list order.
//!
//! # Feature
//!
//! Requires the `config` feature to be enabled.

use crate::error::RegistryError;
use crate::network::Network;
use crate::registry::{RegistryOption, SchemeRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Built-in networks to add to and remove from the default table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Networks appended after the defaults, in this order.
    pub register: Vec<Network>,
    /// Networks removed before anything is registered.
    pub unregister: Vec<Network>,
}

impl NetworkConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON, unknown fields or
    /// unknown network names.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise see
    /// [`NetworkConfig::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&json)
    }

    /// Builds a default registry with this configuration applied.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateScheme`] if a network is registered
    /// twice or is a default that was not unregistered.
    pub fn build(&self) -> Result<SchemeRegistry, RegistryError> {
        let mut registry = SchemeRegistry::new();
        self.apply(&mut registry)?;
        Ok(registry)
    }
}

impl RegistryOption for NetworkConfig {
    fn apply(&self, registry: &mut SchemeRegistry) -> Result<(), RegistryError> {
        for network in &self.unregister {
            registry.unregister(network.id().as_str());
        }
        for network in &self.register {
            registry.register(network.scheme())?;
        }
        Ok(())
    }
}

/// Errors loading a [`NetworkConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The JSON was malformed or named an unknown network.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read network config: {}", e),
            Self::Parse(e) => write!(f, "invalid network config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::SchemeId;

    #[test]
    fn test_parse_and_apply() {
        let config = NetworkConfig::from_json(
            r#"{ "unregister": ["american-express"], "register": ["discover", "jcb"] }"#,
        )
        .unwrap();
        assert_eq!(config.register, [Network::Discover, Network::Jcb]);

        let registry = config.build().unwrap();
        let ids: Vec<&str> = registry.ids().map(SchemeId::as_str).collect();
        assert_eq!(ids, ["visa", "mastercard", "discover", "jcb"]);
    }

    #[test]
    fn test_aliases() {
        let config = NetworkConfig::from_json(r#"{ "unregister": ["amex", "diners"] }"#).unwrap();
        assert_eq!(config.unregister, [Network::Amex, Network::Diners]);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = NetworkConfig::from_json("{}").unwrap();
        assert_eq!(config, NetworkConfig::default());
        assert_eq!(config.build().unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_network_rejected() {
        let err = NetworkConfig::from_json(r#"{ "register": ["mir"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid network config"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(NetworkConfig::from_json(r#"{ "add": ["jcb"] }"#).is_err());
    }

    #[test]
    fn test_registering_default_fails() {
        let config = NetworkConfig {
            register: vec![Network::Visa],
            unregister: vec![],
        };
        assert_eq!(
            config.build().unwrap_err(),
            RegistryError::DuplicateScheme { id: SchemeId::VISA }
        );
    }

    #[test]
    fn test_missing_file() {
        let err = NetworkConfig::from_file("/nonexistent/networks.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
