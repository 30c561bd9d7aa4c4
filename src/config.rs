//! Configuration module for Image Guard.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::security::{DigestAlgorithm, VerificationConfig, DEFAULT_SEPARATOR};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Request signing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// HMAC hash function name.
    pub hmac_algorithm: String,
    /// Shared signing key.
    pub hmac_key: Option<String>,
    /// Reject requests that carry no digest.
    pub hmac_compulsory: bool,
    /// Single character between digest and payload.
    pub hmac_separator: String,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy HMAC_ALGORITHM / HMAC_KEY / HMAC_COMPULSORY variables
    /// 2. Environment variables (IMAGE_GUARD__*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("IMAGE_GUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Self = config.try_deserialize()?;
        config
            .security
            .apply_legacy_env(|name| std::env::var(name).ok());
        Ok(config)
    }
}

impl SecurityConfig {
    /// Overlay the bare `HMAC_*` variables of older image handler deployments.
    ///
    /// `HMAC_COMPULSORY` only enables the policy when it is exactly `Yes`.
    pub fn apply_legacy_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(algorithm) = lookup("HMAC_ALGORITHM").filter(|v| !v.is_empty()) {
            self.hmac_algorithm = algorithm;
        }
        if let Some(key) = lookup("HMAC_KEY") {
            self.hmac_key = Some(key).filter(|k| !k.is_empty());
        }
        if let Some(compulsory) = lookup("HMAC_COMPULSORY") {
            self.hmac_compulsory = compulsory == "Yes";
        }
    }

    /// Resolve into the settings the verifier consumes.
    pub fn verification(&self) -> Result<VerificationConfig, ConfigError> {
        let algorithm = self
            .hmac_algorithm
            .parse::<DigestAlgorithm>()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut chars = self.hmac_separator.chars();
        let separator = match (chars.next(), chars.next()) {
            (Some(c), None) if c != '/' && !c.is_ascii_hexdigit() => c,
            _ => {
                return Err(ConfigError::Message(format!(
                    "hmac_separator must be one character outside [0-9a-fA-F/], got {:?}",
                    self.hmac_separator
                )))
            }
        };

        Ok(VerificationConfig {
            algorithm,
            shared_key: self.hmac_key.clone().filter(|k| !k.is_empty()),
            digest_required: self.hmac_compulsory,
            separator,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            hmac_algorithm: DigestAlgorithm::default().to_string(),
            hmac_key: None,
            hmac_compulsory: false,
            hmac_separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
