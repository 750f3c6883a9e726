//! Global configuration management
//!
//! Settings live in ~/.merkleseal/config.toml unless another path is given.

use crate::core::error::{Result, SealError};
use crate::crypto::validate_key_parameters;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "MERKLESEAL_CONFIG";

/// Global configuration for Merkleseal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Keypair generation parameters
    pub keys: KeyConfig,
    /// Logging configuration
    pub log: LogConfig,
    /// Output configuration
    pub output: OutputConfig,
}

/// Parameters handed to the provider when generating keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// RSA modulus size in bits
    pub bits: usize,
    /// RSA public exponent
    pub public_exponent: u64,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            bits: 2048,
            public_exponent: 65537,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Print proofs as JSON by default
    pub json: bool,
}

/// Configuration value types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Number(i64),
    Boolean(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{s}"),
            ConfigValue::Number(n) => write!(f, "{n}"),
            ConfigValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Configuration key for getting and setting values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    KeysBits,
    KeysPublicExponent,
    LogFilter,
    OutputJson,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::KeysBits,
        ConfigKey::KeysPublicExponent,
        ConfigKey::LogFilter,
        ConfigKey::OutputJson,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "keys.bits" => Some(ConfigKey::KeysBits),
            "keys.public_exponent" => Some(ConfigKey::KeysPublicExponent),
            "log.filter" => Some(ConfigKey::LogFilter),
            "output.json" => Some(ConfigKey::OutputJson),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::KeysBits => "keys.bits",
            ConfigKey::KeysPublicExponent => "keys.public_exponent",
            ConfigKey::LogFilter => "log.filter",
            ConfigKey::OutputJson => "output.json",
        }
    }
}

impl GlobalConfig {
    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: GlobalConfig = toml::from_str(&content).map_err(|e| {
            SealError::configuration(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SealError::configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the configuration file: `$MERKLESEAL_CONFIG` or ~/.merkleseal/config.toml
    pub fn get_config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let user_dirs = UserDirs::new().ok_or(SealError::HomeDirectoryNotFound)?;
        Ok(user_dirs.home_dir().join(".merkleseal").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        validate_key_parameters(self.keys.bits, self.keys.public_exponent)
            .map_err(|e| SealError::configuration(e.to_string()))
    }

    /// Get a configuration value
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::KeysBits => ConfigValue::Number(self.keys.bits as i64),
            ConfigKey::KeysPublicExponent => {
                ConfigValue::Number(self.keys.public_exponent as i64)
            }
            ConfigKey::LogFilter => ConfigValue::String(self.log.filter.clone()),
            ConfigKey::OutputJson => ConfigValue::Boolean(self.output.json),
        }
    }

    /// Set a configuration value from its text form
    ///
    /// Leaves the configuration untouched when the result would be invalid.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            ConfigKey::KeysBits => updated.keys.bits = parse_value(key, value)?,
            ConfigKey::KeysPublicExponent => {
                updated.keys.public_exponent = parse_value(key, value)?
            }
            ConfigKey::LogFilter => updated.log.filter = value.to_string(),
            ConfigKey::OutputJson => updated.output.json = parse_value(key, value)?,
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// All key/value pairs, in a stable order
    pub fn list(&self) -> Vec<(ConfigKey, ConfigValue)> {
        ConfigKey::ALL.iter().map(|key| (*key, self.get(*key))).collect()
    }
}

fn parse_value<T: std::str::FromStr>(key: ConfigKey, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        SealError::configuration(format!("Invalid value {:?} for {}", value, key.as_str()))
    })
}
