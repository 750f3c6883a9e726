//! Configuration management for Merkleseal
//!
//! Key generation parameters, the default log filter and output
//! preferences, stored as TOML.

pub mod global_config;

// Re-export commonly used items
pub use global_config::{ConfigKey, ConfigValue, GlobalConfig, CONFIG_PATH_ENV};
