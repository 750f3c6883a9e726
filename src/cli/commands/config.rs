//! Configuration command implementation

use crate::config::{ConfigKey, GlobalConfig};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the config command
pub fn execute(
    config_path: &Path,
    key: Option<String>,
    value: Option<String>,
    list: bool,
    show_origin: bool,
) -> Result<()> {
    let mut config = GlobalConfig::load_from(config_path)?;

    if show_origin {
        println!(
            "{}: {}",
            "Configuration file".bold(),
            config_path.display().to_string().cyan()
        );
        if config_path.exists() {
            println!("{}: {}", "Status".bold(), "exists".green());
        } else {
            println!("{}: {}", "Status".bold(), "not created yet".yellow());
        }
        return Ok(());
    }

    if list {
        for (key, value) in config.list() {
            println!("{} = {}", key.as_str().bold(), value.to_string().cyan());
        }
        return Ok(());
    }

    let Some(key_str) = key else {
        println!("{}", "Usage:".bold());
        println!("  {} Get value", "merkleseal config <key>".cyan());
        println!("  {} Set value", "merkleseal config <key> <value>".cyan());
        println!("  {} List all", "merkleseal config --list".cyan());
        println!();
        println!("{}", "Keys:".bold());
        for key in ConfigKey::ALL {
            println!("  {}", key.as_str().green());
        }
        return Ok(());
    };

    let config_key = ConfigKey::parse(&key_str)
        .ok_or_else(|| anyhow::anyhow!("Invalid configuration key: {}", key_str))?;

    match value {
        Some(value_str) => {
            config.set(config_key, &value_str)?;
            config.save_to(config_path)?;
            println!("{} {} = {}", "✓".green(), key_str.bold(), value_str.cyan());
        }
        None => println!("{}", config.get(config_key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        execute(&path, Some("keys.bits".into()), Some("4096".into()), false, false).unwrap();
        assert_eq!(GlobalConfig::load_from(&path).unwrap().keys.bits, 4096);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        assert!(execute(&path, Some("user.name".into()), None, false, false).is_err());
    }
}
