//! Configuration management for ChainLedger

use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_genesis_payload")]
    pub genesis_payload: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    /// How many hex characters of each digest to show in table views.
    /// Full digests are always available via the JSON dump.
    #[serde(default = "default_hash_preview")]
    pub hash_preview: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            genesis_payload: default_genesis_payload(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            hash_preview: default_hash_preview(),
        }
    }
}

fn default_genesis_payload() -> String {
    crate::ledger::GENESIS_PAYLOAD.to_string()
}

fn default_color() -> bool {
    true
}

fn default_hash_preview() -> usize {
    16
}

/// Parse a config from TOML text, applying field defaults.
pub fn parse_config(config_str: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let config: Config = if config_str.is_empty() {
        Config {
            ledger: LedgerConfig::default(),
            display: DisplayConfig::default(),
        }
    } else {
        toml::from_str(config_str)?
    };

    // Validate critical values
    if config.ledger.genesis_payload.is_empty() {
        return Err("ledger.genesis_payload must not be empty in config.toml".into());
    }
    if config.display.hash_preview == 0 {
        return Err("display.hash_preview must be at least 1 in config.toml".into());
    }

    Ok(config)
}

/// Load `config.toml` from the working directory, falling back to sane
/// defaults when the file is absent.
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = fs::read_to_string("config.toml").unwrap_or_default();
    parse_config(&config_str)
}
