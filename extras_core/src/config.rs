//! Tunables for the script extras, loaded from a TOML file.
//!
//! Every field has a default matching the values the features shipped with,
//! so a missing file or a partial one behaves sensibly.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Inspect overlay tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Database id of the looping animation shown over the player.
    pub animation_id: u32,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self { animation_id: 120 }
    }
}

/// Audio ducking tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Percentage removed from the BGM/BGS master volumes indoors.
    pub duck_percent: i32,
    /// Id of the game switch that suppresses the indoor adjustment.
    pub duck_disable_switch: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            duck_percent: 20,
            duck_disable_switch: 14,
        }
    }
}

/// Top-level configuration for the extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtrasConfig {
    pub inspect: InspectConfig,
    pub audio: AudioConfig,
}

/// Failures while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl ExtrasConfig {
    /// Parse a configuration document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_shipped_values() {
        let config = ExtrasConfig::default();
        assert_eq!(config.inspect.animation_id, 120);
        assert_eq!(config.audio.duck_percent, 20);
        assert_eq!(config.audio.duck_disable_switch, 14);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = ExtrasConfig::from_toml(
            r#"
            [inspect]
            animation_id = 97
            "#,
        )
        .unwrap();
        assert_eq!(config.inspect.animation_id, 97);
        assert_eq!(config.audio.duck_percent, 20);
    }

    #[test]
    fn test_full_document() {
        let config = ExtrasConfig::from_toml(
            r#"
            [inspect]
            animation_id = 5

            [audio]
            duck_percent = 35
            duck_disable_switch = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.inspect.animation_id, 5);
        assert_eq!(config.audio.duck_percent, 35);
        assert_eq!(config.audio.duck_disable_switch, 2);
    }

    #[test]
    fn test_malformed_document_errors() {
        assert!(ExtrasConfig::from_toml("inspect = ]").is_err());
    }
}
