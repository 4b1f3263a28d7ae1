//! User configuration.
//!
//! Read from a JSON file; every field is optional and falls back to the
//! built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{KEYPAD_PRECISION, RECOGNITION_PRECISION};
use crate::recognition::DEFAULT_CONTRAST;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keypad: KeypadConfig,
    pub recognition: RecognitionConfig,
    pub preprocess: PreprocessConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Let a parenthesis be the first character of an empty buffer.
    pub allow_leading_paren: bool,
    /// Fractional digits shown for keypad results.
    pub precision: usize,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            allow_leading_paren: false,
            precision: KEYPAD_PRECISION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Fractional digits shown for recognized-equation results.
    pub precision: usize,
    /// Strip everything outside the arithmetic alphabet before validating.
    pub sanitize: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            precision: RECOGNITION_PRECISION,
            sanitize: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    pub contrast: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
        }
    }
}

/// `<config dir>/inkcalc/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inkcalc").join("config.json"))
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file there just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config =
            Config::from_json(r#"{"keypad": {"allow_leading_paren": true}}"#).unwrap();
        assert!(config.keypad.allow_leading_paren);
        assert_eq!(config.keypad.precision, KEYPAD_PRECISION);
        assert_eq!(config.recognition, RecognitionConfig::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Config::from_json("{keypad").is_err());
        assert!(Config::from_json(r#"{"keypad": {"precision": "six"}}"#).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/inkcalc.json"))).is_err());
    }
}
