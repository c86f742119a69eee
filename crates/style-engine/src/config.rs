//! Engine tuning knobs.
//!
//! The defaults reproduce the house style checker: a paragraph whose
//! alphabetic tokens are at least 60% uppercase is a "shouting" paragraph,
//! and words rarer than one in a million are unrecognized.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared_types::{Rgb, Severity};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// One in a million
pub const DEFAULT_RARITY_THRESHOLD: f64 = 1e-6;

/// Thresholds for the all-caps heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsConfig {
    /// Uppercase token share at which the whole paragraph is flagged
    pub sentence_ratio: f64,
    /// Shortest alphabetic token counted by the heuristic
    pub min_token_len: usize,
    /// Shortest uppercase token flagged on its own
    pub solo_min_len: usize,
}

impl Default for CapsConfig {
    fn default() -> Self {
        Self {
            sentence_ratio: 0.6,
            min_token_len: 2,
            solo_min_len: 3,
        }
    }
}

/// Font color applied per severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub error: Rgb,
    pub warning: Rgb,
    pub advice: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            error: Rgb::RED,
            warning: Rgb::ORANGE,
            advice: Rgb::YELLOW,
        }
    }
}

impl Palette {
    pub fn color_for(&self, severity: Severity) -> Rgb {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Advice => self.advice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub caps: CapsConfig,
    /// Corpus frequency below which a word is unrecognized
    pub rarity_threshold: f64,
    pub palette: Palette,
    /// Words never reported as unrecognized (case-insensitive)
    pub allow_words: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            caps: CapsConfig::default(),
            rarity_threshold: DEFAULT_RARITY_THRESHOLD,
            palette: Palette::default(),
            allow_words: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratio = self.caps.sentence_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "caps.sentence_ratio must be in (0, 1], got {}",
                ratio
            )));
        }
        if self.caps.min_token_len == 0 || self.caps.solo_min_len == 0 {
            return Err(ConfigError::Invalid(
                "caps token lengths must be at least 1".to_string(),
            ));
        }
        if !(self.rarity_threshold >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "rarity_threshold must be non-negative, got {}",
                self.rarity_threshold
            )));
        }
        Ok(())
    }
}
