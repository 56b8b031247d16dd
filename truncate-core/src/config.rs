//! Truncation settings loaded from TOML.
//!
//! A config file names the target length, the omission marker and its
//! position. Missing keys fall back to defaults, so an empty file is valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::position::Position;
use crate::strategy::Strategy;
use crate::text::clamp_length;
use crate::truncator::DEFAULT_OMISSION;


/// Default target length, in characters.
pub const DEFAULT_LENGTH: i64 = 80;

/// Why a settings file could not be turned into a [`TruncateConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("cannot read truncation settings from '{path}': {source}")]
    IoError {
        /// File that was requested.
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has a mistyped key.
    #[error("invalid truncation settings in '{path}': {source}")]
    ParseError {
        /// File that was parsed.
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Truncation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TruncateConfig {
    /// Target length in characters. Negative values act as `0`.
    #[serde(default = "default_length")]
    pub length: i64,

    /// Omission marker. An empty marker cuts without marking.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Where the marker goes.
    #[serde(default)]
    pub position: Position,
}

fn default_length() -> i64 {
    DEFAULT_LENGTH
}

fn default_marker() -> String {
    DEFAULT_OMISSION.to_string()
}

impl TruncateConfig {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if `content` is not valid TOML or has
    /// mistyped keys.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read.
    /// Returns [`ConfigError::ParseError`] if the file is not valid TOML.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "config: loading truncation settings");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The length as a character budget, negative values clamped to `0`.
    pub fn target_length(&self) -> usize {
        clamp_length(self.length)
    }

    /// The strategy described by this configuration.
    ///
    /// The default marker maps onto the matching named strategy, an empty
    /// marker at the end is a plain cut.
    pub fn strategy(&self) -> Strategy {
        if self.marker.is_empty() && self.position == Position::End {
            Strategy::PlainCut
        } else if self.marker == DEFAULT_OMISSION {
            Strategy::ellipsis(self.position)
        } else {
            Strategy::custom(self.marker.clone(), self.position)
        }
    }

    /// Truncate `text` with these settings.
    pub fn truncate(&self, text: &str) -> String {
        self.strategy().apply(text, self.target_length())
    }
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            marker: default_marker(),
            position: Position::default(),
        }
    }
}
