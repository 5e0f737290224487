//! # Configuration
//!
//! TOML configuration, loaded once at startup.
//!
//! ```toml
//! [chunk]
//! dimensions = { x = 16, y = 16, z = 16 }
//! scale = 1.0
//!
//! [chunk.pattern]
//! kind = "noise"
//! seed = 0
//! frequency_divisor = 10.0
//! threshold = 0.16
//!
//! [telemetry]
//! log_level = "info"
//! ```
//!
//! Every table and key is optional; missing values take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use fe_core::{Dimensions, VoxelGrid};
use fe_procedural::Pattern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The contents are not valid configuration TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeConfig {
    /// Chunk shape and population.
    pub chunk: ChunkConfig,
    /// Logging.
    pub telemetry: TelemetryConfig,
}

impl FeConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`FeConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chunk.validate()
    }
}

/// Chunk shape, scale and occupancy pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChunkConfig {
    /// Cells per axis.
    pub dimensions: Dimensions,
    /// World-space size of one cell.
    pub scale: f64,
    /// How occupancy is generated.
    pub pattern: Pattern,
}

impl ChunkConfig {
    /// Default cells per axis.
    pub const DEFAULT_SIZE: u32 = 16;

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a scale outside the positive
    /// `f32` range, or a non-finite or non-positive noise frequency divisor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VoxelGrid::is_valid_scale(self.scale) {
            return Err(ConfigError::Invalid(format!(
                "chunk.scale must be finite and greater than zero as f32, got {}",
                self.scale
            )));
        }
        if let Pattern::Noise(fill) = &self.pattern {
            if !fill.frequency_divisor.is_finite() || fill.frequency_divisor <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "chunk.pattern.frequency_divisor must be finite and greater than zero, got {}",
                    fill.frequency_divisor
                )));
            }
            if !fill.threshold.is_finite() {
                return Err(ConfigError::Invalid(
                    "chunk.pattern.threshold must be finite".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::cube(Self::DEFAULT_SIZE),
            scale: 1.0,
            pattern: Pattern::default(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fe_procedural::NoiseFill;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(FeConfig::from_toml_str("").unwrap(), FeConfig::default());
    }

    #[test]
    fn test_defaults() {
        let config = FeConfig::default();
        assert_eq!(config.chunk.dimensions, Dimensions::cube(16));
        assert!((config.chunk.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.chunk.pattern, Pattern::Noise(NoiseFill::default()));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_full_document() {
        let config = FeConfig::from_toml_str(
            r#"
            [chunk]
            dimensions = { x = 4, y = 8, z = 2 }
            scale = 0.5

            [chunk.pattern]
            kind = "noise"
            seed = 42
            threshold = 0.3

            [telemetry]
            log_level = "fe=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.chunk.dimensions, Dimensions::new(4, 8, 2));
        assert!((config.chunk.scale - 0.5).abs() < f64::EPSILON);
        assert_eq!(
            config.chunk.pattern,
            Pattern::Noise(NoiseFill {
                seed: 42,
                frequency_divisor: 10.0,
                threshold: 0.3,
            })
        );
        assert_eq!(config.telemetry.log_level, "fe=debug");
    }

    #[test]
    fn test_simple_pattern() {
        let config = FeConfig::from_toml_str("[chunk.pattern]\nkind = \"solid\"").unwrap();
        assert_eq!(config.chunk.pattern, Pattern::Solid);
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let err = FeConfig::from_toml_str("[chunk]\nscale = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");

        let err = FeConfig::from_toml_str("[chunk]\nscale = -2.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn test_scale_outside_f32_range_rejected() {
        for scale in ["1e39", "1e-50"] {
            let err = FeConfig::from_toml_str(&format!("[chunk]\nscale = {scale}")).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
        }
    }

    #[test]
    fn test_invalid_divisor_rejected() {
        let err = FeConfig::from_toml_str(
            "[chunk.pattern]\nkind = \"noise\"\nfrequency_divisor = 0.0",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FeConfig::from_toml_str("[chunk]\nsize = 16").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn test_missing_file() {
        let err = FeConfig::from_file("/nonexistent/fe/chunk.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "{err}");
    }
}
