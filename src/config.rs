//! # Output Configuration
//!
//! Settings for how the `ems` binary renders a compiled score, loaded from
//! an optional YAML file:
//!
//! ```yaml
//! reference-hz: 440.0   # frequency of ratio 1.0 (A4)
//! format: json          # text | json | yaml
//! ```
//!
//! Missing keys take their defaults. Command-line flags override file values.

use crate::error::EmsError;
use crate::format::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default frequency of the reference pitch (A4), in Hz.
pub const DEFAULT_REFERENCE_HZ: f32 = 440.0;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    reference_hz: Option<f32>,
    format: Option<OutputFormat>,
}

/// Validated rendering settings
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub reference_hz: f32,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            reference_hz: DEFAULT_REFERENCE_HZ,
            format: OutputFormat::default(),
        }
    }
}

impl OutputConfig {
    /// Parse configuration from YAML text.
    ///
    /// # Example
    /// ```
    /// use ems::{OutputConfig, OutputFormat};
    ///
    /// let config = OutputConfig::from_yaml("format: yaml\n")?;
    /// assert_eq!(config.format, OutputFormat::Yaml);
    /// assert_eq!(config.reference_hz, 440.0);
    /// # Ok::<(), ems::EmsError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, EmsError> {
        // An empty document deserializes as unit, not as a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| EmsError::Config(e.to_string()))?;

        let config = Self {
            reference_hz: raw.reference_hz.unwrap_or(DEFAULT_REFERENCE_HZ),
            format: raw.format.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, EmsError> {
        let content = fs::read_to_string(path).map_err(|source| EmsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Check value ranges. Called after every override.
    pub fn validate(&self) -> Result<(), EmsError> {
        if !(self.reference_hz.is_finite() && self.reference_hz > 0.0) {
            return Err(EmsError::Config(format!(
                "reference-hz must be a positive number, got {}",
                self.reference_hz
            )));
        }
        Ok(())
    }
}
