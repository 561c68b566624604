//! Configuration system for StratMatrix.
//!
//! Load layout configuration from TOML files to control jitter, label
//! placement and chart styling without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use stratmatrix_config::MatrixConfig;
//!
//! let config = MatrixConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [jitter]
//!     spread = 0.05
//!
//!     [labels]
//!     wrap_width = 20
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.jitter.spread, 0.05);
//! assert_eq!(config.labels.cell_size, 0.5);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use stratmatrix_config::MatrixConfig;
//!
//! let config = MatrixConfig::load("stratmatrix.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default half-width of the jitter interval, in axis units.
pub const DEFAULT_SPREAD: f64 = 0.1;

/// Largest accepted jitter spread: one full rating step.
pub const MAX_SPREAD: f64 = 1.0;

/// Names longer than this many characters are wrapped.
pub const DEFAULT_WRAP_WIDTH: usize = 15;

/// Default side length of a label placement grid cell, in axis units.
pub const DEFAULT_CELL_SIZE: f64 = 0.5;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main layout configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatrixConfig {
    /// Random seed for reproducible renders.
    ///
    /// When unset every render draws fresh jitter.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Jitter configuration.
    #[serde(default)]
    pub jitter: JitterConfig,

    /// Label wrapping and placement configuration.
    #[serde(default)]
    pub labels: LabelConfig,

    /// Chart styling handed to the renderer.
    #[serde(default)]
    pub chart: ChartConfig,
}

impl MatrixConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or holds
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the jitter spread.
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.jitter.spread = spread;
        self
    }

    /// Sets the grid cell size used for label placement.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.labels.cell_size = cell_size;
        self
    }

    /// Sets the label wrap width in characters.
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.labels.wrap_width = wrap_width;
        self
    }

    /// Checks every value is within its allowed range.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratmatrix_config::MatrixConfig;
    ///
    /// assert!(MatrixConfig::default().validate().is_ok());
    /// assert!(MatrixConfig::default().with_cell_size(0.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jitter.validate()?;
        self.labels.validate()?;
        self.chart.validate()
    }
}

/// Jitter configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct JitterConfig {
    /// Half-width of the uniform offset applied to each axis.
    #[serde(default = "default_spread")]
    pub spread: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            spread: default_spread(),
        }
    }
}

impl JitterConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_SPREAD).contains(&self.spread) {
            return Err(ConfigError::Invalid(format!(
                "jitter.spread must be between 0 and {MAX_SPREAD}, got {}",
                self.spread
            )));
        }
        Ok(())
    }
}

/// Label wrapping and placement configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LabelConfig {
    /// Names longer than this are re-flowed onto several lines.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Side length of the square grid cells used to detect crowding.
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            cell_size: default_cell_size(),
        }
    }
}

impl LabelConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.wrap_width == 0 {
            return Err(ConfigError::Invalid(
                "labels.wrap_width must be at least 1".to_string(),
            ));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "labels.cell_size must be a finite positive number, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}

/// Chart styling configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ChartConfig {
    /// Chart height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Marker diameter for the highest business value.
    #[serde(default = "default_size_max")]
    pub size_max: f64,

    /// Marker color for Low business value (`#RRGGBB`).
    #[serde(default = "default_color_low")]
    pub color_low: String,

    /// Marker color for High business value (`#RRGGBB`).
    #[serde(default = "default_color_high")]
    pub color_high: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            size_max: default_size_max(),
            color_low: default_color_low(),
            color_high: default_color_high(),
        }
    }
}

impl ChartConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.size_max.is_finite() || self.size_max <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "chart.size_max must be a finite positive number, got {}",
                self.size_max
            )));
        }
        for (key, color) in [("color_low", &self.color_low), ("color_high", &self.color_high)] {
            if parse_hex_color(color).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "chart.{key} must be a #RRGGBB color, got {color:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Parses a `#RRGGBB` color into its channels.
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn default_spread() -> f64 {
    DEFAULT_SPREAD
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_cell_size() -> f64 {
    DEFAULT_CELL_SIZE
}

fn default_height() -> u32 {
    900
}

fn default_size_max() -> f64 {
    60.0
}

fn default_color_low() -> String {
    "#AEDFF7".to_string()
}

fn default_color_high() -> String {
    "#007BFF".to_string()
}
