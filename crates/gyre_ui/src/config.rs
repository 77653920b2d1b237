//! Ring chart configuration.
//!
//! Loaded once at startup, validated once, then owned immutably by the
//! widget. There is no hot-reload path: a config change means a new
//! widget.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use gyre_core::{Easing, DEFAULT_SWEEP_SECS};

use crate::fallback::FallbackColors;
use crate::style::Palette;

/// Errors from loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML payload was rejected.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field value is out of range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Everything the ring chart can be told at startup.
///
/// All fields have defaults; an empty TOML document is a valid config.
/// Unknown keys are rejected so a typo fails loudly instead of silently
/// falling back.
///
/// Fields are plain data; only the TOML path runs
/// [`validate`](Self::validate). Sizes and durations must be finite and
/// non-negative, `precision` in (0, 1]. Hand-built configs outside those
/// ranges still produce defined frames: negative strokes count as zero
/// width and a non-positive duration finishes in one tick.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Arc stroke width, in surface units.
    pub stroke_width: f32,
    /// Center label font size, in surface units.
    pub font_size: f32,
    /// Sweep duration, in seconds.
    pub sweep_duration: f32,
    /// Progress curve of the sweep.
    pub easing: Easing,
    /// Unfilled remainder added to the series total.
    pub unfilled: f32,
    /// Whether the unfilled remainder is drawn as a trailing slice.
    pub show_unfilled: bool,
    /// Progress threshold past which the seam-closing arc appears.
    ///
    /// The seam arc hides the hairline gap where the last slice meets
    /// the first near the end of the sweep.
    pub precision: f32,
    /// Sweep of the seam-closing arc, in degrees.
    pub minimal_arc: f32,
    /// Seed for synthesized fallback slice colors.
    pub fallback_seed: u64,
    /// Slice, divider and label colors.
    pub palette: Palette,
}

impl RingConfig {
    /// Default arc stroke width.
    pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;
    /// Default center label font size.
    pub const DEFAULT_FONT_SIZE: f32 = 40.0;
    /// Default seam threshold.
    pub const DEFAULT_PRECISION: f32 = 0.1;
    /// Default seam arc sweep, in degrees.
    pub const DEFAULT_MINIMAL_ARC: f32 = 0.0001;

    /// Parses and validates a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Checks every field against its legal range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ConfigError::Invalid {
                field: "stroke_width",
                reason: "must be finite and non-negative",
            });
        }
        if !self.font_size.is_finite() || self.font_size < 0.0 {
            return Err(ConfigError::Invalid {
                field: "font_size",
                reason: "must be finite and non-negative",
            });
        }
        if !self.sweep_duration.is_finite() || self.sweep_duration < 0.0 {
            return Err(ConfigError::Invalid {
                field: "sweep_duration",
                reason: "must be finite and non-negative",
            });
        }
        if !self.unfilled.is_finite() || self.unfilled < 0.0 {
            return Err(ConfigError::Invalid {
                field: "unfilled",
                reason: "must be finite and non-negative",
            });
        }
        if !self.precision.is_finite() || self.precision <= 0.0 || self.precision > 1.0 {
            return Err(ConfigError::Invalid {
                field: "precision",
                reason: "must be in (0, 1]",
            });
        }
        if !self.minimal_arc.is_finite() || self.minimal_arc < 0.0 {
            return Err(ConfigError::Invalid {
                field: "minimal_arc",
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            font_size: Self::DEFAULT_FONT_SIZE,
            sweep_duration: DEFAULT_SWEEP_SECS,
            easing: Easing::Linear,
            unfilled: 0.0,
            show_unfilled: false,
            precision: Self::DEFAULT_PRECISION,
            minimal_arc: Self::DEFAULT_MINIMAL_ARC,
            fallback_seed: FallbackColors::DEFAULT_SEED,
            palette: Palette::neon(),
        }
    }
}
