//! Configuration file support for stepsketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/stepsketch/config.toml`. Settings include drawing defaults,
//! arrow appearance, the zoom range, text boxes, and export naming.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ArrowConfig, DrawingConfig, OutputConfig, TextConfig, ZoomConfig};

use crate::input::{ToolStyle, ZoomPanState};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_thickness = 3.0
/// default_tool = "arrow"
///
/// [arrow]
/// length = 20.0
/// angle_degrees = 30.0
///
/// [zoom]
/// initial = 1.0
/// min = 0.1
/// max = 10.0
/// step = 1.2
///
/// [text]
/// default_text = "Text"
/// font_size = 16.0
///
/// [output]
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// max_shapes = 0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke defaults and initial tool
    #[serde(default)]
    pub drawing: DrawingConfig,

    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Zoom range of the screenshot view
    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub text: TextConfig,

    /// Export naming and limits
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default when no nearest value exists) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `arrow.length`: 5.0 - 50.0
    /// - `arrow.angle_degrees`: 15.0 - 60.0
    /// - `text.font_size`: 8.0 - 72.0
    /// - `zoom.min`/`zoom.max`: finite and > 0, min <= max
    /// - `zoom.initial`: within min..=max
    /// - `zoom.step`: > 1.0
    fn validate_and_clamp(&mut self) {
        clamp_setting(
            "default_thickness",
            &mut self.drawing.default_thickness,
            1.0..=20.0,
            DrawingConfig::default().default_thickness,
        );
        clamp_setting(
            "arrow length",
            &mut self.arrow.length,
            5.0..=50.0,
            ArrowConfig::default().length,
        );
        clamp_setting(
            "arrow angle",
            &mut self.arrow.angle_degrees,
            15.0..=60.0,
            ArrowConfig::default().angle_degrees,
        );
        clamp_setting(
            "text font_size",
            &mut self.text.font_size,
            8.0..=72.0,
            TextConfig::default().font_size,
        );

        let defaults = ZoomConfig::default();
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.zoom.min) || !positive(self.zoom.max) || self.zoom.min > self.zoom.max {
            log::warn!(
                "Invalid zoom range {}-{}, falling back to {}-{}",
                self.zoom.min,
                self.zoom.max,
                defaults.min,
                defaults.max
            );
            self.zoom.min = defaults.min;
            self.zoom.max = defaults.max;
        }

        if !(self.zoom.min..=self.zoom.max).contains(&self.zoom.initial) {
            let clamped = if self.zoom.initial.is_nan() {
                defaults.initial.clamp(self.zoom.min, self.zoom.max)
            } else {
                self.zoom.initial.clamp(self.zoom.min, self.zoom.max)
            };
            log::warn!(
                "Invalid initial zoom {}, using {}",
                self.zoom.initial,
                clamped
            );
            self.zoom.initial = clamped;
        }

        if !(self.zoom.step.is_finite() && self.zoom.step > 1.0) {
            log::warn!(
                "Invalid zoom step {}, falling back to {}",
                self.zoom.step,
                defaults.step
            );
            self.zoom.step = defaults.step;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/stepsketch/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("stepsketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema of the config file, for editor integration.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Style applied to newly drawn shapes.
    pub fn tool_style(&self) -> ToolStyle {
        ToolStyle {
            color: self.drawing.default_color.to_color(),
            thickness: self.drawing.default_thickness,
            arrow_length: self.arrow.length,
            arrow_angle: self.arrow.angle_degrees,
            font_size: self.text.font_size,
            default_text: self.text.default_text.clone(),
        }
    }

    /// Pan/zoom state for a freshly opened view.
    pub fn zoom_state(&self) -> Result<ZoomPanState> {
        ZoomPanState::new(self.zoom.initial, self.zoom.min, self.zoom.max)
            .context("Invalid zoom configuration")
    }
}

/// Clamps `value` into `range`, or resets it to `default` when it is NaN.
fn clamp_setting(name: &str, value: &mut f64, range: RangeInclusive<f64>, default: f64) {
    if range.contains(&*value) {
        return;
    }
    let fixed = if value.is_nan() {
        default
    } else {
        value.clamp(*range.start(), *range.end())
    };
    log::warn!(
        "Invalid {name} {value}, using {fixed} ({:.1}-{:.1} allowed)",
        range.start(),
        range.end()
    );
    *value = fixed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};
    use crate::input::{ToolKind, ZoomPan};
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_tool, ToolKind::Rect);
        assert_eq!(config.tool_style().color, RED);
        assert_eq!(config.zoom.initial, 1.0);
    }

    #[test]
    fn parses_sections() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = [0, 0, 255]
            default_tool = "arrow"

            [zoom]
            initial = 2.0

            [text]
            default_text = "Bug here"
            "#,
        )
        .unwrap();

        let style = config.tool_style();
        assert_eq!(style.color, BLUE);
        assert_eq!(style.default_text, "Bug here");
        assert_eq!(config.drawing.default_tool, ToolKind::Arrow);
        assert_eq!(config.zoom_state().unwrap().zoom_factor(), 2.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [drawing]
            default_thickness = 99.0

            [arrow]
            length = 1.0
            angle_degrees = 90.0

            [zoom]
            initial = 50.0
            min = 0.5
            max = 4.0
            step = 0.5
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_thickness, 20.0);
        assert_eq!(config.arrow.length, 5.0);
        assert_eq!(config.arrow.angle_degrees, 60.0);
        assert_eq!(config.zoom.initial, 4.0);
        assert_eq!(config.zoom.step, 1.2);
    }

    #[test]
    fn nan_values_fall_back_to_defaults() {
        let mut config = Config::from_toml(
            r#"
            [drawing]
            default_thickness = nan

            [arrow]
            length = nan
            angle_degrees = -inf

            [text]
            font_size = nan
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_thickness, 3.0);
        assert_eq!(config.arrow.length, 20.0);
        assert_eq!(config.arrow.angle_degrees, 15.0);
        assert_eq!(config.text.font_size, 16.0);
        assert_eq!(config.tool_style().thickness, 3.0);
    }

    #[test]
    fn non_positive_zoom_range_falls_back_to_defaults() {
        let mut config = Config::from_toml("[zoom]\nmin = 0.0\nmax = -3.0\n").unwrap();
        config.validate_and_clamp();

        assert_eq!(config.zoom.min, 0.1);
        assert_eq!(config.zoom.max, 10.0);
        assert!(config.zoom_state().is_ok());
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[text]\nfont_size = 200.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.text.font_size, 72.0);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load_from(&temp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[drawing\n").is_err());
    }
}
