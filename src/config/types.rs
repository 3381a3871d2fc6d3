//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::ToolKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the appearance of shapes when a sketch session starts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in logical pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Tool selected when the drawing pad opens (rect, ellipse, line, arrow, text)
    #[serde(default)]
    pub default_tool: ToolKind,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_tool: ToolKind::default(),
        }
    }
}

/// Arrowhead appearance for the arrow tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead length in logical pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

/// Zoom range of the screenshot view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ZoomConfig {
    /// Zoom factor when the view opens
    #[serde(default = "default_zoom_initial")]
    pub initial: f64,

    #[serde(default = "default_zoom_min")]
    pub min: f64,

    #[serde(default = "default_zoom_max")]
    pub max: f64,

    /// Multiplier applied per zoom-in step (zoom-out uses the inverse)
    #[serde(default = "default_zoom_step")]
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            initial: default_zoom_initial(),
            min: default_zoom_min(),
            max: default_zoom_max(),
            step: default_zoom_step(),
        }
    }
}

/// Text box settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Placeholder text of a new text box
    #[serde(default = "default_text")]
    pub default_text: String,

    /// Font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            default_text: default_text(),
            font_size: default_font_size(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// File name template used when an output path is a directory
    /// (supports chrono format specifiers, extension is appended)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Maximum number of shapes kept per sketch (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename_template: default_filename_template(),
            max_shapes: 0,
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_thickness() -> f64 {
    3.0
}

fn default_arrow_length() -> f64 {
    20.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_zoom_initial() -> f64 {
    1.0
}

fn default_zoom_min() -> f64 {
    0.1
}

fn default_zoom_max() -> f64 {
    10.0
}

fn default_zoom_step() -> f64 {
    1.2
}

fn default_text() -> String {
    "Text".to_string()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
