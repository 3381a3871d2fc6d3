//! Drawing tool selection and per-tool shape geometry.

use crate::draw::{Color, Shape};
use crate::util::{self, Bounds, Point};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what shape a press-drag-release session creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Rectangle outline over the drag box
    #[default]
    Rect,
    /// Ellipse inscribed in the drag box
    Ellipse,
    /// Straight line from press point to pointer
    Line,
    /// Line with arrowhead at the pointer
    Arrow,
    /// Editable text box over the drag box
    Text,
}

/// Appearance applied to shapes created by a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolStyle {
    pub color: Color,
    pub thickness: f64,
    pub arrow_length: f64,
    pub arrow_angle: f64,
    pub font_size: f64,
    pub default_text: String,
}

impl ToolKind {
    /// Pointer cursor shown while the tool is selected.
    pub fn cursor(self) -> &'static str {
        "crosshair"
    }

    /// Whether shapes of this kind get edit behavior when registered.
    pub fn is_shape_editable(self) -> bool {
        matches!(self, ToolKind::Text)
    }

    /// Builds the shape for a session that started at `origin` and is now at `current`.
    ///
    /// Box-based tools use the normalized bounding box; line-based tools keep
    /// the drag direction.
    pub fn shape_for(self, origin: Point, current: Point, style: &ToolStyle) -> Shape {
        let bounds = Bounds::from_points(origin, current);
        match self {
            ToolKind::Rect => Shape::Rect {
                x: bounds.anchor.x,
                y: bounds.anchor.y,
                w: bounds.width(),
                h: bounds.height(),
                color: style.color,
                thick: style.thickness,
            },
            ToolKind::Ellipse => {
                let (cx, cy, rx, ry) = util::ellipse_bounds(&bounds);
                Shape::Ellipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    color: style.color,
                    thick: style.thickness,
                }
            }
            ToolKind::Line => Shape::Line {
                start: origin,
                end: current,
                color: style.color,
                thick: style.thickness,
            },
            ToolKind::Arrow => Shape::Arrow {
                start: origin,
                end: current,
                color: style.color,
                thick: style.thickness,
                head_length: style.arrow_length,
                head_angle: style.arrow_angle,
            },
            ToolKind::Text => Shape::Text {
                x: bounds.anchor.x,
                y: bounds.anchor.y,
                w: bounds.width(),
                h: bounds.height(),
                text: style.default_text.clone(),
                color: style.color,
                size: style.font_size,
            },
        }
    }
}

impl std::str::FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rect" | "rectangle" => Ok(ToolKind::Rect),
            "ellipse" => Ok(ToolKind::Ellipse),
            "line" => Ok(ToolKind::Line),
            "arrow" => Ok(ToolKind::Arrow),
            "text" => Ok(ToolKind::Text),
            other => Err(format!("unknown tool '{other}'")),
        }
    }
}
