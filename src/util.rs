//! Utility functions for colors, geometry, and arrowhead calculations.
//!
//! This module provides:
//! - Logical-coordinate points and drag bounding boxes
//! - Arrowhead geometry calculations
//! - Ellipse parameters inscribed in a drag box
//! - Color name mapping for the configuration file and SVG export

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A point in logical (unscaled) sketch coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box spanned by a drag, normalized so `anchor <= corner` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner (component-wise minimum)
    pub anchor: Point,
    /// Bottom-right corner (component-wise maximum)
    pub corner: Point,
}

impl Bounds {
    /// Builds the box spanned by two arbitrary points, whatever the drag direction.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            anchor: Point::new(a.x.min(b.x), a.y.min(b.y)),
            corner: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.corner.x - self.anchor.x
    }

    pub fn height(&self) -> f64 {
        self.corner.y - self.anchor.y
    }

    /// Returns true if the box has no area (click without drag, or a straight drag).
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Grows the box evenly in all directions by `amount`.
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            anchor: Point::new(self.anchor.x - amount, self.anchor.y - amount),
            corner: Point::new(self.corner.x + amount, self.corner.y + amount),
        }
    }
}

/// Calculates ellipse parameters inscribed in a drag box.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)` where:
/// - `cx`, `cy` = center point coordinates
/// - `rx` = horizontal radius (half width)
/// - `ry` = vertical radius (half height)
pub fn ellipse_bounds(bounds: &Bounds) -> (f64, f64, f64, f64) {
    let cx = (bounds.anchor.x + bounds.corner.x) / 2.0;
    let cy = (bounds.anchor.y + bounds.corner.y) / 2.0;
    (cx, cy, bounds.width() / 2.0, bounds.height() / 2.0)
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates arrowhead points with custom length and angle.
///
/// Creates a V-shaped arrowhead at the `tip` pointing in the direction from
/// `tail` to `tip`. The arrowhead length is capped at 30% of the line length
/// so short arrows keep a visible shaft.
///
/// # Returns
/// Array of two points `[left, right]` for the arrowhead lines.
/// If the line is shorter than one unit, both points equal the tip.
pub fn calculate_arrowhead(tip: Point, tail: Point, length: f64, angle_degrees: f64) -> [Point; 2] {
    let dx = tip.x - tail.x;
    let dy = tip.y - tail.y;
    let line_length = (dx * dx + dy * dy).sqrt();

    if line_length < 1.0 {
        return [tip, tip];
    }

    let ux = dx / line_length;
    let uy = dy / line_length;
    let arrow_length = length.min(line_length * 0.3);

    let angle = angle_degrees.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let left = Point::new(
        tip.x - arrow_length * (ux * cos_a - uy * sin_a),
        tip.y - arrow_length * (uy * cos_a + ux * sin_a),
    );
    let right = Point::new(
        tip.x - arrow_length * (ux * cos_a + uy * sin_a),
        tip.y - arrow_length * (uy * cos_a - ux * sin_a),
    );

    [left, right]
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and replay scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Formats a color as `#rrggbb` for SVG attributes (alpha is emitted separately).
pub fn color_to_hex(color: &Color) -> String {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}
