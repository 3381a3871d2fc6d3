//! Shape definitions for step sketches.

use super::color::Color;
use crate::util::{Bounds, Point};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Represents one annotation drawn on a step screenshot.
///
/// All geometry is stored in logical (unscaled) coordinates, so a shape drawn
/// at any zoom level lines up with the screenshot pixels it annotates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Rectangle outline
    Rect {
        /// Top-left X coordinate
        x: f64,
        /// Top-left Y coordinate
        y: f64,
        w: f64,
        h: f64,
        color: Color,
        /// Border thickness in logical pixels
        thick: f64,
    },
    /// Ellipse outline inscribed in the drag box
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        color: Color,
        thick: f64,
    },
    /// Straight line from press point to release point
    Line {
        start: Point,
        end: Point,
        color: Color,
        thick: f64,
    },
    /// Line with an arrowhead at `end`
    Arrow {
        start: Point,
        end: Point,
        color: Color,
        thick: f64,
        /// Arrowhead length in logical pixels
        head_length: f64,
        /// Arrowhead angle in degrees
        head_angle: f64,
    },
    /// Text box spanning the drag box; the only shape kind that stays editable
    Text {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        text: String,
        color: Color,
        /// Font size in points
        size: f64,
    },
}

impl Shape {
    /// Short lowercase name used in logs and SVG class attributes.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rect { .. } => "rect",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Line { .. } => "line",
            Shape::Arrow { .. } => "arrow",
            Shape::Text { .. } => "text",
        }
    }

    /// Returns the axis-aligned bounding box, expanded to cover stroke width.
    pub fn bounding_box(&self) -> Bounds {
        match self {
            Shape::Rect {
                x, y, w, h, thick, ..
            } => Bounds::from_points(Point::new(*x, *y), Point::new(x + w, y + h))
                .inflate(thick / 2.0),
            Shape::Ellipse {
                cx,
                cy,
                rx,
                ry,
                thick,
                ..
            } => Bounds::from_points(Point::new(cx - rx, cy - ry), Point::new(cx + rx, cy + ry))
                .inflate(thick / 2.0),
            Shape::Line {
                start, end, thick, ..
            } => Bounds::from_points(*start, *end).inflate(thick / 2.0),
            Shape::Arrow {
                start,
                end,
                thick,
                head_length,
                ..
            } => Bounds::from_points(*start, *end).inflate(thick / 2.0 + head_length),
            Shape::Text { x, y, w, h, .. } => {
                Bounds::from_points(Point::new(*x, *y), Point::new(x + w, y + h))
            }
        }
    }
}

/// Stable identifier for a shape within one sketch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape-{}", self.0)
    }
}

/// Shared handle to a shape that is being drawn or has been committed.
///
/// Cloning a handle does not copy the shape: every clone observes the same
/// geometry, and [`ShapeHandle::same_shape`] compares identity.
#[derive(Clone, Debug)]
pub struct ShapeHandle {
    id: ShapeId,
    shape: Rc<RefCell<Shape>>,
}

impl ShapeHandle {
    pub fn new(id: ShapeId, shape: Shape) -> Self {
        Self {
            id,
            shape: Rc::new(RefCell::new(shape)),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Returns a copy of the current geometry.
    pub fn snapshot(&self) -> Shape {
        self.shape.borrow().clone()
    }

    /// Reads the current geometry without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&Shape) -> R) -> R {
        f(&self.shape.borrow())
    }

    /// Replaces the geometry in place; all clones of the handle see the change.
    pub fn set(&self, shape: Shape) {
        *self.shape.borrow_mut() = shape;
    }

    pub fn same_shape(&self, other: &ShapeHandle) -> bool {
        Rc::ptr_eq(&self.shape, &other.shape)
    }
}
