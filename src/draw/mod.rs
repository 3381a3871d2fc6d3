//! Shape definitions and the sketch container.
//!
//! This module defines the core drawing types used for step sketches:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`Shape`]: Annotation geometry in logical coordinates
//! - [`ShapeHandle`]: Shared, identity-comparable reference to a shape
//! - [`Sketch`]: Container for all shapes drawn on one screenshot
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod shape;
pub mod sketch;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{render_shape, render_shapes};
pub use shape::{Shape, ShapeHandle, ShapeId};
pub use sketch::{ShapeRecord, Sketch};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
