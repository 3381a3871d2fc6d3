//! Input handling and the drawing session state machine.
//!
//! This module translates pointer events over the zoomable drawing pad into
//! sketch shapes. It maintains the active tool and its style, the idle/drawing
//! state machine, and the mutual exclusion between drawing and panning.

pub mod dependencies;
pub mod error;
pub mod events;
pub mod state;
pub mod surface;
pub mod tool;
pub mod zoom;

// Re-export commonly used types at module level
pub use dependencies::{DrawingSurface, ShapeFactory, ShapeRegistrar, ZoomPan};
pub use error::SketchError;
pub use events::{DrawingEvent, MouseButton, PointerEvent};
pub use state::{DrawTool, DrawingState};
pub use surface::DrawingPad;
pub use tool::{ToolKind, ToolStyle};
pub use zoom::{ZoomPanState, logical_coordinate};
