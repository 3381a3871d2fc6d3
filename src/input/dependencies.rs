//! Collaborators of the drawing tool. Each one can be mocked in tests.

use crate::draw::{Shape, ShapeHandle};
use crate::input::events::PointerEvent;
use crate::util::Point;

/// Pan/zoom controller of the drawing pad.
///
/// The drawing tool only reads the zoom factor and toggles the enabled flag;
/// it never zooms or pans by itself.
pub trait ZoomPan {
    /// Current zoom factor (device pixels per logical pixel).
    fn zoom_factor(&self) -> f64;
    /// Suspends user panning and zooming.
    fn disable(&mut self);
    /// Resumes user panning and zooming.
    fn enable(&mut self);
    fn is_enabled(&self) -> bool;
}

/// The surface pointer events are delivered over.
pub trait DrawingSurface {
    /// Offset of the event within the surface, in device pixels.
    fn offset(&self, event: &PointerEvent) -> Point;
}

/// Hands out shape handles when a drawing session starts.
pub trait ShapeFactory {
    /// Allocates a handle for `initial`, the geometry anchored at the press point.
    fn new_shape(&mut self, initial: Shape) -> ShapeHandle;
    /// Forgets a handle whose session was aborted before release.
    fn discard(&mut self, shape: &ShapeHandle);
}

/// Attaches interactive behavior (selection, editing) to a finished shape.
pub trait ShapeRegistrar {
    fn register_interactive_behavior(&mut self, shape: &ShapeHandle, editable: bool);
}
