//! Drawing session state machine and the drawing tool that owns it.

use crate::draw::ShapeHandle;
use crate::input::dependencies::{ShapeFactory, ShapeRegistrar, ZoomPan};
use crate::input::error::SketchError;
use crate::input::events::DrawingEvent;
use crate::input::tool::{ToolKind, ToolStyle};
use crate::util::{Bounds, Point};

/// Current drawing mode state machine.
///
/// `Idle` until a press starts a session; `Drawing` until release or cancel.
#[derive(Debug, Clone)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a press
    Idle,
    /// Pointer held down on the drawing pad
    Drawing {
        /// Logical point captured at press
        origin: Point,
        /// Logical point of the latest drag (equals origin until the first drag)
        current: Point,
        /// Shape handed out by the factory at press
        shape: ShapeHandle,
    },
}

type Observer = Box<dyn FnMut(&DrawingEvent)>;

/// Turns press-drag-release input over a zoomable drawing pad into shapes.
///
/// The tool owns its shape store `S` (factory and registrar) and the pan/zoom
/// controller `Z`. Geometry is always recorded in logical coordinates, i.e.
/// device offsets divided by the zoom factor at the time of the event.
/// Observers registered with [`DrawTool::subscribe`] receive one
/// [`DrawingEvent`] per finished session, in emission order.
pub struct DrawTool<S, Z> {
    pub(super) kind: ToolKind,
    pub(super) style: ToolStyle,
    pub(super) state: DrawingState,
    pub(super) store: S,
    pub(super) zoom: Z,
    observers: Vec<Observer>,
}

impl<S, Z> DrawTool<S, Z>
where
    S: ShapeFactory + ShapeRegistrar,
    Z: ZoomPan,
{
    /// Creates an idle tool.
    pub fn new(kind: ToolKind, style: ToolStyle, store: S, zoom: Z) -> Self {
        Self {
            kind,
            style,
            state: DrawingState::Idle,
            store,
            zoom,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for finished and aborted sessions.
    pub fn subscribe(&mut self, observer: impl FnMut(&DrawingEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub(super) fn emit(&mut self, event: DrawingEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Switches the tool used for the next session.
    ///
    /// # Errors
    /// [`SketchError::SessionAlreadyActive`] while a session is in progress.
    pub fn set_kind(&mut self, kind: ToolKind) -> Result<(), SketchError> {
        if self.is_drawing() {
            return Err(SketchError::SessionAlreadyActive);
        }
        log::debug!(
            "Tool changed: {:?} -> {:?} (cursor {})",
            self.kind,
            kind,
            kind.cursor()
        );
        self.kind = kind;
        Ok(())
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    /// Style changes apply from the next drag on.
    pub fn style_mut(&mut self) -> &mut ToolStyle {
        &mut self.style
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Press point of the active session, or `(0, 0)` when idle.
    pub fn origin(&self) -> Point {
        match &self.state {
            DrawingState::Drawing { origin, .. } => *origin,
            DrawingState::Idle => Point::ORIGIN,
        }
    }

    /// Latest drag point of the active session.
    pub fn current(&self) -> Option<Point> {
        match &self.state {
            DrawingState::Drawing { current, .. } => Some(*current),
            DrawingState::Idle => None,
        }
    }

    /// Box spanned by origin and current point, derived on every call.
    pub fn bounding_box(&self) -> Option<Bounds> {
        match &self.state {
            DrawingState::Drawing {
                origin, current, ..
            } => Some(Bounds::from_points(*origin, *current)),
            DrawingState::Idle => None,
        }
    }

    /// Shape being drawn, for live preview.
    pub fn pending_shape(&self) -> Option<&ShapeHandle> {
        match &self.state {
            DrawingState::Drawing { shape, .. } => Some(shape),
            DrawingState::Idle => None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the shape store (undo, clear).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn zoom(&self) -> &Z {
        &self.zoom
    }

    /// Mutable access to the pan/zoom controller, e.g. for user zoom requests.
    ///
    /// Do not re-enable it while a session is active.
    pub fn zoom_mut(&mut self) -> &mut Z {
        &mut self.zoom
    }

    /// Gives back the store and controller.
    pub fn into_parts(self) -> (S, Z) {
        (self.store, self.zoom)
    }
}
