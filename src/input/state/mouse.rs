use crate::input::dependencies::{DrawingSurface, ShapeFactory, ShapeRegistrar, ZoomPan};
use crate::input::error::SketchError;
use crate::input::events::{DrawingEvent, MouseButton, PointerEvent};
use crate::input::zoom::logical_coordinate;
use crate::util::{Bounds, Point};
use log::{debug, info};

use super::{DrawTool, DrawingState};

impl<S, Z> DrawTool<S, Z>
where
    S: ShapeFactory + ShapeRegistrar,
    Z: ZoomPan,
{
    /// Logical position of `event` on `surface` at the current zoom.
    fn logical_point(
        &self,
        event: &PointerEvent,
        surface: &impl DrawingSurface,
    ) -> Result<Point, SketchError> {
        let offset = surface.offset(event);
        Ok(Point::new(
            logical_coordinate(offset.x, &self.zoom)?,
            logical_coordinate(offset.y, &self.zoom)?,
        ))
    }

    /// Starts a drawing session on a left press.
    ///
    /// A right press cancels the active session (see [`DrawTool::on_cancel`]).
    /// Any other press, and a right press while idle, is left to the surface:
    /// nothing changes and the event is not suppressed.
    ///
    /// # Behavior
    /// - Suppresses the event so the surface does not start a pan
    /// - Records the logical press point as origin
    /// - Requests the pending shape from the factory, anchored at the origin
    /// - Disables pan/zoom until release
    ///
    /// # Errors
    /// - [`SketchError::SessionAlreadyActive`] if a session is in progress
    /// - [`SketchError::InvalidZoomFactor`] if the zoom factor is not positive
    ///
    /// On error nothing is recorded and the event is left untouched.
    pub fn on_press_start(
        &mut self,
        event: &mut PointerEvent,
        surface: &impl DrawingSurface,
    ) -> Result<(), SketchError> {
        match event.button {
            MouseButton::Left => {}
            MouseButton::Right if self.is_drawing() => {
                event.suppress();
                return self.on_cancel();
            }
            other => {
                debug!("Ignoring {other:?} press");
                return Ok(());
            }
        }
        if self.is_drawing() {
            return Err(SketchError::SessionAlreadyActive);
        }
        let origin = self.logical_point(event, surface)?;

        event.suppress();
        let shape = self
            .store
            .new_shape(self.kind.shape_for(origin, origin, &self.style));
        debug!(
            "Press at ({:.1}, {:.1}) started {} with {:?}",
            origin.x,
            origin.y,
            shape.id(),
            self.kind
        );
        self.state = DrawingState::Drawing {
            origin,
            current: origin,
            shape,
        };
        self.zoom.disable();
        Ok(())
    }

    /// Updates the active session with a new pointer position.
    ///
    /// The bounding box is recomputed from origin and current point and the
    /// pending shape's geometry is rewritten in place. Nothing is emitted.
    ///
    /// # Errors
    /// - [`SketchError::NoActiveSession`] when idle
    /// - [`SketchError::InvalidZoomFactor`] if the zoom factor is not positive
    pub fn on_drag(
        &mut self,
        event: &mut PointerEvent,
        surface: &impl DrawingSurface,
    ) -> Result<(), SketchError> {
        if !self.is_drawing() {
            return Err(SketchError::NoActiveSession);
        }
        let point = self.logical_point(event, surface)?;

        event.suppress();
        if let DrawingState::Drawing {
            origin,
            current,
            shape,
        } = &mut self.state
        {
            *current = point;
            shape.set(self.kind.shape_for(*origin, point, &self.style));
        }
        Ok(())
    }

    /// Finishes the active session.
    ///
    /// # Behavior
    /// - Suppresses the event and returns to idle (origin resets to `(0, 0)`)
    /// - Registers the shape with the tool's editability flag
    /// - Re-enables pan/zoom, also for zero-size shapes
    /// - Emits [`DrawingEvent::Ended`] with the handle created at press
    ///
    /// # Errors
    /// [`SketchError::NoActiveSession`] when idle.
    pub fn on_release_end(&mut self, event: &mut PointerEvent) -> Result<(), SketchError> {
        let DrawingState::Drawing {
            origin,
            current,
            shape,
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return Err(SketchError::NoActiveSession);
        };

        event.suppress();
        if Bounds::from_points(origin, current).is_degenerate() {
            debug!("{} released with a zero-size box", shape.id());
        }
        self.store
            .register_interactive_behavior(&shape, self.kind.is_shape_editable());
        self.zoom.enable();
        info!("Drawing ended: {} ({:?})", shape.id(), self.kind);
        self.emit(DrawingEvent::Ended(shape));
        Ok(())
    }

    /// Abandons the active session without committing its shape.
    ///
    /// The pending shape is discarded from the factory, pan/zoom is re-enabled
    /// and [`DrawingEvent::Aborted`] is emitted.
    ///
    /// # Errors
    /// [`SketchError::NoActiveSession`] when idle.
    pub fn on_cancel(&mut self) -> Result<(), SketchError> {
        let DrawingState::Drawing { shape, .. } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return Err(SketchError::NoActiveSession);
        };

        self.store.discard(&shape);
        self.zoom.enable();
        info!("Drawing aborted: {}", shape.id());
        self.emit(DrawingEvent::Aborted(shape.id()));
        Ok(())
    }
}
