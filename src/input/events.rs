//! Pointer input and drawing notifications.

use crate::draw::{ShapeHandle, ShapeId};
use serde::Deserialize;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    #[default]
    Left,
    /// Cancels an active session
    Right,
    /// Left to the surface (pan gestures)
    Middle,
}

/// A raw pointer event as delivered by the drawing surface.
///
/// Coordinates are device pixels in the client area. Handlers that consume an
/// event call [`PointerEvent::suppress`] so the surface does not also treat it
/// as a pan gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub button: MouseButton,
    pub client_x: f64,
    pub client_y: f64,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(button: MouseButton, client_x: f64, client_y: f64) -> Self {
        Self {
            button,
            client_x,
            client_y,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Left-button event at the given client position.
    pub fn left(client_x: f64, client_y: f64) -> Self {
        Self::new(MouseButton::Left, client_x, client_y)
    }

    /// Prevents default handling and stops propagation.
    pub fn suppress(&mut self) {
        self.default_prevented = true;
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Notification emitted by the drawing tool when a session finishes.
#[derive(Debug, Clone)]
pub enum DrawingEvent {
    /// Session released; carries the handle created at press.
    Ended(ShapeHandle),
    /// Session cancelled; the pending shape was discarded.
    Aborted(ShapeId),
}
