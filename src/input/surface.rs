//! Drawing pad geometry.

use super::dependencies::DrawingSurface;
use super::events::PointerEvent;
use crate::util::Point;

/// Position of the drawing pad inside the client area, in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawingPad {
    pub left: f64,
    pub top: f64,
}

impl DrawingPad {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

impl DrawingSurface for DrawingPad {
    fn offset(&self, event: &PointerEvent) -> Point {
        Point::new(event.client_x - self.left, event.client_y - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_pad_origin() {
        let pad = DrawingPad::new(10.0, 40.0);
        let offset = pad.offset(&PointerEvent::left(110.0, 90.0));
        assert_eq!(offset, Point::new(100.0, 50.0));
    }
}
