//! Pan/zoom state of the drawing pad.

use super::dependencies::ZoomPan;
use super::error::SketchError;
use log::debug;

/// Zoom factor and pan offset of the screenshot view.
///
/// User zoom and pan requests are ignored while disabled, which is how a
/// drawing session keeps the view still between press and release.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomPanState {
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    pan_x: f64,
    pan_y: f64,
    enabled: bool,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
            pan_x: 0.0,
            pan_y: 0.0,
            enabled: true,
        }
    }
}

impl ZoomPanState {
    /// Creates a view with the given initial zoom and allowed range.
    ///
    /// # Errors
    /// Returns [`SketchError::InvalidZoomFactor`] if any bound is not a finite
    /// positive number; the initial factor is clamped into range.
    pub fn new(initial: f64, min_zoom: f64, max_zoom: f64) -> Result<Self, SketchError> {
        for value in [initial, min_zoom, max_zoom] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SketchError::InvalidZoomFactor(value));
            }
        }
        let (min_zoom, max_zoom) = (min_zoom.min(max_zoom), min_zoom.max(max_zoom));
        Ok(Self {
            zoom: initial.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            ..Self::default()
        })
    }

    /// Sets the zoom factor, clamped to the allowed range. Returns false if ignored.
    pub fn set_zoom(&mut self, factor: f64) -> bool {
        if !self.enabled || !factor.is_finite() || factor <= 0.0 {
            debug!("Ignoring zoom request to {factor}");
            return false;
        }
        self.zoom = factor.clamp(self.min_zoom, self.max_zoom);
        true
    }

    /// Multiplies the zoom factor by `step`.
    pub fn zoom_by(&mut self, step: f64) -> bool {
        self.set_zoom(self.zoom * step)
    }

    /// Moves the view by a device-pixel delta. Returns false if ignored.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if !self.enabled {
            debug!("Ignoring pan request ({dx}, {dy})");
            return false;
        }
        self.pan_x += dx;
        self.pan_y += dy;
        true
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }
}

/// Converts a device-pixel distance into logical sketch units.
///
/// # Errors
/// Returns [`SketchError::InvalidZoomFactor`] when the zoom factor is zero,
/// negative, or not finite, instead of producing infinite or NaN coordinates.
pub fn logical_coordinate<Z: ZoomPan + ?Sized>(device_px: f64, zoom: &Z) -> Result<f64, SketchError> {
    let factor = zoom.zoom_factor();
    if !factor.is_finite() || factor <= 0.0 {
        return Err(SketchError::InvalidZoomFactor(factor));
    }
    Ok(device_px / factor)
}

impl ZoomPan for ZoomPanState {
    fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
