use thiserror::Error;

/// Errors reported by the drawing tool.
///
/// None of these leave the tool in a different state than before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
    #[error("Invalid zoom factor {0}; must be a finite number greater than zero")]
    InvalidZoomFactor(f64),

    #[error("Invalid stroke thickness {0}; must be a finite number")]
    InvalidThickness(f64),

    #[error("No drawing session is active")]
    NoActiveSession,

    #[error("A drawing session is already active")]
    SessionAlreadyActive,
}
