//! Sketch export: SVG documents and PNG images.

pub mod file;
pub mod png;
pub mod svg;

pub use file::{generate_filename, resolve_output_path};
pub use png::{canvas_size, load_background, render_sketch, write_png};
pub use svg::render_svg;

use thiserror::Error;

/// Errors that can occur while exporting a sketch.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write sketch: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo rendering error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding error: {0}")]
    Png(#[from] cairo::IoError),
}
