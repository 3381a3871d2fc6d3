mod core;
mod mouse;

pub use core::{DrawTool, DrawingState};
