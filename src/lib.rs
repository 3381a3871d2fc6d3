//! Sketch annotation engine for step screenshots.
//!
//! Turns pointer input over a zoomable screenshot view into annotation
//! shapes with device-independent geometry, and exports finished sketches
//! as SVG or PNG. The command-line binary replays recorded input through
//! the same engine.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use draw::Sketch;
pub use input::DrawTool;
