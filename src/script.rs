//! Replay of recorded pointer input.
//!
//! A replay script is a TOML file with an ordered list of `[[step]]` tables,
//! each naming an `action`. Coordinates are device pixels in the client
//! area, exactly as a pointer event would report them. A `press` may name a
//! `button` (`left` by default); a right press cancels the active session:
//!
//! ```toml
//! width = 800
//! height = 600
//!
//! [[step]]
//! action = "tool"
//! tool = "arrow"
//!
//! [[step]]
//! action = "press"
//! x = 100.0
//! y = 50.0
//!
//! [[step]]
//! action = "drag"
//! x = 300.0
//! y = 150.0
//!
//! [[step]]
//! action = "release"
//! ```

use crate::config::{ColorSpec, Config};
use crate::draw::Sketch;
use crate::input::{
    DrawTool, DrawingEvent, DrawingPad, MouseButton, PointerEvent, SketchError, ToolKind,
    ZoomPanState,
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// One recorded input action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    /// Select the tool for the next session
    Tool { tool: ToolKind },
    Color { color: ColorSpec },
    Thickness { value: f64 },
    /// Default text of the next text box
    Text { text: String },
    /// Set the zoom factor
    Zoom { factor: f64 },
    ZoomIn,
    ZoomOut,
    Pan { dx: f64, dy: f64 },
    /// Button press; `button` defaults to left
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    Drag { x: f64, y: f64 },
    Release {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Cancel,
    Undo,
    Clear,
}

/// Position of the drawing pad in the recorded client area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PadPosition {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
}

/// A recorded input session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplayScript {
    /// Canvas width for exports without a screenshot
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub pad: PadPosition,
    #[serde(default, rename = "step")]
    pub steps: Vec<Action>,
}

impl ReplayScript {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        source
            .parse::<Self>()
            .with_context(|| format!("Failed to parse replay script {}", path.display()))
    }
}

impl std::str::FromStr for ReplayScript {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

/// Result of running a script.
#[derive(Debug)]
pub struct ReplayOutcome {
    pub sketch: Sketch,
    /// Sessions that ended with a release
    pub finished: usize,
    /// Sessions cancelled by the script, or left open at its end
    pub aborted: usize,
    /// Steps refused by the drawing tool
    pub rejected: usize,
}

/// Runs every step of `script` through a drawing tool configured from `config`.
///
/// Steps the tool refuses (for example a drag with no press before it) are
/// logged and counted, and the replay continues. A session still open at the
/// end of the script is cancelled.
pub fn replay(script: &ReplayScript, config: &Config) -> Result<ReplayOutcome> {
    let mut tool = DrawTool::new(
        config.drawing.default_tool,
        config.tool_style(),
        Sketch::with_limit(config.output.max_shapes),
        config.zoom_state()?,
    );

    let finished = Rc::new(Cell::new(0));
    let aborted = Rc::new(Cell::new(0));
    {
        let finished = Rc::clone(&finished);
        let aborted = Rc::clone(&aborted);
        tool.subscribe(move |event| match event {
            DrawingEvent::Ended(_) => finished.set(finished.get() + 1),
            DrawingEvent::Aborted(_) => aborted.set(aborted.get() + 1),
        });
    }

    let pad = DrawingPad::new(script.pad.left, script.pad.top);
    let mut rejected = 0;
    for (index, action) in script.steps.iter().enumerate() {
        debug!("Step {}: {:?}", index + 1, action);
        if let Err(err) = apply(&mut tool, &pad, action, config.zoom.step) {
            warn!("Step {} ({:?}) rejected: {}", index + 1, action, err);
            rejected += 1;
        }
    }

    if tool.is_drawing() {
        warn!("Script ended during a drawing session; discarding the pending shape");
        tool.on_cancel()?;
    }

    let (sketch, _) = tool.into_parts();
    let outcome = ReplayOutcome {
        sketch,
        finished: finished.get(),
        aborted: aborted.get(),
        rejected,
    };
    info!(
        "Replayed {} steps: {} shapes, {} aborted, {} rejected",
        script.steps.len(),
        outcome.sketch.len(),
        outcome.aborted,
        outcome.rejected
    );
    Ok(outcome)
}

fn apply(
    tool: &mut DrawTool<Sketch, ZoomPanState>,
    pad: &DrawingPad,
    action: &Action,
    zoom_step: f64,
) -> Result<(), SketchError> {
    match action {
        Action::Tool { tool: kind } => tool.set_kind(*kind)?,
        Action::Color { color } => tool.style_mut().color = color.to_color(),
        Action::Thickness { value } => {
            if !value.is_finite() {
                return Err(SketchError::InvalidThickness(*value));
            }
            tool.style_mut().thickness = value.clamp(1.0, 20.0);
        }
        Action::Text { text } => tool.style_mut().default_text = text.clone(),
        Action::Zoom { factor } => {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(SketchError::InvalidZoomFactor(*factor));
            }
            if !tool.zoom_mut().set_zoom(*factor) {
                debug!("Zoom ignored while drawing");
            }
        }
        Action::ZoomIn => {
            tool.zoom_mut().zoom_by(zoom_step);
        }
        Action::ZoomOut => {
            tool.zoom_mut().zoom_by(1.0 / zoom_step);
        }
        Action::Pan { dx, dy } => {
            tool.zoom_mut().pan_by(*dx, *dy);
        }
        Action::Press { x, y, button } => {
            tool.on_press_start(&mut PointerEvent::new(*button, *x, *y), pad)?
        }
        Action::Drag { x, y } => tool.on_drag(&mut PointerEvent::left(*x, *y), pad)?,
        Action::Release { x, y } => tool.on_release_end(&mut PointerEvent::left(*x, *y))?,
        Action::Cancel => tool.on_cancel()?,
        Action::Undo => {
            if let Some(shape) = tool.store_mut().undo() {
                debug!("Undid {}", shape.id());
            }
        }
        Action::Clear => tool.store_mut().clear(),
    }
    Ok(())
}
