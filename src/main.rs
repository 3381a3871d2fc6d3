use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use stepsketch::config::Config;
use stepsketch::export;
use stepsketch::script::{self, ReplayOutcome, ReplayScript};

#[derive(Parser, Debug)]
#[command(name = "stepsketch")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STEPSKETCH_GIT_HASH"), ")"),
    about = "Sketch annotation engine for step screenshots"
)]
struct Cli {
    /// Read configuration from this file instead of ~/.config/stepsketch/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay recorded pointer input and export the resulting sketch
    Replay {
        /// Replay script (TOML)
        script: PathBuf,

        /// Step screenshot (PNG) to draw the sketch on
        #[arg(long, value_name = "PATH")]
        screenshot: Option<PathBuf>,

        /// Write the sketch as SVG (a directory gets a generated file name)
        #[arg(long, value_name = "PATH")]
        svg: Option<PathBuf>,

        /// Write the sketch as PNG (a directory gets a generated file name)
        #[arg(long, value_name = "PATH")]
        png: Option<PathBuf>,

        /// Print the committed shapes as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!(
        "stepsketch {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("STEPSKETCH_GIT_HASH")
    );

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Replay {
            script,
            screenshot,
            svg,
            png,
            json,
        } => run_replay(
            &config,
            &script,
            screenshot.as_deref(),
            svg.as_deref(),
            png.as_deref(),
            json,
        ),
    }
}

fn run_replay(
    config: &Config,
    script_path: &Path,
    screenshot: Option<&Path>,
    svg: Option<&Path>,
    png: Option<&Path>,
    json: bool,
) -> Result<()> {
    let script = ReplayScript::load(script_path)?;
    let outcome = script::replay(&script, config)?;

    let background = screenshot
        .map(|path| {
            export::load_background(path)
                .with_context(|| format!("Failed to load screenshot {}", path.display()))
        })
        .transpose()?;

    let size = match &background {
        Some(bg) => (bg.width().max(1) as u32, bg.height().max(1) as u32),
        None => {
            let fitted = export::canvas_size(&outcome.sketch);
            (
                script.width.unwrap_or(fitted.0).max(1),
                script.height.unwrap_or(fitted.1).max(1),
            )
        }
    };

    let template = &config.output.filename_template;
    if let Some(target) = svg {
        let path = export::resolve_output_path(target, template, "svg")?;
        let href = screenshot.map(|p| p.to_string_lossy().into_owned());
        let document = export::render_svg(&outcome.sketch, size.0, size.1, href.as_deref());
        fs::write(&path, document)
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        log::info!("Saved sketch SVG to {}", path.display());
    }

    if let Some(target) = png {
        let path = export::resolve_output_path(target, template, "png")?;
        let surface = export::render_sketch(&outcome.sketch, background.as_ref(), size)?;
        export::write_png(&surface, &path)?;
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome.sketch.records())?
        );
    } else {
        print_summary(&script, &outcome);
    }

    Ok(())
}

fn print_summary(script: &ReplayScript, outcome: &ReplayOutcome) {
    println!(
        "Replayed {} steps: {} shapes committed, {} sessions aborted, {} steps rejected",
        script.steps.len(),
        outcome.sketch.len(),
        outcome.aborted,
        outcome.rejected
    );
    for record in outcome.sketch.records() {
        let bounds = record.shape.bounding_box();
        println!(
            "  {} {} ({:.1}, {:.1})-({:.1}, {:.1}){}",
            record.id,
            record.shape.name(),
            bounds.anchor.x,
            bounds.anchor.y,
            bounds.corner.x,
            bounds.corner.y,
            if record.editable { " editable" } else { "" }
        );
    }
}
