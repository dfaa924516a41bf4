#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::too_many_lines,
    clippy::cast_precision_loss,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use braille_engine::{CELL_HEIGHT, CELL_WIDTH, LineEnding, Position, image_import::ContrastMode};
use braille_engine_edit::{BrailleEditState, Intent, KeyModifiers, ShapeKind, Tool};
use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

mod import;
mod script;
mod settings;

pub use settings::*;

#[derive(Parser, Debug)]
#[command(version, about = "Compose tactile braille drawings and export them for embossers", long_about = None)]
pub struct Args {
    /// Page width in cells (default from settings)
    #[arg(long, global = true)]
    width: Option<i32>,

    /// Page height in cells (default from settings)
    #[arg(long, global = true)]
    height: Option<i32>,

    /// Line ending written between rows
    #[arg(long, value_enum, global = true)]
    line_ending: Option<EolArg>,

    /// Byte written for letters outside the one byte range
    #[arg(long, global = true)]
    fallback: Option<char>,

    /// Write the export here instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Print the drawing as unicode braille to stderr
    #[arg(long, global = true)]
    preview: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this settings file instead of the per user one
    #[arg(long, value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw one shape between two cells
    Shape {
        #[arg(value_enum)]
        kind: ShapeArg,

        /// First corner, "x,y"
        #[arg(value_name = "X,Y")]
        from: Position,

        /// Opposite corner, "x,y"
        #[arg(value_name = "X,Y")]
        to: Position,

        /// Stroke width in pixels (1-3)
        #[arg(long)]
        stroke_width: Option<i32>,

        /// Sampling radius in pixels
        #[arg(long)]
        max_dist: Option<f64>,
    },
    /// Write text as braille letters
    Text {
        /// Cell of the first letter, "x,y"
        #[arg(long, default_value = "0,0", value_name = "X,Y")]
        at: Position,

        text: String,
    },
    /// Convert a black on white image into braille dots
    Import {
        image: PathBuf,

        /// Grey level separating drawing from background
        #[arg(long)]
        threshold: Option<u8>,

        /// Treat light pixels as the drawing
        #[arg(long)]
        invert: bool,

        /// Grey level stretching applied before thresholding
        #[arg(long, value_enum)]
        contrast_mode: Option<ContrastArg>,

        /// Contrast factor around mid grey
        #[arg(long)]
        contrast_intensity: Option<f64>,

        /// Sampling radius around every dot in image pixels
        #[arg(long)]
        dot_radius: Option<f64>,

        /// Share of covered pixels needed to raise a dot (0-1)
        #[arg(long)]
        threshold_dot: Option<f64>,
    },
    /// Replay a scripted editing session
    Replay { script: PathBuf },
    /// Show the effective settings
    Settings {
        /// Store the effective settings as the per user defaults
        #[arg(long)]
        write_defaults: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Rectangle,
    Line,
    Circle,
    Triangle,
}

impl From<ShapeArg> for ShapeKind {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Rectangle => ShapeKind::Rectangle,
            ShapeArg::Line => ShapeKind::Line,
            ShapeArg::Circle => ShapeKind::Circle,
            ShapeArg::Triangle => ShapeKind::Triangle,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContrastArg {
    Contrast,
    Equalize,
}

impl From<ContrastArg> for ContrastMode {
    fn from(value: ContrastArg) -> Self {
        match value {
            ContrastArg::Contrast => ContrastMode::Contrast,
            ContrastArg::Equalize => ContrastMode::Equalize,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EolArg {
    Lf,
    Crlf,
}

impl From<EolArg> for LineEnding {
    fn from(value: EolArg) -> Self {
        match value {
            EolArg::Lf => LineEnding::Lf,
            EolArg::Crlf => LineEnding::CrLf,
        }
    }
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(dir) = Settings::config_dir() {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

fn start_logger(verbose: bool) -> Option<LoggerHandle> {
    let spec = if verbose { "debug" } else { "info" };
    let Some(log_dir) = get_log_dir() else {
        eprintln!("Failed to create log file");
        return None;
    };
    let duplicate = if verbose { Duplicate::Debug } else { Duplicate::Warn };
    let logger = Logger::try_with_env_or_str(spec).and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("braille_draw").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .create_symlink(log_dir.join("braille_draw.log"))
            .duplicate_to_stderr(duplicate)
            .start()
    });
    match logger {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

/// Pixel at the middle of a cell, where a pointer lands when aiming at it.
fn cell_centre(pos: Position) -> (f64, f64) {
    (
        (pos.x * CELL_WIDTH) as f64 + CELL_WIDTH as f64 / 2.0,
        (pos.y * CELL_HEIGHT) as f64 + CELL_HEIGHT as f64 / 2.0,
    )
}

fn shape_tool(kind: ShapeKind) -> Tool {
    match kind {
        ShapeKind::Rectangle => Tool::Rectangle,
        ShapeKind::Line => Tool::Line,
        ShapeKind::Circle => Tool::Circle,
        ShapeKind::Triangle => Tool::Triangle,
    }
}

/// Drags a shape out with the pointer and confirms it, as a user would.
fn draw_shape(state: &mut BrailleEditState, kind: ShapeKind, from: Position, to: Position) -> bool {
    state.set_tool(shape_tool(kind));
    let (x0, y0) = cell_centre(from);
    let (x1, y1) = cell_centre(to);
    state.pointer_down(x0, y0, KeyModifiers::empty());
    state.pointer_move(x1, y1);
    state.pointer_up(x1, y1);
    state.handle_intent(Intent::ConfirmShape)
}

fn effective_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(width) = args.width {
        settings.grid_width = width;
    }
    if let Some(height) = args.height {
        settings.grid_height = height;
    }
    if let Some(eol) = args.line_ending {
        settings.line_ending = eol.into();
    }
    if let Some(fallback) = args.fallback {
        settings.fallback_byte = u8::try_from(u32::from(fallback)).with_context(|| format!("fallback '{fallback}' does not fit into one byte"))?;
    }
    Ok(settings)
}

fn write_output(bytes: &[u8], output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut settings = effective_settings(&args)?;

    let mut state = match &args.command {
        Command::Settings { write_defaults } => {
            if *write_defaults {
                let path = settings.store()?;
                println!("stored settings in {}", path.display());
            } else {
                if let Some(path) = Settings::config_file() {
                    println!("# {}", path.display());
                }
                print!("{}", toml::to_string_pretty(&settings)?);
            }
            return Ok(());
        }
        Command::Replay { script: path } => {
            let script = script::Script::load(path)?;
            let mut state = script.create_state(settings.grid_width, settings.grid_height)?;
            apply_settings(&mut state, &settings);
            let stats = script.replay(&mut state)?;
            log::info!("replayed {} events, {} changed the editor", stats.events, stats.changed);
            state
        }
        Command::Shape {
            kind,
            from,
            to,
            stroke_width,
            max_dist,
        } => {
            if let Some(width) = stroke_width {
                settings.stroke_width = *width;
            }
            if let Some(dist) = max_dist {
                settings.max_dist_px = *dist;
            }
            let mut state = BrailleEditState::new(settings.grid_width, settings.grid_height)?;
            apply_settings(&mut state, &settings);
            if !draw_shape(&mut state, (*kind).into(), *from, *to) {
                log::warn!("{} from {from} to {to} lies outside the page", ShapeKind::from(*kind).name());
            }
            state
        }
        Command::Text { at, text } => {
            let mut state = BrailleEditState::new(settings.grid_width, settings.grid_height)?;
            apply_settings(&mut state, &settings);
            if !state.insert_text_at(at.x, at.y, text) {
                log::warn!("text at {at} left the page unchanged");
            }
            state
        }
        Command::Import {
            image,
            threshold,
            invert,
            contrast_mode,
            contrast_intensity,
            dot_radius,
            threshold_dot,
        } => {
            if let Some(threshold) = threshold {
                settings.image.threshold = *threshold;
            }
            if let Some(mode) = contrast_mode {
                settings.image.contrast_mode = (*mode).into();
            }
            if let Some(intensity) = contrast_intensity {
                settings.image.contrast_intensity = *intensity;
            }
            if let Some(radius) = dot_radius {
                settings.image.dot_radius = *radius;
            }
            if let Some(share) = threshold_dot {
                settings.image.threshold_dot = *share;
            }
            let grid = import::image_to_grid(image, settings.grid_width, settings.grid_height, &settings.image, *invert)?;
            let mut state = BrailleEditState::from_grid(grid);
            apply_settings(&mut state, &settings);
            state
        }
    };
    state.mark_saved();

    if args.preview {
        eprintln!("{}", state.grid().to_unicode_string());
    }
    let bytes = state.export_bytes(settings.fallback_byte);
    write_output(&bytes, args.output.as_deref())
}

fn apply_settings(state: &mut BrailleEditState, settings: &Settings) {
    state.set_stroke_width(settings.stroke_width);
    state.set_max_dist_px(settings.max_dist_px);
    state.set_line_ending(settings.line_ending);
}

fn main() -> ExitCode {
    let args = Args::parse();
    let logger = start_logger(args.verbose);
    log::info!("Starting braille_draw {}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if logger.is_some() {
                // duplicated to stderr
                log::error!("{err:#}");
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
