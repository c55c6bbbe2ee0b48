//! Pong entry point
//!
//! Handles backend selection and initialization, then runs the game loop.
//!
//! Usage: pong [OPTIONS]

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use pong::platform::{ManualClock, ScriptedInput, SystemClock, TerminalInput};
use pong::renderer::{DeviceSink, NullRenderer, RasterRenderer, TerminalSink};
use pong::{Config, GameLoop, InitError, LoopSummary, Variant};

/// Where frames go and where input comes from
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Backend {
    /// Half-block text in the current terminal
    #[default]
    Terminal,
    /// Raw framebuffer device, keyboard from the terminal
    Framebuffer,
    /// No output; simulates `--ticks` ticks as fast as possible
    Headless,
}

impl Backend {
    fn as_str(&self) -> &'static str {
        match self {
            Backend::Terminal => "terminal",
            Backend::Framebuffer => "framebuffer",
            Backend::Headless => "headless",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pong")]
#[command(version)]
#[command(about = "Two-paddle ball game", long_about = None)]
struct Args {
    /// JSON config file (takes precedence over --variant)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preset to start from
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Output backend
    #[arg(short, long, value_enum, default_value = "terminal")]
    backend: Backend,

    /// Screen width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Screen height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Simulation ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Computer-controlled left paddle
    #[arg(long)]
    left_ai: Option<bool>,

    /// Computer-controlled right paddle
    #[arg(long)]
    right_ai: Option<bool>,

    /// Framebuffer device for the framebuffer backend
    #[arg(long, default_value = "/dev/fb0")]
    device: PathBuf,

    /// Number of ticks to simulate with the headless backend
    #[arg(long, default_value = "1800")]
    ticks: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            println!(
                "Final score {} - {} after {} ticks",
                summary.left_score, summary.right_score, summary.ticks
            );
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("pong: {}", err);
            process::exit(1);
        }
    }
}

/// Config file or preset, then command-line overrides
fn build_config(args: &Args) -> Result<Config, InitError> {
    let mut config = match (&args.config, args.variant) {
        (Some(path), variant) => {
            if let Some(variant) = variant {
                log::warn!(
                    "Ignoring --variant {} in favor of {}",
                    variant.as_str(),
                    path.display()
                );
            }
            Config::load(path)?
        }
        (None, variant) => Config::from_variant(variant.unwrap_or_default()),
    };

    if let Some(width) = args.width {
        config.screen_width = width;
    }
    if let Some(height) = args.height {
        config.screen_height = height;
    }
    if let Some(rate) = args.tick_rate {
        config.tick_rate_hz = rate;
    }
    if let Some(left_ai) = args.left_ai {
        config.left_ai = left_ai;
    }
    if let Some(right_ai) = args.right_ai {
        config.right_ai = right_ai;
    }
    config.validate()?;

    match serde_json::to_string(&config) {
        Ok(json) => log::debug!("Effective config: {}", json),
        Err(e) => log::debug!("Could not serialize config: {}", e),
    }
    Ok(config)
}

fn run(args: &Args) -> Result<LoopSummary, InitError> {
    let config = build_config(args)?;
    let state = config.initial_state();
    let arena = state.arena;
    let options = config.render_options();
    let backend = args.backend.as_str();
    log::info!(
        "Pong starting: {}x{} at {} Hz, {} backend",
        config.screen_width,
        config.screen_height,
        config.tick_rate_hz,
        backend
    );

    let init = |source: io::Error| InitError::backend(backend, source);

    // Each arm drops its loop before returning, restoring the terminal
    let summary = match args.backend {
        Backend::Terminal => {
            let input = TerminalInput::new().map_err(init)?;
            let sink = TerminalSink::new(io::stdout()).map_err(init)?;
            let renderer = RasterRenderer::new(&arena, options, sink);
            GameLoop::new(state, input, renderer, SystemClock::new(), config.tick_rate_hz).run()
        }
        Backend::Framebuffer => {
            let sink = DeviceSink::open(&args.device).map_err(init)?;
            let input = TerminalInput::new().map_err(init)?;
            let renderer = RasterRenderer::new(&arena, options, sink);
            GameLoop::new(state, input, renderer, SystemClock::new(), config.tick_rate_hz).run()
        }
        Backend::Headless => {
            let input = ScriptedInput::idle(args.ticks);
            GameLoop::new(state, input, NullRenderer, ManualClock::new(), config.tick_rate_hz)
                .run()
        }
    };

    log::info!(
        "Stopped after {} ticks, final score {} - {}",
        summary.ticks,
        summary.left_score,
        summary.right_score
    );
    Ok(summary)
}
