//! Plane Dash entry point
//!
//! Runs the game loop headless: the autopilot flies, frames and audio cues
//! go to the log, and a JSON summary is printed when the loop ends.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use plane_dash::Game;
use plane_dash::Settings;
use plane_dash::audio::LogAudioSink;
use plane_dash::autopilot::{Autopilot, RESTART_DELAY};
use plane_dash::platform::SystemTimeSource;
use plane_dash::renderer::LogRenderer;

#[derive(Parser)]
#[command(name = "plane-dash")]
#[command(about = "Fly the plane through the rocks (headless autopilot demo)")]
struct Args {
    /// JSON settings file (any subset of fields)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override the obstacle seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Stop after this many crashed runs
    #[arg(long, default_value_t = 3)]
    runs: u32,

    /// Do not sleep between frames
    #[arg(long)]
    uncapped: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    log::info!("Plane Dash starting...");

    let mut game = Game::new(
        settings,
        SystemTimeSource::new(),
        LogAudioSink,
        LogRenderer::default(),
    );
    if args.uncapped {
        game = game.uncapped();
    }

    let mut pilot = Autopilot::new(RESTART_DELAY).with_max_runs(args.runs);
    let summary = game.run(&mut pilot, args.frames);

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serializing run summary")?
    );
    Ok(())
}
