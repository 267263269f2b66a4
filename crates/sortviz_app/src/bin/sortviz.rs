//! sortviz demo binary.
//!
//! Runs a headless playback (or a JSON scenario) and reports what happened.
//! Useful for eyeballing step counts and pacing without a windowed frontend.

use anyhow::Result;
use clap::Parser;
use sortviz_app::{run_scenario, run_to_completion, HeadlessConfig, Scenario, Session, SessionConfig};
use sortviz_core::Algorithm;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Step-logged sorting visualizer, headless runner
#[derive(Parser, Debug)]
#[command(name = "sortviz")]
#[command(about = "Run a recorded sorting visualization headlessly")]
#[command(version)]
struct Args {
    /// Array size (clamped to 10..=160)
    #[arg(long, default_value = "40")]
    size: usize,

    /// Sorting algorithm
    #[arg(long, default_value = "merge", value_parser = ["merge", "quick"])]
    algorithm: String,

    /// Speed multiplier (0.25..=4.0, snapped to 0.25 steps)
    #[arg(long, default_value = "4.0")]
    speed: f32,

    /// RNG seed for the generated array
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Milliseconds between steps at 1x speed
    #[arg(long, default_value = "30")]
    base_interval_ms: u64,

    /// Scenario file to run instead of a plain playback
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let algorithm = match args.algorithm.as_str() {
        "quick" => Algorithm::Quick,
        _ => Algorithm::Merge,
    };

    let config = SessionConfig::default()
        .with_size(args.size)
        .with_algorithm(algorithm)
        .with_speed(args.speed)
        .with_seed(args.seed)
        .with_base_interval(Duration::from_millis(args.base_interval_ms));
    let mut session = Session::new(config)?;

    tracing::info!(
        size = session.size(),
        algorithm = session.algorithm().label(),
        speed = session.speed(),
        "session ready"
    );

    if let Some(path) = &args.scenario {
        let scenario = Scenario::from_path(path)?;
        let outcome = run_scenario(&mut session, &scenario, HeadlessConfig::default())?;
        let report = outcome.report();
        tracing::info!(
            frames = report.frames,
            steps = report.applied_steps,
            "scenario finished"
        );
        if outcome.is_failed() {
            anyhow::bail!(
                "scenario failed: {}",
                report.failure.as_deref().unwrap_or("unknown assertion")
            );
        }
        return Ok(());
    }

    let report = run_to_completion(&mut session, HeadlessConfig::default())?;
    let snapshot = session.frame();
    tracing::info!(
        frames = report.frames,
        steps = report.applied_steps,
        sorted = snapshot.is_sorted(),
        "playback finished"
    );
    Ok(())
}
