//! Headless scenario running.
//!
//! Scenarios are JSON step lists (waits, ticks, intents, assertions) played
//! against a [`Session`] on a fixed frame cadence, with no window attached.
//! Used by the demo binary and the integration tests.

use crate::session::Session;
use anyhow::Result;
use serde::Deserialize;
use sortviz_core::ControlIntent;
use sortviz_replay::ReplayState;
use std::path::Path;
use std::time::Duration;

/// Scenario loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
}

/// Sequence of headless steps.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One headless step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Run frames for roughly `ms` of wall time at the configured tick.
    Wait { ms: u64 },
    /// Run exactly `frames` frames.
    Tick { frames: u32 },
    /// Feed one control intent into the session.
    Intent { intent: ControlIntent },
    /// Fail unless the visible array is ascending.
    AssertSorted,
    /// Fail unless playback has reached the end of the log.
    AssertFinished,
}

/// Frame cadence for headless runs.
#[derive(Clone, Copy, Debug)]
pub struct HeadlessConfig {
    /// Wall time between frames.
    pub tick: Duration,
    /// Upper bound on total frames, so a stalled run terminates.
    pub max_frames: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(2),
            max_frames: 200_000,
        }
    }
}

/// What a headless run did.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub frames: u64,
    pub applied_steps: u64,
    /// Message for the first failed assertion, if any.
    pub failure: Option<String>,
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: RunReport },
    Failed { report: RunReport },
}

impl RunOutcome {
    pub fn report(&self) -> &RunReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute a scenario against a session.
pub fn run_scenario(
    session: &mut Session,
    scenario: &Scenario,
    cfg: HeadlessConfig,
) -> Result<RunOutcome> {
    let mut report = RunReport::default();

    for (step_index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::Wait { ms } => {
                let tick_ms = cfg.tick.as_millis().max(1) as u64;
                let frames = ms.div_ceil(tick_ms);
                run_frames(session, frames, cfg, &mut report)?;
            }
            ScenarioStep::Tick { frames } => {
                run_frames(session, u64::from(*frames), cfg, &mut report)?;
            }
            ScenarioStep::Intent { intent } => {
                session.handle(*intent);
            }
            ScenarioStep::AssertSorted => {
                let snap = session.frame();
                report.frames += 1;
                if !snap.is_sorted() {
                    report.failure =
                        Some(format!("step {step_index}: array is not sorted"));
                    return Ok(RunOutcome::Failed { report });
                }
            }
            ScenarioStep::AssertFinished => {
                let snap = session.frame();
                report.frames += 1;
                if snap.state != ReplayState::Finished {
                    report.failure = Some(format!(
                        "step {step_index}: expected finished playback, got {:?}",
                        snap.state
                    ));
                    return Ok(RunOutcome::Failed { report });
                }
            }
        }
    }

    Ok(RunOutcome::Passed { report })
}

/// Play the session's current run to completion.
pub fn run_to_completion(session: &mut Session, cfg: HeadlessConfig) -> Result<RunReport> {
    let mut report = RunReport::default();

    if session.state() != ReplayState::Playing {
        session.handle(ControlIntent::TogglePlay);
    }
    while session.state() == ReplayState::Playing {
        anyhow::ensure!(
            report.frames < cfg.max_frames,
            "playback did not finish within {} frames",
            cfg.max_frames
        );
        step_frame(session, cfg, &mut report);
    }

    tracing::info!(
        frames = report.frames,
        steps = report.applied_steps,
        "headless playback finished"
    );
    Ok(report)
}

fn run_frames(
    session: &mut Session,
    frames: u64,
    cfg: HeadlessConfig,
    report: &mut RunReport,
) -> Result<()> {
    for _ in 0..frames {
        anyhow::ensure!(
            report.frames < cfg.max_frames,
            "scenario exceeded the {} frame budget",
            cfg.max_frames
        );
        step_frame(session, cfg, report);
    }
    Ok(())
}

fn step_frame(session: &mut Session, cfg: HeadlessConfig, report: &mut RunReport) {
    let before = session.cursor();
    let snap = session.frame();
    report.frames += 1;
    report.applied_steps += (snap.cursor - before) as u64;
    if !cfg.tick.is_zero() {
        std::thread::sleep(cfg.tick);
    }
}
