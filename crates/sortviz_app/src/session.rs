//! The session: single owner of the player, the chart, and the settings.

use crate::values::ValueSource;
use serde::Serialize;
use sortviz_core::{clamp_size, snap_speed, Algorithm, ControlIntent, DrawContext, Step};
use sortviz_charts::BarChartModel;
use sortviz_replay::{ReplayPlayer, ReplayState};
use std::time::Duration;

/// Session construction settings.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Initial array size (clamped to the control range).
    pub size: usize,
    pub algorithm: Algorithm,
    /// Initial speed multiplier (snapped to the control grid).
    pub speed: f32,
    /// Time between steps at 1x speed.
    pub base_interval: Duration,
    /// RNG seed for array generation.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 40,
            algorithm: Algorithm::Merge,
            speed: 1.0,
            base_interval: sortviz_replay::clock::DEFAULT_BASE_INTERVAL,
            seed: 0,
        }
    }
}

impl SessionConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_base_interval(mut self, base_interval: Duration) -> Self {
        self.base_interval = base_interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Read-only view of one frame, handed to renderers and reports.
#[derive(Clone, Debug, Serialize)]
pub struct FrameSnapshot {
    pub values: Vec<u32>,
    pub cursor: usize,
    pub step: Option<Step>,
    pub state: ReplayState,
    pub progress: f32,
}

impl FrameSnapshot {
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Owns all mutable visualizer state and exposes it only through intents
/// and read-only frame snapshots.
pub struct Session {
    size: usize,
    source: ValueSource,
    player: ReplayPlayer,
    chart: BarChartModel,
}

impl Session {
    pub fn new(config: SessionConfig) -> anyhow::Result<Self> {
        let size = clamp_size(config.size);
        let mut source = ValueSource::seeded(config.seed);
        let values = source.next_values(size);
        let mut player = ReplayPlayer::new(values.clone(), config.algorithm, config.base_interval);
        player.set_speed(config.speed);
        let chart = BarChartModel::new(values)?;
        Ok(Self {
            size,
            source,
            player,
            chart,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn algorithm(&self) -> Algorithm {
        self.player.algorithm()
    }

    pub fn speed(&self) -> f32 {
        self.player.speed()
    }

    pub fn state(&self) -> ReplayState {
        self.player.state()
    }

    pub fn values(&self) -> &[u32] {
        self.player.values()
    }

    pub fn cursor(&self) -> usize {
        self.player.cursor()
    }

    /// Apply one control intent.
    pub fn handle(&mut self, intent: ControlIntent) {
        tracing::debug!(?intent, "handling intent");
        match intent {
            ControlIntent::Regenerate { size } => {
                self.size = clamp_size(size);
                let values = self.source.next_values(self.size);
                // Stops playback before the new array lands, so a stale log
                // can never touch it.
                self.player.invalidate(values);
            }
            ControlIntent::TogglePlay => self.player.toggle(),
            ControlIntent::StepForward => {
                self.player.step_forward();
            }
            ControlIntent::StepBack => {
                self.player.step_back();
            }
            ControlIntent::SetAlgorithm { algorithm } => self.player.set_algorithm(algorithm),
            ControlIntent::SetSpeed { speed } => self.player.set_speed(snap_speed(speed)),
        }
    }

    /// Tick playback and capture the frame. Call once per host frame.
    pub fn frame(&mut self) -> FrameSnapshot {
        self.player.tick();
        let step = self.player.current_step();
        self.chart.set_frame(self.player.values(), step.as_ref());
        self.chart.caption = Some(format!(
            "{} — {}/{}",
            self.algorithm().label(),
            self.player.cursor(),
            self.player.run().map(|r| r.len()).unwrap_or(0),
        ));
        FrameSnapshot {
            values: self.player.values().to_vec(),
            cursor: self.player.cursor(),
            step,
            state: self.player.state(),
            progress: self.player.progress(),
        }
    }

    /// Render the latest frame into a draw surface.
    pub fn render(&mut self, ctx: &mut dyn DrawContext, w: f32, h: f32) {
        self.chart.render_plot(ctx, w, h);
    }
}
