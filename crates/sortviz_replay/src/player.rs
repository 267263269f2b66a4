//! The replay player: cursor tracking, playback, and reconstruction.

use crate::clock::PaceClock;
use crate::run::AlgorithmRun;
use serde::{Deserialize, Serialize};
use sortviz_core::{apply_step, Algorithm, Step};
use std::time::Duration;

/// Current playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayState {
    /// No run generated yet (or the last one was invalidated).
    Idle,
    /// The pacing clock is driving steps.
    Playing,
    /// A run exists but the clock is stopped.
    Paused,
    /// The cursor reached the end of the log.
    Finished,
}

/// Owns the working array, the active run, and the playback cursor.
///
/// Single-writer by construction: renderers receive copies or read-only
/// views, never shared mutable references. The cursor counts steps already
/// applied to the working array and is always within `0..=log.len()`.
pub struct ReplayPlayer {
    values: Vec<u32>,
    algorithm: Algorithm,
    run: Option<AlgorithmRun>,
    cursor: usize,
    state: ReplayState,
    clock: PaceClock,
}

impl ReplayPlayer {
    pub fn new(values: Vec<u32>, algorithm: Algorithm, base_interval: Duration) -> Self {
        Self {
            values,
            algorithm,
            run: None,
            cursor: 0,
            state: ReplayState::Idle,
            clock: PaceClock::new(base_interval),
        }
    }

    /// The working (visible) array.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// Steps applied so far; `0..=log.len()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The active run, if one has been generated.
    pub fn run(&self) -> Option<&AlgorithmRun> {
        self.run.as_ref()
    }

    /// The most recently applied step (what the renderer highlights).
    pub fn current_step(&self) -> Option<Step> {
        let run = self.run.as_ref()?;
        if self.cursor == 0 {
            return None;
        }
        run.steps().get(self.cursor - 1).copied()
    }

    /// Fraction of the log applied, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        match &self.run {
            Some(run) if run.len() > 0 => self.cursor as f32 / run.len() as f32,
            _ => 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.clock.speed()
    }

    /// Re-pace playback without touching the run or the cursor.
    pub fn set_speed(&mut self, speed: f32) {
        self.clock.set_speed(speed);
    }

    /// Generate a run from the current working array if none is active.
    pub fn ensure_run(&mut self) {
        if self.run.is_none() {
            self.run = Some(AlgorithmRun::generate(self.algorithm, &self.values));
            self.cursor = 0;
        }
    }

    /// Apply `log[cursor]` and advance. No-op at the end of the log.
    ///
    /// Returns `true` if a step was applied.
    pub fn advance(&mut self) -> bool {
        let Some(run) = self.run.as_ref() else {
            return false;
        };
        let Some(step) = run.steps().get(self.cursor).copied() else {
            return false;
        };
        apply_step(&mut self.values, &step);
        self.cursor += 1;
        true
    }

    /// Start playback. Playing while already playing is a no-op; a finished
    /// run stays finished until invalidated.
    pub fn play(&mut self) {
        match self.state {
            ReplayState::Idle | ReplayState::Paused => {
                self.ensure_run();
                if self.at_end() {
                    self.state = ReplayState::Finished;
                    return;
                }
                self.clock.start();
                self.state = ReplayState::Playing;
                tracing::debug!(cursor = self.cursor, "playback started");
            }
            ReplayState::Playing | ReplayState::Finished => {}
        }
    }

    /// Stop the cadence. The working array and cursor stay exactly as the
    /// last applied step left them.
    pub fn pause(&mut self) {
        if self.state == ReplayState::Playing {
            self.clock.stop();
            self.state = ReplayState::Paused;
            tracing::debug!(cursor = self.cursor, "playback paused");
        }
    }

    /// Toggle play/pause.
    pub fn toggle(&mut self) {
        match self.state {
            ReplayState::Playing => self.pause(),
            ReplayState::Idle | ReplayState::Paused => self.play(),
            ReplayState::Finished => {}
        }
    }

    /// Drive playback; call every host frame.
    ///
    /// Applies at most one step, and only when one is due. Returns `true`
    /// if the visible state changed.
    pub fn tick(&mut self) -> bool {
        if self.state != ReplayState::Playing {
            return false;
        }
        if !self.clock.poll() {
            return false;
        }
        let advanced = self.advance();
        if self.at_end() {
            self.clock.stop();
            self.state = ReplayState::Finished;
            tracing::debug!(cursor = self.cursor, "playback finished");
        }
        advanced
    }

    /// Apply the next step and pause (generating a run first if needed).
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        self.ensure_run();
        let advanced = self.advance();
        self.state = if self.at_end() {
            ReplayState::Finished
        } else {
            ReplayState::Paused
        };
        advanced
    }

    /// Rewind by one step.
    ///
    /// Steps are not invertible in isolation (a replayed `Swap` would
    /// re-invert, and quick sort records one exchange as three entries), so
    /// backward stepping reconstructs: decrement the cursor, then replay
    /// `0..cursor` onto a fresh copy of the frozen original. O(cursor) per
    /// press, always consistent.
    pub fn step_back(&mut self) -> bool {
        self.pause();
        let Some(run) = self.run.as_ref() else {
            return false;
        };
        if self.cursor == 0 {
            return false;
        }
        let rebuilt = run.replay_prefix(self.cursor - 1);
        self.cursor -= 1;
        self.values = rebuilt;
        self.state = ReplayState::Paused;
        true
    }

    /// Discard the active run and replace the working array.
    ///
    /// Stops playback first so a stale log can never touch the new array.
    pub fn invalidate(&mut self, values: Vec<u32>) {
        self.clock.stop();
        self.run = None;
        self.cursor = 0;
        self.state = ReplayState::Idle;
        self.values = values;
        tracing::debug!(len = self.values.len(), "run invalidated");
    }

    /// Switch algorithms, invalidating the run but keeping the currently
    /// displayed array as the next input.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.algorithm == algorithm {
            return;
        }
        self.algorithm = algorithm;
        let values = std::mem::take(&mut self.values);
        self.invalidate(values);
    }

    fn at_end(&self) -> bool {
        match &self.run {
            Some(run) => self.cursor >= run.len(),
            None => false,
        }
    }
}
