//! Control intent vocabulary
//!
//! Control surfaces (panels, scenarios, the demo binary) emit intents; the
//! session owns all mutable state and is the only consumer.

use serde::{Deserialize, Serialize};

/// Smallest array the controls may request.
pub const MIN_ARRAY_SIZE: usize = 10;
/// Largest array the controls may request.
pub const MAX_ARRAY_SIZE: usize = 160;

/// Slowest playback speed multiplier.
pub const MIN_SPEED: f32 = 0.25;
/// Fastest playback speed multiplier.
pub const MAX_SPEED: f32 = 4.0;

/// Which step log generator to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Merge,
    Quick,
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Merge => "merge sort",
            Algorithm::Quick => "quick sort",
        }
    }
}

/// A user intent emitted by a control surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum ControlIntent {
    /// Generate a fresh random array of `size` elements (clamped to
    /// [`MIN_ARRAY_SIZE`]..=[`MAX_ARRAY_SIZE`]). Invalidates the active run.
    Regenerate { size: usize },
    /// Start playback if idle/paused, pause if playing.
    TogglePlay,
    /// Apply the next step and pause.
    StepForward,
    /// Rewind by one step (full-replay reconstruction) and pause.
    StepBack,
    /// Switch generators. Invalidates the active run.
    SetAlgorithm { algorithm: Algorithm },
    /// Change the speed multiplier (snapped to 0.25 increments). Does not
    /// invalidate the run.
    SetSpeed { speed: f32 },
}

/// Clamp a requested array size to the supported range.
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)
}

/// Snap a speed multiplier to the controls' 0.25 grid and clamp it.
pub fn snap_speed(speed: f32) -> f32 {
    let snapped = (speed / 0.25).round() * 0.25;
    snapped.clamp(MIN_SPEED, MAX_SPEED)
}
