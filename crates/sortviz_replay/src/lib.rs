//! Replay controller for step-logged sorting runs.
//!
//! The visible array is never sorted in place. A run is generated once as an
//! immutable [`AlgorithmRun`] (frozen input + step log), and the
//! [`ReplayPlayer`] derives every visible state by applying a prefix of the
//! log. That indirection is what makes pause/resume, single-stepping, and
//! backward stepping consistent by construction:
//!
//! - forward: apply `log[cursor]`, increment the cursor
//! - backward: decrement the cursor, replay `0..cursor` onto a fresh copy of
//!   the frozen input
//! - pause: stop the pacing clock; the cursor stays exactly where the last
//!   applied step left it
//!
//! Playback is cooperative: the host calls [`ReplayPlayer::tick`] every
//! frame and the [`PaceClock`] decides when one more step is due. Nothing
//! blocks and at most one step is applied per tick.

pub mod clock;
pub mod player;
pub mod run;

pub use clock::PaceClock;
pub use player::{ReplayPlayer, ReplayState};
pub use run::AlgorithmRun;
