//! sortviz application glue.
//!
//! Wires the replay player and bar chart behind a single [`Session`] that
//! consumes [`sortviz_core::ControlIntent`]s, plus the pieces needed to run
//! and test it without a window:
//!
//! - **values**: deterministic random array generation (seeded ChaCha8)
//! - **paint**: a recording [`sortviz_core::DrawContext`] for assertions
//! - **headless**: JSON scenarios and a frame-loop runner
//!
//! A windowed backend is a collaborator, not part of this crate: it would
//! own a real `DrawContext`, forward input as intents, and call
//! [`Session::frame`]/[`Session::render`] per display frame.

pub mod headless;
pub mod paint;
pub mod session;
pub mod values;

pub use headless::{run_scenario, run_to_completion, HeadlessConfig, RunOutcome, RunReport};
pub use headless::{Scenario, ScenarioError, ScenarioStep};
pub use paint::{PaintCommand, PaintRecorder};
pub use session::{FrameSnapshot, Session, SessionConfig};
