//! sortviz core types
//!
//! This crate provides the foundational primitives for the sortviz
//! visualizer:
//!
//! - **Step Model**: atomic recorded events of a sorting run
//!   (compare/swap/overwrite/done) and the in-place step applier
//! - **Control Intents**: the vocabulary emitted by control surfaces
//! - **Draw Primitives**: geometry, color, and the `DrawContext` seam
//!   renderers draw through
//!
//! # Example
//!
//! ```rust
//! use sortviz_core::{apply_step, Step};
//!
//! let mut values = vec![5, 3, 8, 1];
//! apply_step(&mut values, &Step::Swap { i: 0, j: 3 });
//! assert_eq!(values, vec![1, 3, 8, 5]);
//!
//! // Observation-only steps leave the array untouched.
//! apply_step(&mut values, &Step::Compare { i: 1, j: 2 });
//! assert_eq!(values, vec![1, 3, 8, 5]);
//! ```

pub mod draw;
pub mod geometry;
pub mod intent;
pub mod step;

pub use draw::{Brush, Color, DrawContext, TextStyle};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use intent::{clamp_size, snap_speed, Algorithm, ControlIntent};
pub use intent::{MAX_ARRAY_SIZE, MAX_SPEED, MIN_ARRAY_SIZE, MIN_SPEED};
pub use step::{apply_step, Step};
