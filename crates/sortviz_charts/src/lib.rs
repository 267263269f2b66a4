//! Bar chart rendering for sortviz.
//!
//! The chart is a passive collaborator: each frame the session hands it a
//! values snapshot and the step at the playback cursor, and the chart turns
//! that into background, grid, and one bar per element through the
//! [`sortviz_core::DrawContext`] seam. Highlighting follows the step kind:
//! compared indices, swapped indices, and the overwritten index each get
//! their own color; everything else renders in the base bar color.

pub mod bar;
pub mod common;
pub mod view;

pub use bar::{BarChartModel, BarChartStyle, Highlight};
pub use view::{ChartView, Domain1D};
