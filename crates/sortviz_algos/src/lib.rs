//! Step log generators
//!
//! Each generator is a pure pass: it copies the input, runs the textbook
//! algorithm on the private copy, and records every comparison and mutation
//! as a [`Step`]. The caller's slice is never touched; the returned log is
//! the only output, and it always terminates in exactly one [`Step::Done`].
//!
//! Replaying the full log against a copy of the same input with
//! [`sortviz_core::apply_step`] yields the ascending-sorted sequence.

pub mod merge;
pub mod quick;

pub use merge::merge_sort_steps;
pub use quick::quick_sort_steps;

use sortviz_core::{Algorithm, Step};

/// Generate the step log for `input` with the selected algorithm.
pub fn generate_steps(algorithm: Algorithm, input: &[u32]) -> Vec<Step> {
    let steps = match algorithm {
        Algorithm::Merge => merge_sort_steps(input),
        Algorithm::Quick => quick_sort_steps(input),
    };
    tracing::debug!(
        algorithm = algorithm.label(),
        len = input.len(),
        steps = steps.len(),
        "generated step log"
    );
    steps
}
