//! The step event model.
//!
//! A sorting run is recorded as an ordered log of atomic events. Replaying a
//! prefix of that log against a copy of the original input derives every
//! visible array state; nothing ever mutates the displayed array directly.
//!
//! Logs are total: they terminate in exactly one [`Step::Done`], and every
//! index they carry is in bounds for the input they were generated from.

use serde::{Deserialize, Serialize};

/// One atomic recorded event in a sorting run.
///
/// `Compare` and `Done` are observation-only; `Swap` and `Overwrite` are the
/// only mutating variants. The serialized form is tagged with `type`, e.g.
/// `{"type":"compare","i":0,"j":3}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// The algorithm inspected elements at `i` and `j`.
    Compare { i: usize, j: usize },
    /// Elements at `i` and `j` exchanged places.
    Swap { i: usize, j: usize },
    /// The element at `index` was set to `value`.
    Overwrite { index: usize, value: u32 },
    /// Terminal marker; the log has no further effects.
    Done,
}

impl Step {
    /// Whether this step mutates the array when applied.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Step::Swap { .. } | Step::Overwrite { .. })
    }

    /// Whether this step references index `idx` (used for highlighting).
    pub fn touches(&self, idx: usize) -> bool {
        match *self {
            Step::Compare { i, j } | Step::Swap { i, j } => idx == i || idx == j,
            Step::Overwrite { index, .. } => idx == index,
            Step::Done => false,
        }
    }
}

/// Apply one step's effect to `values` in place.
///
/// `Swap` exchanges the two indexed elements and `Overwrite` stores a value;
/// `Compare` and `Done` are no-ops. Applying the same `Swap` twice inverts
/// it, so callers must apply each step exactly once per logical advance.
///
/// Out-of-bounds indices are programmer error, not user input; they are
/// ignored rather than raised so playback stays robust at log boundaries.
pub fn apply_step(values: &mut [u32], step: &Step) {
    match *step {
        Step::Swap { i, j } => {
            if i < values.len() && j < values.len() {
                values.swap(i, j);
            } else {
                tracing::debug!(i, j, len = values.len(), "ignoring out-of-bounds swap");
            }
        }
        Step::Overwrite { index, value } => {
            if let Some(slot) = values.get_mut(index) {
                *slot = value;
            } else {
                tracing::debug!(index, len = values.len(), "ignoring out-of-bounds overwrite");
            }
        }
        Step::Compare { .. } | Step::Done => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_elements() {
        let mut v = vec![1, 2, 3];
        apply_step(&mut v, &Step::Swap { i: 0, j: 2 });
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    fn swap_twice_inverts() {
        let mut v = vec![1, 2, 3];
        apply_step(&mut v, &Step::Swap { i: 0, j: 2 });
        apply_step(&mut v, &Step::Swap { i: 0, j: 2 });
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn overwrite_sets_value() {
        let mut v = vec![1, 2, 3];
        apply_step(&mut v, &Step::Overwrite { index: 1, value: 9 });
        assert_eq!(v, vec![1, 9, 3]);
    }

    #[test]
    fn observation_steps_do_nothing() {
        let mut v = vec![1, 2, 3];
        apply_step(&mut v, &Step::Compare { i: 0, j: 1 });
        apply_step(&mut v, &Step::Done);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_bounds_is_a_no_op() {
        let mut v = vec![1, 2, 3];
        apply_step(&mut v, &Step::Swap { i: 0, j: 7 });
        apply_step(&mut v, &Step::Overwrite { index: 7, value: 9 });
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn touches_reports_referenced_indices() {
        assert!(Step::Compare { i: 1, j: 4 }.touches(4));
        assert!(!Step::Compare { i: 1, j: 4 }.touches(2));
        assert!(Step::Overwrite { index: 0, value: 1 }.touches(0));
        assert!(!Step::Done.touches(0));
    }

    #[test]
    fn serde_shape_matches_recording_format() {
        let json = serde_json::to_string(&Step::Compare { i: 0, j: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"compare","i":0,"j":3}"#);

        let step: Step = serde_json::from_str(r#"{"type":"overwrite","index":2,"value":7}"#).unwrap();
        assert_eq!(step, Step::Overwrite { index: 2, value: 7 });

        let done: Step = serde_json::from_str(r#"{"type":"done"}"#).unwrap();
        assert_eq!(done, Step::Done);
    }
}
