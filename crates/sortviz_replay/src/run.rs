//! Immutable algorithm run snapshots.

use sortviz_core::{apply_step, Algorithm, Step};

/// One generation of a step log from a frozen input.
///
/// The original input is captured once and never mutated; any visible state
/// is a pure function of `(original, prefix length)` via [`replay_prefix`].
///
/// [`replay_prefix`]: AlgorithmRun::replay_prefix
#[derive(Clone, Debug)]
pub struct AlgorithmRun {
    algorithm: Algorithm,
    original: Vec<u32>,
    steps: Vec<Step>,
}

impl AlgorithmRun {
    /// Generate a run from the current array state.
    pub fn generate(algorithm: Algorithm, input: &[u32]) -> Self {
        let steps = sortviz_algos::generate_steps(algorithm, input);
        tracing::debug!(
            algorithm = algorithm.label(),
            len = input.len(),
            steps = steps.len(),
            "captured algorithm run"
        );
        Self {
            algorithm,
            original: input.to_vec(),
            steps,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The frozen input the log was generated from.
    pub fn original(&self) -> &[u32] {
        &self.original
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps in the log, including the trailing `Done`.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Derive the array state after the first `count` steps.
    ///
    /// `count` is clamped to the log length, so out-of-range positions are
    /// harmless rather than faults.
    pub fn replay_prefix(&self, count: usize) -> Vec<u32> {
        let count = count.min(self.steps.len());
        let mut values = self.original.clone();
        for step in &self.steps[..count] {
            apply_step(&mut values, step);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_prefix_zero_is_the_original() {
        let run = AlgorithmRun::generate(Algorithm::Merge, &[3, 1, 2]);
        assert_eq!(run.replay_prefix(0), vec![3, 1, 2]);
    }

    #[test]
    fn replay_full_log_sorts() {
        let run = AlgorithmRun::generate(Algorithm::Quick, &[3, 1, 2]);
        assert_eq!(run.replay_prefix(run.len()), vec![1, 2, 3]);
    }

    #[test]
    fn replay_prefix_clamps_past_the_end() {
        let run = AlgorithmRun::generate(Algorithm::Merge, &[2, 1]);
        assert_eq!(run.replay_prefix(run.len() + 100), vec![1, 2]);
    }

    #[test]
    fn original_survives_generation() {
        let input = vec![5, 4, 3, 2, 1];
        let run = AlgorithmRun::generate(Algorithm::Quick, &input);
        assert_eq!(run.original(), &input[..]);
        assert_eq!(input, vec![5, 4, 3, 2, 1]);
    }
}
