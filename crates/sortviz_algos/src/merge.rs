//! Merge sort step generator.
//!
//! Top-down merge sort over half-open ranges. Every merge comparison is
//! recorded as a `Compare` of the two candidates' positions in the full
//! array, followed by an `Overwrite` placing the winner (ties go left, so
//! the variant is stable). Once either half runs out, the leftovers are
//! flushed with `Overwrite` steps alone.

use sortviz_core::Step;

/// Record a merge sort of `input` as a step log.
pub fn merge_sort_steps(input: &[u32]) -> Vec<Step> {
    let mut work = input.to_vec();
    let mut steps = Vec::new();
    let len = work.len();
    sort_range(&mut work, 0, len, &mut steps);
    steps.push(Step::Done);
    steps
}

fn sort_range(work: &mut [u32], lo: usize, hi: usize, steps: &mut Vec<Step>) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(work, lo, mid, steps);
    sort_range(work, mid, hi, steps);
    merge(work, lo, mid, hi, steps);
}

fn merge(work: &mut [u32], lo: usize, mid: usize, hi: usize, steps: &mut Vec<Step>) {
    let left = work[lo..mid].to_vec();
    let right = work[mid..hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;

    while i < left.len() && j < right.len() {
        steps.push(Step::Compare {
            i: lo + i,
            j: mid + j,
        });
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        steps.push(Step::Overwrite { index: k, value });
        work[k] = value;
        k += 1;
    }

    // Leftovers need no comparisons, only placement.
    for &value in &left[i..] {
        steps.push(Step::Overwrite { index: k, value });
        work[k] = value;
        k += 1;
    }
    for &value in &right[j..] {
        steps.push(Step::Overwrite { index: k, value });
        work[k] = value;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(input: &[u32], steps: &[Step]) -> Vec<u32> {
        let mut values = input.to_vec();
        for step in steps {
            sortviz_core::apply_step(&mut values, step);
        }
        values
    }

    #[test]
    fn sorts_a_small_example() {
        let input = [5, 3, 8, 1];
        let steps = merge_sort_steps(&input);
        assert_eq!(replay(&input, &steps), vec![1, 3, 5, 8]);
    }

    #[test]
    fn emits_no_swaps() {
        let steps = merge_sort_steps(&[4, 1, 3, 2, 5]);
        assert!(!steps.iter().any(|s| matches!(s, Step::Swap { .. })));
    }

    #[test]
    fn every_compare_is_followed_by_an_overwrite() {
        let steps = merge_sort_steps(&[6, 2, 9, 1, 5, 5]);
        for pair in steps.windows(2) {
            if matches!(pair[0], Step::Compare { .. }) {
                assert!(matches!(pair[1], Step::Overwrite { .. }));
            }
        }
    }

    #[test]
    fn ties_go_left() {
        // Both halves hold an equal key; the left one must win the compare.
        let input = [2, 2];
        let steps = merge_sort_steps(&input);
        assert_eq!(
            steps,
            vec![
                Step::Compare { i: 0, j: 1 },
                Step::Overwrite { index: 0, value: 2 },
                Step::Overwrite { index: 1, value: 2 },
                Step::Done,
            ]
        );
    }

    #[test]
    fn two_element_log_shape() {
        let steps = merge_sort_steps(&[3, 1]);
        assert_eq!(
            steps,
            vec![
                Step::Compare { i: 0, j: 1 },
                Step::Overwrite { index: 0, value: 1 },
                Step::Overwrite { index: 1, value: 3 },
                Step::Done,
            ]
        );
    }

    #[test]
    fn compare_indices_are_original_positions() {
        // Merging [8] and [1] at the top level must compare indices 2 and 3,
        // not sub-range offsets.
        let steps = merge_sort_steps(&[5, 3, 8, 1]);
        assert!(steps.contains(&Step::Compare { i: 2, j: 3 }));
    }

    #[test]
    fn already_sorted_input_still_compares() {
        let input = [1, 2, 3, 4];
        let steps = merge_sort_steps(&input);
        assert!(steps.iter().any(|s| matches!(s, Step::Compare { .. })));
        assert_eq!(replay(&input, &steps), vec![1, 2, 3, 4]);
    }
}
