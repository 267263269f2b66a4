//! Quick sort step generator.
//!
//! Lomuto partition with the range's last element as pivot. Every scanned
//! element is recorded as a `Compare` against the pivot's position. A
//! realized exchange is recorded as a `Swap` followed by one `Overwrite` per
//! swapped slot carrying the slot's new value. Exchanges whose source and
//! target slot coincide are skipped entirely.

use sortviz_core::Step;

/// Record a quick sort of `input` as a step log.
pub fn quick_sort_steps(input: &[u32]) -> Vec<Step> {
    let mut work = input.to_vec();
    let mut steps = Vec::new();
    if work.len() > 1 {
        let hi = work.len() - 1;
        sort_range(&mut work, 0, hi, &mut steps);
    }
    steps.push(Step::Done);
    steps
}

// Inclusive bounds; `lo >= hi` ranges are already sorted.
fn sort_range(work: &mut [u32], lo: usize, hi: usize, steps: &mut Vec<Step>) {
    if lo >= hi {
        return;
    }
    let p = partition(work, lo, hi, steps);
    if p > lo {
        sort_range(work, lo, p - 1, steps);
    }
    if p < hi {
        sort_range(work, p + 1, hi, steps);
    }
}

/// Partition `work[lo..=hi]` around the pivot at `hi`; returns the pivot's
/// final position.
fn partition(work: &mut [u32], lo: usize, hi: usize, steps: &mut Vec<Step>) -> usize {
    let pivot = work[hi];
    let mut target = lo;

    for cur in lo..hi {
        steps.push(Step::Compare { i: cur, j: hi });
        if work[cur] <= pivot {
            if cur != target {
                record_swap(work, target, cur, steps);
            }
            target += 1;
        }
    }

    if target != hi {
        record_swap(work, target, hi, steps);
    }
    target
}

fn record_swap(work: &mut [u32], a: usize, b: usize, steps: &mut Vec<Step>) {
    steps.push(Step::Swap { i: a, j: b });
    work.swap(a, b);
    steps.push(Step::Overwrite {
        index: a,
        value: work[a],
    });
    steps.push(Step::Overwrite {
        index: b,
        value: work[b],
    });
}
