//! Brute-force reference counter.
//!
//! Materializes every window ending at every position. Quadratic in the
//! window span and only meant as a cross-check and benchmark baseline for
//! [`SequenceTrie`](crate::SequenceTrie).

use crate::range::WindowRange;
use crate::report::SequenceReport;
use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// Counts every window `input[j..=i]` whose length lies in `range`, keeping
/// those that occur at least twice.
pub fn count_windows<T: Hash + Eq + Clone>(input: &[T], range: WindowRange) -> SequenceReport<T> {
    let mut counts: HashMap<Vec<T>, usize> = HashMap::new();

    for end in 0..input.len() {
        let len = end + 1;
        if len < range.min() {
            continue;
        }
        let first = len.saturating_sub(range.max());
        let last = len - range.min();
        for start in first..=last {
            *counts.entry(input[start..=end].to_vec()).or_insert(0) += 1;
        }
    }

    SequenceReport::recurring(counts)
}
