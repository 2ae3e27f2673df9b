use crate::trie::SequenceTrie;
use ahash::AHashMap as HashMap;
use std::hash::Hash;
use tracing::debug;

/// Recurring sequences and their occurrence counts.
///
/// Only sequences seen at least twice with a length inside the configured
/// range are present. Equality compares the mappings, ignoring order.
#[derive(Debug, Clone)]
pub struct SequenceReport<T> {
    counts: HashMap<Vec<T>, usize>,
}

impl<T: Hash + Eq> SequenceReport<T> {
    /// Builds a report from raw counts, dropping sequences seen fewer than twice.
    pub(crate) fn recurring(mut counts: HashMap<Vec<T>, usize>) -> Self {
        counts.retain(|_, count| *count >= 2);
        Self { counts }
    }

    /// Occurrence count of `sequence`, if it is reported.
    pub fn get(&self, sequence: &[T]) -> Option<usize> {
        self.counts.get(sequence).copied()
    }

    /// Number of reported sequences.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing recurs.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(sequence, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        self.counts.iter().map(|(seq, &count)| (seq.as_slice(), count))
    }

    /// Consumes the report, returning the underlying map.
    pub fn into_inner(self) -> HashMap<Vec<T>, usize> {
        self.counts
    }
}

impl<T: Hash + Eq + Ord + Clone> SequenceReport<T> {
    /// The `k` most frequent sequences.
    ///
    /// Ties are broken by longer sequences first, then by symbol order, so the
    /// result does not depend on map iteration order.
    pub fn most_common(&self, k: usize) -> Vec<(Vec<T>, usize)> {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by(|(a_seq, a_count), (b_seq, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| b_seq.len().cmp(&a_seq.len()))
                .then_with(|| a_seq.cmp(b_seq))
        });
        entries
            .into_iter()
            .take(k)
            .map(|(seq, &count)| (seq.clone(), count))
            .collect()
    }
}

impl<T: Hash + Eq> PartialEq for SequenceReport<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts.len() == other.counts.len()
            && self
                .counts
                .iter()
                .all(|(seq, count)| other.counts.get(seq) == Some(count))
    }
}

impl<T: Hash + Eq> Eq for SequenceReport<T> {}

impl<T> IntoIterator for SequenceReport<T> {
    type Item = (Vec<T>, usize);
    type IntoIter = std::collections::hash_map::IntoIter<Vec<T>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<T: Hash + Eq + Clone> SequenceTrie<T> {
    /// Collects every recurring sequence whose length is within the range.
    ///
    /// Walks all nodes ever created, not just the active ones, and rebuilds
    /// each reported sequence from its parent chain. Nothing is cached between
    /// calls.
    pub fn report(&self) -> SequenceReport<T> {
        let span = self.range.span();
        let counts: HashMap<Vec<T>, usize> = self
            .arena
            .iter()
            .filter(|(_, node)| node.count >= 2 && node.remaining_depth <= span)
            .map(|(key, node)| (self.arena.sequence(key), node.count))
            .collect();

        debug!(
            nodes = self.arena.len(),
            reported = counts.len(),
            "reported recurring sequences"
        );
        SequenceReport { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_of<T: Hash + Eq + Clone>(input: &[T], min: usize, max: usize) -> SequenceReport<T> {
        let mut trie = SequenceTrie::new(min, max).unwrap();
        trie.extend(input.iter().cloned());
        trie.report()
    }

    #[test]
    fn test_empty_input() {
        assert!(report_of::<u8>(&[], 1, 3).is_empty());
    }

    #[test]
    fn test_all_zeros() {
        let report = report_of(&[0, 0, 0, 0], 2, 4);
        assert_eq!(report.len(), 2);
        assert_eq!(report.get(&[0, 0]), Some(3));
        assert_eq!(report.get(&[0, 0, 0]), Some(2));
        assert_eq!(report.get(&[0, 0, 0, 0]), None);
        assert_eq!(report.get(&[0]), None);
    }

    #[test]
    fn test_alternating_pairs() {
        let report = report_of(&[0, 1, 0, 1], 2, 2);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(&[0, 1]), Some(2));
        assert_eq!(report.get(&[1, 0]), None);
    }

    #[test]
    fn test_distinct_symbols() {
        assert!(report_of(&[0, 1, 2, 3], 1, 4).is_empty());
        assert!(report_of(&[0, 1, 2, 3], 2, 2).is_empty());
    }

    #[test]
    fn test_oversized_window() {
        let report = report_of(&['x', 'y', 'x', 'y'], 1, 100);
        assert_eq!(report.get(&['x']), Some(2));
        assert_eq!(report.get(&['y']), Some(2));
        assert_eq!(report.get(&['x', 'y']), Some(2));
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_report_is_repeatable() {
        let mut trie = SequenceTrie::new(1, 3).unwrap();
        trie.extend("abracadabra".chars());
        assert_eq!(trie.report(), trie.report());
    }

    #[test]
    fn test_report_reflects_later_input() {
        let mut trie = SequenceTrie::new(2, 2).unwrap();
        trie.extend("ab".chars());
        assert!(trie.report().is_empty());

        trie.extend("ab".chars());
        assert_eq!(trie.report().get(&['a', 'b']), Some(2));
    }

    #[test]
    fn test_most_common() {
        let report = report_of(&"abababcc".chars().collect::<Vec<_>>(), 1, 3);
        let top = report.most_common(3);

        // a, b and ab all occur three times; longer first, then by symbol
        assert_eq!(top[0], (vec!['a', 'b'], 3));
        assert_eq!(top[1], (vec!['a'], 3));
        assert_eq!(top[2], (vec!['b'], 3));
        assert_eq!(report.most_common(100).len(), report.len());
    }

    #[test]
    fn test_recurring_filter() {
        let mut counts = HashMap::new();
        counts.insert(vec![1], 1);
        counts.insert(vec![2], 2);
        let report = SequenceReport::recurring(counts);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(&[2]), Some(2));
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a = HashMap::new();
        a.insert(vec![1, 2], 2);
        a.insert(vec![3], 4);
        let mut b = HashMap::new();
        b.insert(vec![3], 4);
        b.insert(vec![1, 2], 2);
        assert_eq!(SequenceReport::recurring(a), SequenceReport::recurring(b));
    }
}
