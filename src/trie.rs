use crate::error::Result;
use crate::levels::ActiveLevels;
use crate::node::{Extended, NodeArena};
use crate::range::WindowRange;
use std::hash::Hash;
use tracing::{debug, trace};

/// Incremental counter of recurring contiguous subsequences.
///
/// Every distinct sequence of length `1..=max` that has ended at a processed
/// position is stored once, with the number of positions it ended at. Each
/// call to [`advance`](Self::advance) touches at most `max` nodes and never
/// rescans earlier input.
///
/// Symbols must be `Hash + Eq`: symbol equality defines node identity.
#[derive(Debug)]
pub struct SequenceTrie<T> {
    pub(crate) range: WindowRange,
    pub(crate) arena: NodeArena<T>,
    levels: ActiveLevels,
    length: usize,
}

impl<T: Hash + Eq + Clone> SequenceTrie<T> {
    /// Creates an empty trie counting windows of `min..=max` symbols.
    ///
    /// Fails with [`TrieError::InvalidRange`](crate::TrieError::InvalidRange)
    /// when `min < 1` or `max < min`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        Ok(Self::with_range(WindowRange::new(min, max)?))
    }

    /// Creates an empty trie from an already validated range.
    pub fn with_range(range: WindowRange) -> Self {
        debug!(min = range.min(), max = range.max(), "creating sequence trie");
        Self {
            range,
            arena: NodeArena::new(range.max()),
            levels: ActiveLevels::new(range.max()),
            length: 0,
        }
    }

    /// Processes the next symbol of the input.
    ///
    /// Every suffix that ended at the previous position is extended by
    /// `symbol`, then the root is extended to record the one-symbol suffix.
    /// Nodes produced here only become eligible on the following call.
    pub fn advance(&mut self, symbol: T) {
        let mut created = 0usize;
        let mut touched = 0usize;

        let root = self.arena.root();
        let (present, mut next) = self.levels.begin();
        for key in present.chain(std::iter::once(root)) {
            let Some(extended) = self.arena.extend(key, &symbol) else {
                continue;
            };
            if matches!(extended, Extended::Created(_)) {
                created += 1;
            }
            touched += 1;
            let child = extended.key();
            next.insert(self.arena[child].remaining_depth, child);
        }
        self.levels.swap();
        self.length += 1;

        trace!(position = self.length, touched, created, "advanced");
    }

    /// Processes every symbol of `iter` in order.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for symbol in iter {
            self.advance(symbol);
        }
    }

    /// Returns the configured window range.
    pub fn range(&self) -> WindowRange {
        self.range
    }

    /// Returns the number of symbols processed.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if no symbols have been processed.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of distinct sequences stored, regardless of count or length.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Occurrence count of `sequence` so far.
    ///
    /// Returns 0 for the empty sequence, for sequences never seen, and for
    /// sequences longer than the configured maximum.
    pub fn count(&self, sequence: &[T]) -> usize {
        if sequence.is_empty() {
            return 0;
        }
        self.arena
            .find(sequence)
            .map_or(0, |key| self.arena[key].count)
    }

    /// Returns structural statistics.
    pub fn stats(&self) -> TrieStats {
        let mut nodes_per_depth = vec![0; self.range.max()];
        for (_, node) in self.arena.iter() {
            nodes_per_depth[node.depth - 1] += 1;
        }

        TrieStats {
            input_length: self.length,
            num_nodes: self.arena.len(),
            nodes_per_depth,
            active_nodes: self.levels.len(),
        }
    }
}

/// Structural statistics about a [`SequenceTrie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieStats {
    /// Number of symbols processed
    pub input_length: usize,
    /// Distinct sequences stored
    pub num_nodes: usize,
    /// Distinct sequences per length; index 0 holds length 1
    pub nodes_per_depth: Vec<usize>,
    /// Nodes eligible to be extended by the next symbol
    pub active_nodes: usize,
}
