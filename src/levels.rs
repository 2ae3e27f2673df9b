use slotmap::DefaultKey;
use std::mem;

/// Double-buffered index of the nodes that may be extended by the next symbol.
///
/// Both buffers hold one slot per remaining depth `0..max`. While a symbol is
/// processed the `present` buffer is only read and the `next` buffer is only
/// written, so a node created during a step is never extended again in that
/// same step. [`swap`](Self::swap) publishes `next` as the new `present`.
#[derive(Debug)]
pub(crate) struct ActiveLevels {
    present: Vec<Vec<DefaultKey>>,
    next: Vec<Vec<DefaultKey>>,
}

/// Write half of [`ActiveLevels`] for the step in progress.
pub(crate) struct NextLevels<'a>(&'a mut [Vec<DefaultKey>]);

impl NextLevels<'_> {
    /// Registers a node produced in the current step.
    pub(crate) fn insert(&mut self, remaining_depth: usize, key: DefaultKey) {
        let level = &mut self.0[remaining_depth];
        // One suffix of each length ends at the current position.
        debug_assert!(level.is_empty(), "level {remaining_depth} already filled");
        level.push(key);
    }
}

impl ActiveLevels {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            present: vec![Vec::new(); max_depth],
            next: vec![Vec::new(); max_depth],
        }
    }

    /// Splits the index for one step: the nodes produced by the previous step
    /// (largest remaining depth first) and the empty buffer for this step.
    pub(crate) fn begin(&mut self) -> (impl Iterator<Item = DefaultKey> + '_, NextLevels<'_>) {
        let present = self.present.iter().rev().flatten().copied();
        (present, NextLevels(&mut self.next))
    }

    /// Makes this step's nodes eligible for the next step and drops the old ones.
    pub(crate) fn swap(&mut self) {
        mem::swap(&mut self.present, &mut self.next);
        for level in &mut self.next {
            level.clear();
        }
    }

    /// Number of nodes eligible for the next step.
    pub(crate) fn len(&self) -> usize {
        self.present.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn keys(n: usize) -> Vec<DefaultKey> {
        let mut map = SlotMap::new();
        (0..n).map(|i| map.insert(i)).collect()
    }

    fn present(levels: &mut ActiveLevels) -> Vec<DefaultKey> {
        levels.begin().0.collect()
    }

    #[test]
    fn test_new_is_empty() {
        let mut levels = ActiveLevels::new(3);
        assert_eq!(levels.len(), 0);
        assert!(present(&mut levels).is_empty());
    }

    #[test]
    fn test_inserted_nodes_hidden_until_swap() {
        let k = keys(2);
        let mut levels = ActiveLevels::new(3);

        let (active, mut next) = levels.begin();
        next.insert(1, k[1]);
        next.insert(2, k[0]);
        assert_eq!(active.count(), 0);

        levels.swap();
        assert_eq!(present(&mut levels), vec![k[0], k[1]]);
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_swap_discards_previous_step() {
        let k = keys(2);
        let mut levels = ActiveLevels::new(2);

        levels.begin().1.insert(1, k[0]);
        levels.swap();
        levels.begin().1.insert(0, k[1]);
        levels.swap();

        assert_eq!(present(&mut levels), vec![k[1]]);
        assert_eq!(levels.len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already filled")]
    fn test_duplicate_level_in_one_step() {
        let k = keys(2);
        let mut levels = ActiveLevels::new(2);
        let (_, mut next) = levels.begin();
        next.insert(0, k[0]);
        next.insert(0, k[1]);
    }
}
