use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};
use std::hash::Hash;

/// One distinct subsequence observed as a suffix of the processed input.
///
/// Nodes live in a [`NodeArena`] and refer to each other through arena keys,
/// so the parent links used for reconstruction never form owning cycles.
#[derive(Debug)]
pub(crate) struct TrieNode<T> {
    /// Last symbol of the sequence. `None` only for the root.
    pub symbol: Option<T>,
    /// Length of the represented sequence.
    pub depth: usize,
    /// How many more symbols this sequence may grow by (`max - depth`).
    pub remaining_depth: usize,
    /// The same sequence with its last symbol removed.
    pub parent: Option<DefaultKey>,
    /// Number of processed positions whose suffix equals this sequence.
    pub count: usize,
    /// One-symbol-longer sequences, keyed by the appended symbol.
    pub children: HashMap<T, DefaultKey>,
}

impl<T> TrieNode<T> {
    fn root(max_depth: usize) -> Self {
        Self {
            symbol: None,
            depth: 0,
            remaining_depth: max_depth,
            parent: None,
            count: 0,
            children: HashMap::new(),
        }
    }
}

/// Outcome of extending a node by one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extended {
    /// The child did not exist and was created with a count of one.
    Created(DefaultKey),
    /// The child already existed and its count was incremented.
    Incremented(DefaultKey),
}

impl Extended {
    pub(crate) fn key(self) -> DefaultKey {
        match self {
            Extended::Created(key) | Extended::Incremented(key) => key,
        }
    }
}

/// Owns every node ever created, the root included.
///
/// Nodes are only ever inserted, never removed.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    nodes: SlotMap<DefaultKey, TrieNode<T>>,
    root: DefaultKey,
}

impl<T: Hash + Eq + Clone> NodeArena<T> {
    pub(crate) fn new(max_depth: usize) -> Self {
        let mut nodes = SlotMap::new();
        let root = nodes.insert(TrieNode::root(max_depth));
        Self { nodes, root }
    }

    pub(crate) fn root(&self) -> DefaultKey {
        self.root
    }

    /// Records one more occurrence of the sequence at `key` followed by `symbol`.
    ///
    /// Returns `None` without touching anything when the node is already at
    /// maximum depth.
    pub(crate) fn extend(&mut self, key: DefaultKey, symbol: &T) -> Option<Extended> {
        let node = &self.nodes[key];
        if node.remaining_depth == 0 {
            return None;
        }

        if let Some(child) = node.children.get(symbol).copied() {
            self.nodes[child].count += 1;
            return Some(Extended::Incremented(child));
        }

        let child = TrieNode {
            symbol: Some(symbol.clone()),
            depth: node.depth + 1,
            remaining_depth: node.remaining_depth - 1,
            parent: Some(key),
            count: 1,
            children: HashMap::new(),
        };
        let child_key = self.nodes.insert(child);
        self.nodes[key].children.insert(symbol.clone(), child_key);
        Some(Extended::Created(child_key))
    }

    /// Finds the node for `sequence` by walking child maps from the root.
    pub(crate) fn find(&self, sequence: &[T]) -> Option<DefaultKey> {
        sequence.iter().try_fold(self.root, |key, symbol| {
            self.nodes[key].children.get(symbol).copied()
        })
    }

    /// Rebuilds the full sequence a node stands for by following parent links.
    pub(crate) fn sequence(&self, key: DefaultKey) -> Vec<T> {
        let mut sequence = Vec::with_capacity(self.nodes[key].depth);
        let mut current = Some(key);
        while let Some(k) = current {
            let node = &self.nodes[k];
            if let Some(symbol) = &node.symbol {
                sequence.push(symbol.clone());
            }
            current = node.parent;
        }
        sequence.reverse();
        sequence
    }

    /// Iterates every node except the root.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (DefaultKey, &TrieNode<T>)> {
        let root = self.root;
        self.nodes.iter().filter(move |(key, _)| *key != root)
    }

    /// Number of nodes excluding the root.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl<T> std::ops::Index<DefaultKey> for NodeArena<T> {
    type Output = TrieNode<T>;

    fn index(&self, key: DefaultKey) -> &Self::Output {
        &self.nodes[key]
    }
}
