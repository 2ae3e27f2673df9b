use crate::trie::SequenceTrie;
use slotmap::DefaultKey;
use std::fmt;
use std::hash::Hash;

/// Dumps the trie one node per line, indented by depth.
///
/// Siblings are listed in the order they were first observed.
impl<T: Hash + Eq + Clone + fmt::Debug> fmt::Display for SequenceTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SequenceTrie: min {}, max {}, {} symbols, {} nodes",
            self.range.min(),
            self.range.max(),
            self.len(),
            self.node_count()
        )?;
        self.fmt_children(f, self.arena.root())
    }
}

impl<T: Hash + Eq + Clone + fmt::Debug> SequenceTrie<T> {
    fn fmt_children(&self, f: &mut fmt::Formatter<'_>, key: DefaultKey) -> fmt::Result {
        let mut children: Vec<DefaultKey> = self.arena[key].children.values().copied().collect();
        children.sort();

        for child in children {
            let node = &self.arena[child];
            if let Some(symbol) = &node.symbol {
                let indent = "  ".repeat(node.depth - 1);
                writeln!(f, "{indent}{symbol:?}: {}", node.count)?;
            }
            self.fmt_children(f, child)?;
        }
        Ok(())
    }
}
