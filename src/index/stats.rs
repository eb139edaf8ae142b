use crate::index::node::Node;
use crate::index::trie::AutocompleteIndex;
use serde::Serialize;
use std::io::{self, Write};

/// Shape of an index, gathered by walking the whole tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Completions retained per prefix
    pub k: usize,
    /// Phrases inserted (duplicates counted)
    pub phrases: usize,
    /// Trie nodes including the root
    pub nodes: usize,
    /// Entries held across all nodes
    pub retained_entries: usize,
    /// Longest path from the root, in symbols
    pub max_depth: usize,
}

impl IndexStats {
    pub fn collect(index: &AutocompleteIndex) -> Self {
        let mut stats = IndexStats {
            k: index.k(),
            phrases: index.len(),
            ..Default::default()
        };

        // Explicit stack: phrases can be long enough to blow the call stack
        let mut stack: Vec<(&Node, usize)> = vec![(index.root(), 0)];
        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            stats.retained_entries += node.best().len();
            stats.max_depth = stats.max_depth.max(depth);
            stack.extend(node.children().map(|(_, child)| (child, depth + 1)));
        }

        stats
    }

    /// Average entries per node, at most `k`
    pub fn fill_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.retained_entries as f64 / self.nodes as f64
        }
    }

    /// Print a human readable table
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Index Statistics")?;
        writeln!(out, "================")?;
        writeln!(out)?;
        writeln!(out, "K limit:          {}", self.k)?;
        writeln!(out, "Phrases:          {}", self.phrases)?;
        writeln!(out, "Nodes:            {}", self.nodes)?;
        writeln!(out, "Retained entries: {}", self.retained_entries)?;
        writeln!(out, "Entries per node: {:.2}", self.fill_ratio())?;
        writeln!(out, "Max depth:        {}", self.max_depth)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index_has_only_root() {
        let index = AutocompleteIndex::new(3).unwrap();
        let stats = index.stats();
        assert_eq!(
            stats,
            IndexStats {
                k: 3,
                phrases: 0,
                nodes: 1,
                retained_entries: 0,
                max_depth: 0,
            }
        );
        assert_eq!(stats.fill_ratio(), 0.0);
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let mut index = AutocompleteIndex::new(1).unwrap();
        index.insert("to", 1);
        index.insert("tea", 2);
        index.insert("ten", 3);

        let stats = index.stats();
        // root, t, to, te, tea, ten
        assert_eq!(stats.nodes, 6);
        assert_eq!(stats.retained_entries, 6);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.phrases, 3);
    }

    #[test]
    fn test_print_table() {
        let mut index = AutocompleteIndex::new(2).unwrap();
        index.insert("ab", 1);

        let mut out = Vec::new();
        index.stats().print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Nodes:            3"));
        assert!(text.contains("Max depth:        2"));
    }
}
