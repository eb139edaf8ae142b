use crate::index::topk::TopK;
use crate::index::types::Entry;
use ahash::AHashMap;
use std::fmt;

/// One prefix position in the trie.
///
/// Each node owns its children and the best `k` entries among all phrases
/// whose path runs through it.
pub struct Node {
    children: AHashMap<char, Node>,
    best: TopK<Entry>,
}

impl Node {
    pub fn new(k: usize) -> Self {
        Self {
            children: AHashMap::new(),
            best: TopK::new(k),
        }
    }

    /// Child for `symbol`, if any phrase has passed through it.
    #[inline]
    pub fn child(&self, symbol: char) -> Option<&Node> {
        self.children.get(&symbol)
    }

    /// Child for `symbol`, created on first use.
    #[inline]
    pub fn child_or_insert(&mut self, symbol: char) -> &mut Node {
        let k = self.best.capacity();
        self.children.entry(symbol).or_insert_with(|| Node::new(k))
    }

    /// Offer an entry to this node's ranking. Returns true if it was kept.
    #[inline]
    pub fn offer(&mut self, entry: Entry) -> bool {
        self.best.offer(entry)
    }

    /// Retained entries, best first.
    pub fn ranked(&self) -> Vec<&Entry> {
        self.best.ranked()
    }

    pub fn best(&self) -> &TopK<Entry> {
        &self.best
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &Node)> {
        self.children.iter().map(|(c, n)| (*c, n))
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Detach and return all children.
    pub(crate) fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
            .into_iter()
            .map(|(_, child)| child)
            .collect()
    }
}

// Summarizes instead of recursing into the subtree
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("entries", &self.best.len())
            .field("capacity", &self.best.capacity())
            .field("children", &self.children.len())
            .finish()
    }
}
