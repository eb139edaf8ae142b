//! Trie with a bounded ranking at every node.
//!
//! Inserting a phrase of length `L` touches `L + 1` nodes (the root plus one
//! per character) and costs `O(L log k)`. A query walks the prefix and sorts
//! at most `k` entries, `O(P + k log k)`, no matter how many phrases share
//! the prefix.

use crate::error::{Error, Result};
use crate::index::node::Node;
use crate::index::stats::IndexStats;
use crate::index::types::{Entry, IndexConfig, Score};
use log::debug;
use std::fmt;

/// Prefix index answering "best `k` phrases starting with this prefix".
pub struct AutocompleteIndex {
    root: Node,
    k: usize,
    phrases: usize,
}

impl AutocompleteIndex {
    /// Create an empty index keeping `k` completions per prefix.
    ///
    /// Fails with [`Error::InvalidLimit`] when `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidLimit(k));
        }
        debug!("creating autocomplete index with k = {}", k);
        Ok(Self {
            root: Node::new(k),
            k,
            phrases: 0,
        })
    }

    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.k_limit)
    }

    /// Insert a phrase with its score.
    ///
    /// The entry is offered to the root and to every node spelling the
    /// phrase. The empty phrase reaches the root only.
    pub fn insert(&mut self, phrase: &str, score: Score) {
        let entry = Entry::new(phrase, score);

        let mut node = &mut self.root;
        node.offer(entry.clone());
        for symbol in phrase.chars() {
            node = node.child_or_insert(symbol);
            node.offer(entry.clone());
        }
        self.phrases += 1;
    }

    /// Best phrases starting with `prefix`, highest score first.
    ///
    /// Returns an empty vector when no inserted phrase starts with `prefix`.
    pub fn query(&self, prefix: &str) -> Vec<&str> {
        match self.find(prefix) {
            Some(node) => node.ranked().into_iter().map(Entry::phrase).collect(),
            None => Vec::new(),
        }
    }

    /// Same as [`query`](Self::query) but keeps the scores.
    pub fn query_scored(&self, prefix: &str) -> Vec<(&str, Score)> {
        match self.find(prefix) {
            Some(node) => node
                .ranked()
                .into_iter()
                .map(|e| (e.phrase(), e.score()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Node spelling `prefix`, if it exists.
    pub fn find(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        for symbol in prefix.chars() {
            node = node.child(symbol)?;
        }
        Some(node)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of completions retained per prefix
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of phrases inserted so far (duplicates counted)
    #[inline]
    pub fn len(&self) -> usize {
        self.phrases
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phrases == 0
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats::collect(self)
    }
}

impl fmt::Debug for AutocompleteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteIndex")
            .field("k", &self.k)
            .field("phrases", &self.phrases)
            .field("root", &self.root)
            .finish()
    }
}

impl Drop for AutocompleteIndex {
    fn drop(&mut self) {
        // Tear the tree down with an explicit stack; the default drop recurses
        // once per symbol of the longest phrase
        let mut pending = self.root.take_children();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

impl<S: AsRef<str>> Extend<(S, Score)> for AutocompleteIndex {
    fn extend<I: IntoIterator<Item = (S, Score)>>(&mut self, iter: I) {
        for (phrase, score) in iter {
            self.insert(phrase.as_ref(), score);
        }
    }
}
