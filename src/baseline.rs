//! Brute-force reference implementation.
//!
//! Stores every entry in a flat list and scans all of it on each query,
//! `O(N * P + M log M)` for `N` entries of which `M` match. It answers the
//! same questions as [`AutocompleteIndex`](crate::AutocompleteIndex) with the
//! same ranking order, which makes it the oracle for tests and the
//! comparison point for benchmarks.

use crate::error::{Error, Result};
use crate::index::types::{Entry, Score};

#[derive(Debug, Clone)]
pub struct BruteForceIndex {
    entries: Vec<Entry>,
    k: usize,
    /// Longest phrase seen, in chars
    max_len: usize,
}

impl BruteForceIndex {
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidLimit(k));
        }
        Ok(Self {
            entries: Vec::new(),
            k,
            max_len: 0,
        })
    }

    pub fn insert(&mut self, phrase: &str, score: Score) {
        self.max_len = self.max_len.max(phrase.chars().count());
        self.entries.push(Entry::new(phrase, score));
    }

    pub fn query(&self, prefix: &str) -> Vec<&str> {
        self.ranked(prefix).into_iter().map(Entry::phrase).collect()
    }

    pub fn query_scored(&self, prefix: &str) -> Vec<(&str, Score)> {
        self.ranked(prefix)
            .into_iter()
            .map(|e| (e.phrase(), e.score()))
            .collect()
    }

    fn ranked(&self, prefix: &str) -> Vec<&Entry> {
        // No phrase is long enough to start with this prefix
        if prefix.chars().count() > self.max_len {
            return Vec::new();
        }

        let mut matching: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| e.phrase().starts_with(prefix))
            .collect();
        matching.sort_unstable_by(|a, b| b.cmp(a));
        matching.truncate(self.k);
        matching
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> Extend<(S, Score)> for BruteForceIndex {
    fn extend<I: IntoIterator<Item = (S, Score)>>(&mut self, iter: I) {
        for (phrase, score) in iter {
            self.insert(phrase.as_ref(), score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(BruteForceIndex::new(0), Err(Error::InvalidLimit(0))));
    }

    #[test]
    fn test_scan_and_sort() {
        let mut baseline = BruteForceIndex::new(2).unwrap();
        baseline.extend([("tape", 100), ("tap water", 10), ("tape grid", 98), ("trie", 80)]);

        assert_eq!(baseline.query("tap"), vec!["tape", "tape grid"]);
        assert_eq!(baseline.query_scored("tr"), vec![("trie", 80)]);
        assert!(baseline.query("x").is_empty());
    }

    #[test]
    fn test_prefix_longer_than_any_phrase() {
        let mut baseline = BruteForceIndex::new(3).unwrap();
        baseline.insert("ab", 1);
        assert!(baseline.query("abc").is_empty());
        assert_eq!(baseline.query("ab"), vec!["ab"]);
    }
}
