use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Ranking score attached to a phrase
pub type Score = i64;

/// Default number of completions kept per prefix
pub const DEFAULT_K_LIMIT: usize = 10;

/// A ranked `(score, phrase)` pair.
///
/// The phrase text is reference counted so that every node on the phrase's
/// path shares one allocation.
///
/// Ordering is the ranking order, greater ranks higher: a higher score wins,
/// and equal scores are won by the lexicographically smaller phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    score: Score,
    phrase: Arc<str>,
}

impl Entry {
    pub fn new(phrase: impl Into<Arc<str>>, score: Score) -> Self {
        Self {
            score,
            phrase: phrase.into(),
        }
    }

    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.phrase.cmp(&self.phrase))
    }
}

/// Configuration for building an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of completions retained per prefix (k)
    pub k_limit: usize,
    /// Column separator between phrase and score in corpus files
    pub separator: char,
    /// Skip corpus lines starting with `#`
    pub skip_comments: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            k_limit: DEFAULT_K_LIMIT,
            separator: '\t',
            skip_comments: true,
        }
    }
}

impl IndexConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k_limit == 0 {
            return Err(Error::InvalidLimit(self.k_limit));
        }
        Ok(())
    }
}
