//! # topk-trie - prefix autocomplete with ranked completions
//!
//! Answers "which `k` stored phrases with the highest score start with this
//! prefix?" without scanning the collection. Each node of a trie keeps its
//! own bounded top-`k` ranking, updated as phrases are inserted, so a query
//! is a walk down the prefix plus a sort of at most `k` entries.
//!
//! ## Architecture
//!
//! - [`index`] - the trie, its per-node [`TopK`] rankings, statistics and
//!   corpus loading
//! - [`baseline`] - brute-force scan used as a reference
//! - [`output`] - result formatting (colored text or JSON)
//! - [`error`] - error type shared by the library
//! - [`utils`] - progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use topk_trie::AutocompleteIndex;
//!
//! let mut index = AutocompleteIndex::new(3).unwrap();
//! index.insert("tape", 100);
//! index.insert("tape grid", 98);
//! index.insert("tap water", 10);
//! index.insert("trie", 80);
//!
//! assert_eq!(index.query("tap"), vec!["tape", "tape grid", "tap water"]);
//! assert_eq!(index.query("x"), Vec::<&str>::new());
//! ```
//!
//! ## Ranking
//!
//! Higher scores come first. Equal scores are ordered by phrase, smallest
//! first, so results never depend on insertion order.

pub mod baseline;
pub mod error;
pub mod index;
pub mod output;
pub mod utils;

pub use baseline::BruteForceIndex;
pub use error::{Error, Result};
pub use index::{AutocompleteIndex, CorpusLoader, Entry, IndexConfig, IndexStats, Score, TopK};
