pub mod corpus;
pub mod node;
pub mod stats;
pub mod topk;
pub mod trie;
pub mod types;

pub use corpus::CorpusLoader;
pub use node::Node;
pub use stats::IndexStats;
pub use topk::TopK;
pub use trie::AutocompleteIndex;
pub use types::*;
