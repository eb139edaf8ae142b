#![no_main]

use libfuzzer_sys::fuzz_target;
use topk_trie::{CorpusLoader, IndexConfig};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must parse or fail cleanly, never panic
    let config = IndexConfig::default();
    let _ = CorpusLoader::new(&config).parse(data);
});
