#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use topk_trie::{AutocompleteIndex, BruteForceIndex};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(String, i64),
    Query(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    k: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let k = usize::from(input.k % 16) + 1;
    let mut index = AutocompleteIndex::new(k).unwrap();
    let mut baseline = BruteForceIndex::new(k).unwrap();

    // The trie must agree with a full scan after any sequence of operations
    for op in input.ops {
        match op {
            Op::Insert(phrase, score) => {
                index.insert(&phrase, score);
                baseline.insert(&phrase, score);
            }
            Op::Query(prefix) => {
                assert_eq!(index.query_scored(&prefix), baseline.query_scored(&prefix));
            }
        }
    }
});
