// Shared helpers for integration tests

#![allow(dead_code)]

use ferrous_collate::Collation;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a collation from whitespace-separated witness texts, sigils "A", "B", ...
pub fn collation_of(texts: &[&str]) -> Collation {
    let mut collation = Collation::new();
    for (idx, text) in texts.iter().enumerate() {
        let sigil = char::from(b'A' + idx as u8).to_string();
        collation
            .add_witness(sigil, text.split_whitespace())
            .expect("valid witness");
    }
    collation
}

/// Absolute positions of every token of witness `sigil`.
pub fn positions_of(collation: &Collation, sigil: &str) -> Vec<usize> {
    collation
        .witness(sigil)
        .expect("known witness")
        .range()
        .collect()
}
