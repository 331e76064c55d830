//! Witness preparation: block witnesses and the token-occurrence index.
//!
//! # Data Flow
//!
//! ```text
//! Witness + BlockSet -> BlockWitness -> TokenOccurrences -> TokenOccurrenceIndex
//! ```
//!
//! A witness has to be fully prepared before any of its tokens is scored.

pub mod builder;
pub mod index;

pub use builder::{build_block_witness, BlockWitness};
pub use index::{index_tokens, TokenOccurrenceIndex, TokenOccurrences};
