//! Block-aware collation pipeline.
//!
//! Aligns each new witness against the superbase of already merged witnesses,
//! deciding matches by shared membership in repeated blocks rather than by
//! token text.
//!
//! # Module Organization
//!
//! - `types` - tokens, witnesses and the collation registry
//! - `blocks/` - candidate filtering and greedy block selection
//! - `witness/` - block witnesses and the token-occurrence index
//! - `scoring/` - cell recurrence, edit-graph tables and the scoring session
//!
//! # Data Flow
//!
//! ```text
//! CandidateSource -> select_blocks -> BlockSet (once per session)
//!                                        |
//! Witness -> build_block_witness -> index_tokens -> TokenOccurrenceIndex
//!                                                        |
//!                                 score_cell / EditGraphTable::fill
//! ```

pub mod blocks;
pub mod scoring;
pub mod types;
pub mod witness;

pub use blocks::{Block, BlockCandidate, BlockId, BlockSet, CandidateSource, LcpCandidate, Occurrence};
pub use scoring::{BlockScorer, Cell, CellLookup, CellScorer, EditGraphTable, Step};
pub use types::{Collation, Token, Witness};
pub use witness::{BlockWitness, TokenOccurrenceIndex};
