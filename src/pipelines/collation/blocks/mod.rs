//! Block discovery: from LCP-interval candidates to disjoint blocks.
//!
//! # Data Flow
//!
//! ```text
//! CandidateSource -> filter -> priority sort -> greedy select -> BlockSet
//! ```
//!
//! Selection runs once per collation session; the resulting `BlockSet` is
//! shared by every witness preparation that follows.

pub mod candidate;
pub mod select;
pub mod types;

pub use candidate::{BlockCandidate, CandidateSource, LcpCandidate, Overlap};
pub use select::{check_candidate, select_blocks, BlockSelection, FilterReason};
pub use types::{Block, BlockId, BlockSet, Occurrence, SelectionStats};
