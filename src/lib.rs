//! Block-aware alignment core of a multi-witness text collation engine.
//!
//! Given several witnesses of a text, `ferrous_collate` selects maximal,
//! non-overlapping token blocks repeated across witnesses and scores an
//! edit-graph alignment of each new witness against the superbase, treating
//! two tokens as a match when they belong to the same block.

pub mod collate_opt;
pub mod core;
pub mod defaults;
pub mod error;
pub mod pipelines;

pub use collate_opt::CollateOpt;
pub use error::{CollateError, Result};
pub use pipelines::collation::{BlockScorer, Collation, EditGraphTable, LcpCandidate};
