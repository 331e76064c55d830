//! Error types for ferrous-collate

use thiserror::Error;

/// Result type alias for collation operations
pub type Result<T> = std::result::Result<T, CollateError>;

/// Errors surfaced by the collation session.
///
/// Overlap conflicts during block selection are not errors; they are handled
/// by the selector through [`crate::pipelines::collation::blocks::Overlap`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollateError {
    /// A witness with this sigil was already added to the collation
    #[error("duplicate witness sigil: {0}")]
    DuplicateSigil(String),

    /// No witness with this sigil exists in the collation
    #[error("unknown witness: {0}")]
    UnknownWitness(String),

    /// A global position that belongs to no witness
    #[error("position {0} does not belong to any witness")]
    UnknownPosition(usize),

    /// Witnesses must contain at least one token
    #[error("witness {0} has no tokens")]
    EmptyWitness(String),

    /// The witness has to be prepared before it can be aligned
    #[error("witness {0} has not been prepared for scoring")]
    WitnessNotPrepared(String),

    /// Option validation failed
    #[error("invalid options: {}", .0.join("; "))]
    InvalidOptions(Vec<String>),
}
