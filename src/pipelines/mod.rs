//! Alignment pipelines.
//!
//! - `collation`: block-aware alignment of witnesses against the superbase

pub mod collation;
