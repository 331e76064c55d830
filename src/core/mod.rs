//! Core reusable components.
//!
//! These are agnostic to witnesses and blocks and can be reused by any
//! pipeline.

pub mod range_set;
