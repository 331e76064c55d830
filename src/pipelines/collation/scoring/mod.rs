//! Block-aware scoring of the edit graph.
//!
//! - `cell` - the per-cell recurrence and the `CellLookup` seam for
//!   caller-owned tables
//! - `table` - sequential and wavefront table filling
//! - `scorer` - the session object tying blocks, index and scoring together

pub mod cell;
pub mod scorer;
pub mod table;

pub use cell::{Cell, CellLookup, CellScorer, Step};
pub use scorer::BlockScorer;
pub use table::EditGraphTable;
