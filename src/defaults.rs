// src/defaults.rs

// Block selection
pub const MIN_BLOCK_LENGTH: usize = 1;

// Scoring Constants
pub const MATCH_SCORE: i32 = 0;
pub const GAP_PENALTY: i32 = 1;
pub const SUBSTITUTION_PENALTY: i32 = 2;

// Table filling
pub const PARALLEL_CELL_THRESHOLD: usize = 4096;
