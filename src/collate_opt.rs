// ferrous-collate/src/collate_opt.rs
//
// Collation options and the per-stage parameter bundles derived from them.

use crate::defaults;

/// Collation options
#[derive(Debug, Clone)]
pub struct CollateOpt {
    // Block selection parameters
    pub min_block_length: usize, // Stop shrinking a conflicting candidate at this length

    // Scoring parameters
    pub match_score: i32,          // Added to the parent score on a block match
    pub gap_penalty: i32,          // Subtracted for an insertion or deletion
    pub substitution_penalty: i32, // Subtracted for a diagonal step without a match

    // Processing parameters
    pub parallel_threshold: usize, // Fill tables with at least this many cells as a wavefront; 0 = never
}

// ============================================================================
// STAGE-SPECIFIC PARAMETER BUNDLES
// ============================================================================

/// Parameters for the block selection stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSelectionParams {
    pub min_block_length: usize,
}

/// Parameters for the cell scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    pub match_score: i32,
    pub gap_penalty: i32,
    pub substitution_penalty: i32,
}

/// Parameters for edit-graph table construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableParams {
    pub parallel_threshold: usize,
}

impl Default for CollateOpt {
    fn default() -> Self {
        CollateOpt {
            min_block_length: defaults::MIN_BLOCK_LENGTH,
            match_score: defaults::MATCH_SCORE,
            gap_penalty: defaults::GAP_PENALTY,
            substitution_penalty: defaults::SUBSTITUTION_PENALTY,
            parallel_threshold: defaults::PARALLEL_CELL_THRESHOLD,
        }
    }
}

impl Default for BlockSelectionParams {
    fn default() -> Self {
        CollateOpt::default().block_selection_params()
    }
}

impl Default for ScoringParams {
    fn default() -> Self {
        CollateOpt::default().scoring_params()
    }
}

impl Default for TableParams {
    fn default() -> Self {
        CollateOpt::default().table_params()
    }
}

impl TableParams {
    /// Whether a table with `cells` cells should be filled as a parallel wavefront
    #[inline]
    pub fn use_wavefront(&self, cells: usize) -> bool {
        self.parallel_threshold > 0 && cells >= self.parallel_threshold
    }
}

impl CollateOpt {
    // ========================================================================
    // STAGE-SPECIFIC PARAMETER ACCESSORS
    // ========================================================================

    /// Get block-selection parameters as a bundle
    pub fn block_selection_params(&self) -> BlockSelectionParams {
        BlockSelectionParams {
            min_block_length: self.min_block_length,
        }
    }

    /// Get scoring parameters as a bundle
    pub fn scoring_params(&self) -> ScoringParams {
        ScoringParams {
            match_score: self.match_score,
            gap_penalty: self.gap_penalty,
            substitution_penalty: self.substitution_penalty,
        }
    }

    /// Get table-construction parameters as a bundle
    pub fn table_params(&self) -> TableParams {
        TableParams {
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// Validate parameters for consistency across stages
    /// Returns Ok(()) if valid, or Err with description of issues
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.min_block_length < 1 {
            errors.push(format!(
                "min_block_length must be >= 1, got {}",
                self.min_block_length
            ));
        }

        // Scores must never become positive
        if self.match_score > 0 {
            errors.push(format!(
                "match_score must be <= 0, got {}",
                self.match_score
            ));
        }
        if self.gap_penalty < 0 {
            errors.push(format!("gap_penalty must be >= 0, got {}", self.gap_penalty));
        }
        if self.substitution_penalty < 0 {
            errors.push(format!(
                "substitution_penalty must be >= 0, got {}",
                self.substitution_penalty
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
