//! Edit-graph cell recurrence.
//!
//! Each cell holds the cumulative score `g` of the best path from the origin,
//! whether the cell is a block match, and how many matched segments that path
//! contains. Scores start at 0 and only ever decrease.
//!
//! Parent choice: the predecessor with the highest `g` wins; ties go to the
//! diagonal, then up, then left.
//!
//! ```text
//! origin         g = 0
//! row/col 0      g = parent.g - gap
//! diagonal       g = parent.g + match      (tokens share a block)
//!                g = parent.g - substitution
//! up / left      g = parent.g - gap
//! ```

use super::super::witness::TokenOccurrenceIndex;
use crate::collate_opt::ScoringParams;

/// Direction of the step that led into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    Origin,
    Diagonal,
    /// From (row - 1, col)
    Up,
    /// From (row, col - 1)
    Left,
}

/// One scored cell of the edit-graph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Cumulative score, <= 0
    pub g: i32,
    /// The aligned tokens belong to the same block
    pub is_match: bool,
    /// Number of contiguous matched runs on the path to this cell
    pub segments: usize,
    /// Step taken from the chosen parent
    pub step: Step,
}

impl Cell {
    pub const ORIGIN: Cell = Cell {
        g: 0,
        is_match: false,
        segments: 0,
        step: Step::Origin,
    };
}

/// Read access to already scored cells.
///
/// Implemented by the caller's table; `None` means the cell has not been
/// scored yet.
pub trait CellLookup {
    fn cell(&self, row: usize, col: usize) -> Option<&Cell>;
}

/// Scores cells against a read-only token-occurrence index.
#[derive(Debug, Clone, Copy)]
pub struct CellScorer<'a> {
    index: &'a TokenOccurrenceIndex,
    params: ScoringParams,
}

impl<'a> CellScorer<'a> {
    pub fn new(index: &'a TokenOccurrenceIndex, params: ScoringParams) -> Self {
        Self { index, params }
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// True when both positions are indexed and belong to the same block.
    #[inline]
    pub fn is_block_match(&self, token_new: usize, token_super: usize) -> bool {
        match (self.index.get(token_new), self.index.get(token_super)) {
            (Some(a), Some(b)) => a.block == b.block,
            _ => false,
        }
    }

    /// Score cell (`row`, `col`).
    ///
    /// `token_new` and `token_super` are the absolute positions of the tokens
    /// aligned by this cell, `None` on the empty-prefix row and column.
    ///
    /// # Panics
    ///
    /// Panics if a predecessor of the cell has not been scored yet.
    pub fn score_cell<T: CellLookup + ?Sized>(
        &self,
        token_new: Option<usize>,
        token_super: Option<usize>,
        row: usize,
        col: usize,
        table: &T,
    ) -> Cell {
        if row == 0 && col == 0 {
            return Cell::ORIGIN;
        }

        let predecessors = [
            (row > 0 && col > 0).then(|| (Step::Diagonal, row - 1, col - 1)),
            (row > 0).then(|| (Step::Up, row - 1, col)),
            (col > 0).then(|| (Step::Left, row, col - 1)),
        ];

        let mut parent: Option<(Step, Cell)> = None;
        for (step, r, c) in predecessors.into_iter().flatten() {
            let Some(&cell) = table.cell(r, c) else {
                panic!(
                    "cell ({}, {}) scored before its predecessor ({}, {})",
                    row, col, r, c
                );
            };
            // Strict comparison keeps the earlier step on ties
            if parent.map_or(true, |(_, best)| cell.g > best.g) {
                parent = Some((step, cell));
            }
        }
        let Some((step, parent)) = parent else {
            unreachable!("a non-origin cell always has a predecessor");
        };

        // Boundary cells are forced insertions or deletions
        if row == 0 || col == 0 || step != Step::Diagonal {
            return Cell {
                g: parent.g - self.params.gap_penalty,
                is_match: false,
                segments: parent.segments,
                step,
            };
        }

        let is_match = match (token_new, token_super) {
            (Some(a), Some(b)) => self.is_block_match(a, b),
            _ => false,
        };

        if is_match {
            Cell {
                g: parent.g + self.params.match_score,
                is_match: true,
                segments: parent.segments + usize::from(!parent.is_match),
                step,
            }
        } else {
            Cell {
                g: parent.g - self.params.substitution_penalty,
                is_match: false,
                segments: parent.segments,
                step,
            }
        }
    }
}
