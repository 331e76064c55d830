//! Edit-graph table construction.
//!
//! The table has one row per token of the new witness and one column per
//! superbase token, plus the empty-prefix row and column at index 0. Cell
//! (row, col) depends on (row-1, col), (row, col-1) and (row-1, col-1), so
//! the table can be filled row by row, or one anti-diagonal at a time with
//! every cell of a diagonal scored in parallel on the rayon pool. Both
//! orders produce identical tables.
//!
//! A partially filled table is never handed out; an aborted fill discards the
//! whole table.

use rayon::prelude::*;

use super::cell::{Cell, CellLookup, CellScorer};

/// Scored edit-graph table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGraphTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Cell>>,
}

/// Token of a row or column; index 0 is the empty prefix.
#[inline]
fn token_at(tokens: &[usize], idx: usize) -> Option<usize> {
    idx.checked_sub(1).map(|i| tokens[i])
}

impl EditGraphTable {
    /// An unscored table for `new_len` x `super_len` tokens.
    pub fn new(new_len: usize, super_len: usize) -> Self {
        let rows = new_len + 1;
        let cols = super_len + 1;
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, empty-prefix row and column included.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = Some(cell);
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The bottom-right cell, covering both complete sequences.
    pub fn final_cell(&self) -> Option<&Cell> {
        self.cell(self.rows - 1, self.cols - 1)
    }

    pub fn score(&self) -> Option<i32> {
        self.final_cell().map(|c| c.g)
    }

    pub fn segments(&self) -> Option<usize> {
        self.final_cell().map(|c| c.segments)
    }

    /// Fill the table row by row.
    ///
    /// `new_tokens` and `super_tokens` are absolute token positions; every
    /// position must belong to a prepared witness.
    pub fn fill(scorer: &CellScorer<'_>, new_tokens: &[usize], super_tokens: &[usize]) -> Self {
        let mut table = Self::new(new_tokens.len(), super_tokens.len());

        for row in 0..table.rows {
            for col in 0..table.cols {
                let cell = scorer.score_cell(
                    token_at(new_tokens, row),
                    token_at(super_tokens, col),
                    row,
                    col,
                    &table,
                );
                table.set(row, col, cell);
            }
        }

        table.log_summary("fill");
        table
    }

    /// Fill the table one anti-diagonal at a time, scoring each diagonal in
    /// parallel.
    pub fn fill_wavefront(
        scorer: &CellScorer<'_>,
        new_tokens: &[usize],
        super_tokens: &[usize],
    ) -> Self {
        let mut table = Self::new(new_tokens.len(), super_tokens.len());
        let (rows, cols) = (table.rows, table.cols);

        for k in 0..rows + cols - 1 {
            let lo = k.saturating_sub(cols - 1);
            let hi = k.min(rows - 1);

            let diagonal: Vec<(usize, Cell)> = (lo..=hi)
                .into_par_iter()
                .map(|row| {
                    let col = k - row;
                    let cell = scorer.score_cell(
                        token_at(new_tokens, row),
                        token_at(super_tokens, col),
                        row,
                        col,
                        &table,
                    );
                    (row, cell)
                })
                .collect();

            for (row, cell) in diagonal {
                table.set(row, k - row, cell);
            }
        }

        table.log_summary("fill_wavefront");
        table
    }

    fn log_summary(&self, how: &str) {
        if let Some(last) = self.final_cell() {
            log::debug!(
                "{}: {}x{} table, score={} segments={}",
                how,
                self.rows,
                self.cols,
                last.g,
                last.segments
            );
        }
    }
}

impl CellLookup for EditGraphTable {
    #[inline]
    fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }
}
