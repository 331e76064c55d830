//! Block-aware scoring session.
//!
//! `BlockScorer` owns everything that lives for one collation session:
//! the lazily selected block set, the growing token-occurrence index and the
//! set of prepared witnesses. Blocks are selected on first need and never
//! recomputed. Witnesses are prepared one at a time; scoring reads the index
//! without modifying it.

use std::collections::HashSet;

use super::super::blocks::{select_blocks, BlockSet, CandidateSource, Occurrence, SelectionStats};
use super::super::types::Collation;
use super::super::witness::{build_block_witness, index_tokens, TokenOccurrenceIndex};
use super::cell::{Cell, CellLookup, CellScorer};
use super::table::EditGraphTable;
use crate::collate_opt::{BlockSelectionParams, CollateOpt};
use crate::error::{CollateError, Result};

pub struct BlockScorer<'c, S: CandidateSource> {
    collation: &'c Collation,
    source: S,
    opt: CollateOpt,
    blocks: Option<BlockSet>,
    stats: Option<SelectionStats>,
    index: TokenOccurrenceIndex,
    prepared: HashSet<String>,
}

/// Run block selection for `collation` with candidates from `source`.
fn select_session_blocks<S: CandidateSource>(
    collation: &Collation,
    source: &S,
    params: &BlockSelectionParams,
) -> (BlockSet, SelectionStats) {
    let selection = select_blocks(
        source.candidates(collation),
        collation.witness_count(),
        &collation.witness_ranges(),
        params,
    );
    (selection.blocks, selection.stats)
}

impl<'c, S: CandidateSource> BlockScorer<'c, S> {
    /// Create a session with default options.
    pub fn new(collation: &'c Collation, source: S) -> Self {
        Self {
            collation,
            source,
            opt: CollateOpt::default(),
            blocks: None,
            stats: None,
            index: TokenOccurrenceIndex::new(),
            prepared: HashSet::new(),
        }
    }

    /// Create a session with validated options.
    pub fn with_options(collation: &'c Collation, source: S, opt: CollateOpt) -> Result<Self> {
        opt.validate().map_err(CollateError::InvalidOptions)?;
        let mut scorer = Self::new(collation, source);
        scorer.opt = opt;
        Ok(scorer)
    }

    pub fn collation(&self) -> &'c Collation {
        self.collation
    }

    pub fn options(&self) -> &CollateOpt {
        &self.opt
    }

    /// The session blocks, selecting them on first access.
    pub fn blocks(&mut self) -> &BlockSet {
        let Self {
            collation,
            source,
            opt,
            blocks,
            stats,
            ..
        } = self;
        blocks.get_or_insert_with(|| {
            let (selected, selection_stats) =
                select_session_blocks(*collation, source, &opt.block_selection_params());
            *stats = Some(selection_stats);
            selected
        })
    }

    /// Selection counters, available once blocks have been selected.
    pub fn selection_stats(&self) -> Option<&SelectionStats> {
        self.stats.as_ref()
    }

    /// Index the tokens of the witness `sigil`.
    ///
    /// Returns the number of newly indexed tokens; preparing a witness a second
    /// time changes nothing and returns 0.
    pub fn prepare_witness(&mut self, sigil: &str) -> Result<usize> {
        if self.prepared.contains(sigil) {
            log::debug!("prepare_witness: {} already prepared", sigil);
            return Ok(0);
        }

        let collation = self.collation;
        let witness = collation.witness(sigil)?;
        let occurrences = {
            let blocks = self.blocks();
            let block_witness = build_block_witness(witness, blocks);
            index_tokens(&block_witness)
        };

        let added = self.index.merge(occurrences);
        self.prepared.insert(sigil.to_string());
        log::debug!(
            "prepare_witness: {} indexed {} of {} tokens ({} total)",
            sigil,
            added,
            witness.len(),
            self.index.len()
        );
        Ok(added)
    }

    pub fn is_prepared(&self, sigil: &str) -> bool {
        self.prepared.contains(sigil)
    }

    /// The occurrence of the token at `position`, `None` when the token is in
    /// no block or its witness is not prepared.
    pub fn occurrence_of(&self, position: usize) -> Option<&Occurrence> {
        self.index.get(position)
    }

    pub fn index(&self) -> &TokenOccurrenceIndex {
        &self.index
    }

    /// A scorer over the current index.
    pub fn cell_scorer(&self) -> CellScorer<'_> {
        CellScorer::new(&self.index, self.opt.scoring_params())
    }

    /// Score one cell of a caller-driven table; see [`CellScorer::score_cell`].
    pub fn score_cell<T: CellLookup + ?Sized>(
        &self,
        token_new: Option<usize>,
        token_super: Option<usize>,
        row: usize,
        col: usize,
        table: &T,
    ) -> Cell {
        self.cell_scorer()
            .score_cell(token_new, token_super, row, col, table)
    }

    /// Build the edit-graph table aligning witness `sigil` against the
    /// superbase tokens at `superbase` positions.
    ///
    /// Both the witness and every witness contributing superbase tokens must
    /// have been prepared.
    pub fn align(&self, sigil: &str, superbase: &[usize]) -> Result<EditGraphTable> {
        let witness = self.collation.witness(sigil)?;
        if !self.is_prepared(sigil) {
            return Err(CollateError::WitnessNotPrepared(sigil.to_string()));
        }
        for &position in superbase {
            let owner = self
                .collation
                .witness_at(position)
                .ok_or(CollateError::UnknownPosition(position))?;
            if !self.is_prepared(owner.sigil()) {
                return Err(CollateError::WitnessNotPrepared(owner.sigil().to_string()));
            }
        }

        let new_tokens: Vec<usize> = witness.range().collect();
        let scorer = self.cell_scorer();
        let params = self.opt.table_params();
        let cells = (new_tokens.len() + 1) * (superbase.len() + 1);

        let table = if params.use_wavefront(cells) {
            EditGraphTable::fill_wavefront(&scorer, &new_tokens, superbase)
        } else {
            EditGraphTable::fill(&scorer, &new_tokens, superbase)
        };
        Ok(table)
    }
}
