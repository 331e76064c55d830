//! Core data types for block selection.
//!
//! Contains `Block`, the `BlockSet` arena, `Occurrence` and the
//! per-session `SelectionStats`.

use std::ops::Range;

use crate::core::range_set::RangeSet;

/// Index of a block inside its `BlockSet`.
///
/// Block identity is what the scorer compares; two tokens match when their
/// occurrences carry the same `BlockId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

/// A finalised repeated token sequence.
///
/// The ranges of a block never overlap the ranges of any other block in the
/// same `BlockSet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Position in the owning set
    pub id: BlockId,
    /// Every position owned by this block, across all witnesses
    pub ranges: RangeSet,
}

/// The blocks of one collation session, in acceptance order.
#[derive(Debug, Clone, Default)]
pub struct BlockSet {
    blocks: Vec<Block>,
    occupied: RangeSet,
}

impl BlockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block owning `ranges`.
    ///
    /// Callers must ensure `ranges` is disjoint from every block already in
    /// the set.
    pub(crate) fn push(&mut self, ranges: RangeSet) -> BlockId {
        debug_assert!(ranges.is_disjoint(&self.occupied));
        let id = BlockId(self.blocks.len());
        self.occupied.union_update(&ranges);
        self.blocks.push(Block { id, ranges });
        id
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Union of the ranges of every block.
    pub fn occupied(&self) -> &RangeSet {
        &self.occupied
    }

    /// The block owning `position`, if any.
    pub fn block_at(&self, position: usize) -> Option<&Block> {
        if !self.occupied.contains(position) {
            return None;
        }
        self.blocks.iter().find(|b| b.ranges.contains(position))
    }
}

/// One appearance of a block inside one witness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    /// Contiguous global position range of this appearance
    pub range: Range<usize>,
    /// The block this is an appearance of
    pub block: BlockId,
}

impl Occurrence {
    pub fn new(range: Range<usize>, block: BlockId) -> Self {
        Self { range, block }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.range.contains(&position)
    }
}

/// Counters collected while selecting blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Candidates handed over by the candidate source
    pub candidates: usize,
    /// Dropped: more occurrences than witnesses
    pub filtered_by_count: usize,
    /// Dropped: repeats within a single witness
    pub filtered_by_self_repeat: usize,
    /// Blocks produced
    pub accepted: usize,
    /// Blocks produced only after at least one shrink
    pub accepted_after_shrink: usize,
    /// Candidates abandoned after shrinking to the minimum length
    pub exhausted: usize,
    /// Candidates whose every occurrence was already owned by other blocks
    pub fully_occupied: usize,
}
