//! Projection of the session blocks onto a single witness.

use std::ops::Range;

use super::super::blocks::{BlockSet, Occurrence};
use super::super::types::{Token, Witness};
use crate::core::range_set::RangeSet;

/// A witness seen as a sequence of block occurrences.
///
/// Occurrences are sorted by start position and never overlap. Positions not
/// covered by any occurrence are gaps, reachable through [`BlockWitness::gaps`].
#[derive(Debug, Clone)]
pub struct BlockWitness<'c> {
    witness: &'c Witness,
    occurrences: Vec<Occurrence>,
}

impl<'c> BlockWitness<'c> {
    pub fn witness(&self) -> &'c Witness {
        self.witness
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// The occurrence covering `position`, if any.
    pub fn occurrence_at(&self, position: usize) -> Option<&Occurrence> {
        let idx = self
            .occurrences
            .partition_point(|o| o.range.end <= position);
        self.occurrences
            .get(idx)
            .filter(|o| o.contains(position))
    }

    /// Position ranges of the witness that belong to no block.
    pub fn gaps(&self) -> RangeSet {
        let covered: RangeSet = self.occurrences.iter().map(|o| o.range.clone()).collect();
        RangeSet::from_range(self.witness.range()).difference(&covered)
    }

    /// Tokens of the witness within `range`.
    pub fn tokens_in(&self, range: Range<usize>) -> &'c [Token] {
        let base = self.witness.range().start;
        let tokens = self.witness.tokens();
        let lo = range.start.saturating_sub(base).min(tokens.len());
        let hi = range.end.saturating_sub(base).min(tokens.len());
        &tokens[lo..hi.max(lo)]
    }
}

/// Project `blocks` onto `witness`.
///
/// Every contiguous piece of a block inside the witness range becomes one
/// occurrence of that block.
pub fn build_block_witness<'c>(witness: &'c Witness, blocks: &BlockSet) -> BlockWitness<'c> {
    let witness_range = RangeSet::from_range(witness.range());

    let mut occurrences: Vec<Occurrence> = blocks
        .iter()
        .flat_map(|block| {
            block
                .ranges
                .intersection(&witness_range)
                .contiguous()
                .map(|range| Occurrence::new(range, block.id))
                .collect::<Vec<_>>()
        })
        .collect();
    occurrences.sort_by_key(Occurrence::start);

    log::debug!(
        "build_block_witness: {} has {} occurrences",
        witness.sigil(),
        occurrences.len()
    );

    BlockWitness {
        witness,
        occurrences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::collation::blocks::BlockId;
    use crate::pipelines::collation::types::Collation;

    fn setup() -> (Collation, BlockSet) {
        let mut collation = Collation::new();
        collation
            .add_witness("A", "a b c d e".split_whitespace())
            .unwrap();
        collation
            .add_witness("B", "c d a b x".split_whitespace())
            .unwrap();

        // A = [0,5), B = [6,11)
        let mut blocks = BlockSet::new();
        blocks.push(RangeSet::from_ranges([0..2, 8..10])); // "a b"
        blocks.push(RangeSet::from_ranges([2..4, 6..8])); // "c d"
        (collation, blocks)
    }

    #[test]
    fn test_occurrences_sorted_by_position() {
        let (collation, blocks) = setup();
        let witness = collation.witness("B").unwrap();
        let block_witness = build_block_witness(witness, &blocks);

        let occurrences = block_witness.occurrences();
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0], Occurrence::new(6..8, BlockId(1)));
        assert_eq!(occurrences[1], Occurrence::new(8..10, BlockId(0)));
    }

    #[test]
    fn test_occurrence_lookup_and_gaps() {
        let (collation, blocks) = setup();
        let witness = collation.witness("A").unwrap();
        let block_witness = build_block_witness(witness, &blocks);

        assert_eq!(block_witness.occurrence_at(1).unwrap().block, BlockId(0));
        assert_eq!(block_witness.occurrence_at(3).unwrap().block, BlockId(1));
        assert!(block_witness.occurrence_at(4).is_none());
        assert_eq!(block_witness.gaps().ranges(), &[4..5]);

        let gap_tokens = block_witness.tokens_in(4..5);
        assert_eq!(gap_tokens.len(), 1);
        assert_eq!(gap_tokens[0].content, "e");
    }

    #[test]
    fn test_witness_without_blocks() {
        let (collation, _) = setup();
        let witness = collation.witness("A").unwrap();
        let block_witness = build_block_witness(witness, &BlockSet::new());
        assert!(block_witness.occurrences().is_empty());
        assert_eq!(block_witness.gaps().ranges(), &[0..5]);
    }

    #[test]
    fn test_block_split_inside_witness_yields_two_occurrences() {
        let (collation, _) = setup();
        let mut blocks = BlockSet::new();
        blocks.push(RangeSet::from_ranges([0..1, 3..4]));
        let witness = collation.witness("A").unwrap();
        let block_witness = build_block_witness(witness, &blocks);
        assert_eq!(block_witness.occurrences().len(), 2);
        assert!(block_witness
            .occurrences()
            .iter()
            .all(|o| o.block == BlockId(0)));
    }
}
