//! Greedy selection of non-overlapping blocks.
//!
//! Algorithm:
//! 1. Drop candidates with more occurrences than witnesses
//! 2. Drop candidates that repeat inside a single witness
//! 3. Sort by occurrence count, then minimum length, then sibling count
//!    (all descending, stable)
//! 4. Accept candidates whose occurrences are wholly free; shrink and retry
//!    candidates that cut through an already accepted block

use std::cmp::Reverse;
use std::ops::Range;

use super::candidate::{BlockCandidate, Overlap};
use super::types::{BlockSet, SelectionStats};
use crate::collate_opt::BlockSelectionParams;
use crate::core::range_set::RangeSet;

/// Result of a selection run.
#[derive(Debug, Clone, Default)]
pub struct BlockSelection {
    pub blocks: BlockSet,
    pub stats: SelectionStats,
}

/// Why a candidate was dropped before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// More occurrences than there are witnesses
    TooManyOccurrences,
    /// More positions inside one witness than the block is long
    RepeatsWithinWitness,
}

/// Decide whether a candidate may take part in selection.
pub fn check_candidate<C: BlockCandidate>(
    candidate: &C,
    witness_count: usize,
    witness_ranges: &[Range<usize>],
) -> Result<(), FilterReason> {
    if candidate.occurrence_count() > witness_count {
        return Err(FilterReason::TooManyOccurrences);
    }

    let ranges = candidate.occurrence_ranges();
    let length = candidate.minimum_length();
    let repeats = witness_ranges
        .iter()
        .any(|w| RangeSet::from_range(w.clone()).intersection(&ranges).len() > length);
    if repeats {
        return Err(FilterReason::RepeatsWithinWitness);
    }

    Ok(())
}

/// Select the final, pairwise disjoint blocks from `candidates`.
///
/// Blocks are returned in acceptance order, which follows the priority order
/// of the candidates rather than their positions.
pub fn select_blocks<C: BlockCandidate>(
    candidates: Vec<C>,
    witness_count: usize,
    witness_ranges: &[Range<usize>],
    params: &BlockSelectionParams,
) -> BlockSelection {
    let mut stats = SelectionStats {
        candidates: candidates.len(),
        ..SelectionStats::default()
    };
    log::debug!(
        "select_blocks: {} candidates over {} witnesses",
        candidates.len(),
        witness_count
    );

    let mut kept: Vec<C> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match check_candidate(&candidate, witness_count, witness_ranges) {
            Ok(()) => kept.push(candidate),
            Err(FilterReason::TooManyOccurrences) => stats.filtered_by_count += 1,
            Err(FilterReason::RepeatsWithinWitness) => stats.filtered_by_self_repeat += 1,
        }
    }
    log::debug!(
        "select_blocks: {} candidates after filtering ({} by count, {} by self-repeat)",
        kept.len(),
        stats.filtered_by_count,
        stats.filtered_by_self_repeat
    );

    // Stable sort keeps source order among equal priorities
    kept.sort_by_key(|c| {
        Reverse((c.occurrence_count(), c.minimum_length(), c.sibling_count()))
    });

    let mut blocks = BlockSet::new();
    for (idx, candidate) in kept.into_iter().enumerate() {
        let mut current = candidate;
        let mut shrinks = 0usize;

        loop {
            match current.remove_overlap(blocks.occupied()) {
                Overlap::Disjoint(remainder) if remainder.is_empty() => {
                    log::trace!("  candidate {}: every occurrence already owned", idx);
                    stats.fully_occupied += 1;
                    break;
                }
                Overlap::Disjoint(remainder) => {
                    log::debug!(
                        "  candidate {}: accepted depth={} len={} ranges={} after {} shrinks",
                        idx,
                        current.occurrence_count(),
                        current.minimum_length(),
                        remainder,
                        shrinks
                    );
                    blocks.push(remainder);
                    stats.accepted += 1;
                    if shrinks > 0 {
                        stats.accepted_after_shrink += 1;
                    }
                    break;
                }
                Overlap::Ambiguous => {
                    let next = if current.minimum_length() > params.min_block_length {
                        current.shrunk()
                    } else {
                        None
                    };
                    match next {
                        Some(shorter) => {
                            log::trace!(
                                "  candidate {}: partial overlap at len={}, retrying with len={}",
                                idx,
                                current.minimum_length(),
                                shorter.minimum_length()
                            );
                            current = shorter;
                            shrinks += 1;
                        }
                        None => {
                            log::debug!(
                                "  candidate {}: abandoned at len={} after {} shrinks",
                                idx,
                                current.minimum_length(),
                                shrinks
                            );
                            stats.exhausted += 1;
                            break;
                        }
                    }
                }
            }
        }
    }

    log::debug!(
        "select_blocks: {} blocks ({} after shrinking), {} exhausted, {} fully occupied",
        stats.accepted,
        stats.accepted_after_shrink,
        stats.exhausted,
        stats.fully_occupied
    );

    BlockSelection { blocks, stats }
}
