//! Candidate blocks handed over by the suffix/LCP analysis.
//!
//! A candidate describes a substring repeated at several places of the global
//! token stream. The selector only talks to candidates through
//! [`BlockCandidate`]; [`LcpCandidate`] is the LCP-interval shaped
//! implementation the suffix analysis produces.
//!
//! Shrinking never mutates a candidate. [`BlockCandidate::shrunk`] returns a
//! new candidate one token shorter, and the selector drops the old one.

use std::ops::Range;

use super::super::types::Collation;
use crate::core::range_set::RangeSet;

/// Outcome of removing already-occupied positions from a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlap {
    /// Every occurrence was either wholly free or wholly occupied; the free
    /// ones form the remainder (possibly empty)
    Disjoint(RangeSet),
    /// At least one occurrence is partially occupied
    Ambiguous,
}

/// A provisional repeated block.
pub trait BlockCandidate: Sized {
    /// Number of places the substring occurs (the interval depth)
    fn occurrence_count(&self) -> usize;

    /// Length of the substring shared by all occurrences
    fn minimum_length(&self) -> usize;

    /// Number of sibling intervals under the same parent in the LCP tree
    fn sibling_count(&self) -> usize;

    /// One range per occurrence, in no particular order
    fn occurrences(&self) -> Vec<Range<usize>>;

    /// A copy of this candidate one token shorter, or `None` when the
    /// candidate cannot shrink any further
    fn shrunk(&self) -> Option<Self>;

    /// Union of all occurrence ranges
    fn occurrence_ranges(&self) -> RangeSet {
        self.occurrences().into_iter().collect()
    }

    /// Remove `occupied` positions from the candidate.
    ///
    /// Occurrences lying entirely inside `occupied` are skipped, occurrences
    /// entirely outside it form the remainder, and any occurrence cut by it
    /// makes the result [`Overlap::Ambiguous`].
    fn remove_overlap(&self, occupied: &RangeSet) -> Overlap {
        let mut remainder = RangeSet::new();

        for occurrence in self.occurrences() {
            let taken = RangeSet::from_range(occurrence.clone())
                .intersection(occupied)
                .len();
            if taken == 0 {
                remainder.insert(occurrence);
            } else if taken < occurrence.len() {
                return Overlap::Ambiguous;
            }
        }

        Overlap::Disjoint(remainder)
    }
}

/// A candidate shaped like an LCP interval of the suffix array.
///
/// `starts` are the suffix-array entries of the interval (the occurrence start
/// positions) and `lcp` the longest-common-prefix values between consecutive
/// entries inside the interval, so `lcp.len() == starts.len() - 1`. The block
/// length is the minimum of those values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcpCandidate {
    starts: Vec<usize>,
    lcp: Vec<usize>,
    siblings: usize,
}

impl LcpCandidate {
    /// Candidate of `length` tokens starting at each of `starts`.
    pub fn new(starts: Vec<usize>, length: usize, siblings: usize) -> Self {
        let lcp = vec![length; starts.len().saturating_sub(1)];
        Self {
            starts,
            lcp,
            siblings,
        }
    }

    /// Candidate for the suffix-array interval `[lo, hi]` (inclusive).
    ///
    /// `lcp[i]` is the LCP of suffixes `suffix_array[i - 1]` and
    /// `suffix_array[i]`; only `lcp[lo + 1..=hi]` belongs to the interval.
    pub fn from_interval(
        suffix_array: &[usize],
        lcp: &[usize],
        lo: usize,
        hi: usize,
        siblings: usize,
    ) -> Self {
        Self {
            starts: suffix_array[lo..=hi].to_vec(),
            lcp: lcp[lo + 1..=hi].to_vec(),
            siblings,
        }
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
}

impl BlockCandidate for LcpCandidate {
    fn occurrence_count(&self) -> usize {
        self.starts.len()
    }

    fn minimum_length(&self) -> usize {
        self.lcp.iter().copied().min().unwrap_or(0)
    }

    fn sibling_count(&self) -> usize {
        self.siblings
    }

    fn occurrences(&self) -> Vec<Range<usize>> {
        let length = self.minimum_length();
        self.starts.iter().map(|&s| s..s + length).collect()
    }

    fn shrunk(&self) -> Option<Self> {
        if self.minimum_length() <= 1 {
            return None;
        }
        Some(Self {
            starts: self.starts.clone(),
            lcp: self.lcp.iter().map(|&v| v - 1).collect(),
            siblings: self.siblings,
        })
    }
}

/// Supplier of candidate blocks for a collation.
pub trait CandidateSource {
    type Candidate: BlockCandidate;

    fn candidates(&self, collation: &Collation) -> Vec<Self::Candidate>;
}

/// Ready-made candidates, computed ahead of the session.
impl<C: BlockCandidate + Clone> CandidateSource for Vec<C> {
    type Candidate = C;

    fn candidates(&self, _collation: &Collation) -> Vec<C> {
        self.clone()
    }
}
