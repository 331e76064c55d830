//! Sets of half-open position ranges.
//!
//! `RangeSet` keeps its ranges sorted, non-empty, and separated by at least one
//! position, so two sets holding the same positions compare equal regardless of
//! how they were built. Block selection uses it for the occupied-position set,
//! block ownership and the per-witness projections.

use std::fmt;
use std::ops::Range;

/// A normalised set of `usize` positions stored as disjoint half-open ranges.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeSet {
    ranges: Vec<Range<usize>>,
}

impl RangeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single range. Empty ranges yield an empty set.
    pub fn from_range(range: Range<usize>) -> Self {
        let mut set = Self::new();
        set.insert(range);
        set
    }

    /// Create a set from arbitrary (possibly overlapping, unsorted) ranges.
    pub fn from_ranges<I: IntoIterator<Item = Range<usize>>>(ranges: I) -> Self {
        ranges.into_iter().collect()
    }

    /// Add a range, merging it with any overlapping or adjacent ranges.
    pub fn insert(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let mut start = range.start;
        let mut end = range.end;

        // [lo, hi) are the stored ranges that touch the new one
        let lo = self.ranges.partition_point(|r| r.end < start);
        let hi = self.ranges.partition_point(|r| r.start <= end);
        if lo < hi {
            start = start.min(self.ranges[lo].start);
            end = end.max(self.ranges[hi - 1].end);
        }
        self.ranges.splice(lo..hi, std::iter::once(start..end));
    }

    /// Add every range of `other` to this set.
    pub fn union_update(&mut self, other: &RangeSet) {
        for range in &other.ranges {
            self.insert(range.clone());
        }
    }

    pub fn union(&self, other: &RangeSet) -> RangeSet {
        let mut result = self.clone();
        result.union_update(other);
        result
    }

    /// Positions present in both sets.
    pub fn intersection(&self, other: &RangeSet) -> RangeSet {
        let (a, b) = (&self.ranges, &other.ranges);
        let mut ranges = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            let start = a[i].start.max(b[j].start);
            let end = a[i].end.min(b[j].end);
            if start < end {
                ranges.push(start..end);
            }
            if a[i].end < b[j].end {
                i += 1;
            } else {
                j += 1;
            }
        }

        // Pieces inherit the gaps of both inputs, so they are already normalised
        RangeSet { ranges }
    }

    /// Positions of this set that are not in `other`.
    pub fn difference(&self, other: &RangeSet) -> RangeSet {
        let mut ranges = Vec::new();

        for range in &self.ranges {
            let mut cursor = range.start;
            let first = other.ranges.partition_point(|r| r.end <= range.start);

            for cut in &other.ranges[first..] {
                if cut.start >= range.end {
                    break;
                }
                if cut.start > cursor {
                    ranges.push(cursor..cut.start);
                }
                cursor = cursor.max(cut.end);
                if cursor >= range.end {
                    break;
                }
            }
            if cursor < range.end {
                ranges.push(cursor..range.end);
            }
        }

        RangeSet { ranges }
    }

    pub fn contains(&self, position: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.end <= position);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start <= position)
    }

    /// Number of positions in the set.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn is_disjoint(&self, other: &RangeSet) -> bool {
        self.intersection(other).is_empty()
    }

    pub fn is_subset(&self, other: &RangeSet) -> bool {
        self.difference(other).is_empty()
    }

    /// The maximal contiguous sub-ranges of the set, in ascending order.
    pub fn contiguous(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.ranges.iter().cloned()
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of contiguous sub-ranges.
    pub fn num_ranges(&self) -> usize {
        self.ranges.len()
    }

    /// Smallest position in the set.
    pub fn start(&self) -> Option<usize> {
        self.ranges.first().map(|r| r.start)
    }
}

impl FromIterator<Range<usize>> for RangeSet {
    fn from_iter<I: IntoIterator<Item = Range<usize>>>(iter: I) -> Self {
        let mut set = RangeSet::new();
        for range in iter {
            set.insert(range);
        }
        set
    }
}

impl fmt::Debug for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranges.iter()).finish()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .ranges
            .iter()
            .map(|r| format!("{}-{}", r.start, r.end))
            .collect();
        write!(f, "[{}]", parts.join(","))
    }
}
