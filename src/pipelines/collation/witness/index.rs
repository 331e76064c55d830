//! Session-wide mapping from token position to block occurrence.
//!
//! Tokens are keyed by their absolute position in the global stream. A token
//! covered by no occurrence simply has no entry; there are no placeholder
//! values. The index only grows: merging never replaces or drops an entry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::super::blocks::Occurrence;
use super::builder::BlockWitness;

/// Occurrences of one witness, keyed by absolute token position.
pub type TokenOccurrences = Vec<(usize, Occurrence)>;

/// Map every token of the witness behind `block_witness` to its occurrence.
pub fn index_tokens(block_witness: &BlockWitness<'_>) -> TokenOccurrences {
    block_witness
        .witness()
        .tokens()
        .iter()
        .filter_map(|token| {
            block_witness
                .occurrence_at(token.position)
                .map(|occ| (token.position, occ.clone()))
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct TokenOccurrenceIndex {
    entries: HashMap<usize, Occurrence>,
}

impl TokenOccurrenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the occurrences of one witness, returning how many positions were
    /// newly indexed. Positions already present keep their entry.
    pub fn merge(&mut self, occurrences: TokenOccurrences) -> usize {
        let mut added = 0;
        for (position, occurrence) in occurrences {
            match self.entries.entry(position) {
                Entry::Vacant(slot) => {
                    slot.insert(occurrence);
                    added += 1;
                }
                Entry::Occupied(existing) => {
                    debug_assert_eq!(
                        existing.get(),
                        &occurrence,
                        "position {} re-indexed with a different occurrence",
                        position
                    );
                }
            }
        }
        added
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<&Occurrence> {
        self.entries.get(&position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
