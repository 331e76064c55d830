//! Collation data model: tokens, witnesses and the global token stream.
//!
//! Every token carries an absolute position in the concatenated stream of all
//! witnesses. Witnesses occupy contiguous position ranges in insertion order,
//! separated by one reserved position that holds no token, so a repeated range
//! found in the stream can never straddle two witnesses.

use std::collections::HashMap;
use std::ops::Range;

use crate::core::range_set::RangeSet;
use crate::error::{CollateError, Result};

/// A single token of witness text.
///
/// Tokens are distinguished by `position`; two tokens with equal `content`
/// in different places are different tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Absolute position in the global token stream
    pub position: usize,
    /// Token text as produced by the tokenizer
    pub content: String,
}

/// One version of the text being collated.
#[derive(Debug, Clone)]
pub struct Witness {
    sigil: String,
    tokens: Vec<Token>,
    range: Range<usize>,
}

impl Witness {
    pub fn sigil(&self) -> &str {
        &self.sigil
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Global position range owned by this witness.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token_at(&self, position: usize) -> Option<&Token> {
        position
            .checked_sub(self.range.start)
            .and_then(|offset| self.tokens.get(offset))
    }
}

/// All witnesses of one collation session plus the sigil registry.
#[derive(Debug, Clone, Default)]
pub struct Collation {
    witnesses: Vec<Witness>,
    sigils: HashMap<String, usize>,
}

impl Collation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-tokenised witness and assign its global positions.
    pub fn add_witness<S, I, T>(&mut self, sigil: S, contents: I) -> Result<&Witness>
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let sigil = sigil.into();
        if self.sigils.contains_key(&sigil) {
            return Err(CollateError::DuplicateSigil(sigil));
        }

        // Leave one separator position after the previous witness
        let start = self.witnesses.last().map_or(0, |w| w.range.end + 1);
        let tokens: Vec<Token> = contents
            .into_iter()
            .enumerate()
            .map(|(offset, content)| Token {
                position: start + offset,
                content: content.into(),
            })
            .collect();
        if tokens.is_empty() {
            return Err(CollateError::EmptyWitness(sigil));
        }

        let range = start..start + tokens.len();
        log::debug!(
            "add_witness: {} with {} tokens at [{}, {})",
            sigil,
            tokens.len(),
            range.start,
            range.end
        );

        let idx = self.witnesses.len();
        self.sigils.insert(sigil.clone(), idx);
        self.witnesses.push(Witness {
            sigil,
            tokens,
            range,
        });
        Ok(&self.witnesses[idx])
    }

    pub fn witness(&self, sigil: &str) -> Result<&Witness> {
        self.sigils
            .get(sigil)
            .map(|&idx| &self.witnesses[idx])
            .ok_or_else(|| CollateError::UnknownWitness(sigil.to_string()))
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    pub fn witness_count(&self) -> usize {
        self.witnesses.len()
    }

    /// Global position range of the witness with this sigil.
    pub fn witness_range(&self, sigil: &str) -> Result<Range<usize>> {
        self.witness(sigil).map(Witness::range)
    }

    /// Position ranges of all witnesses, in insertion order.
    pub fn witness_ranges(&self) -> Vec<Range<usize>> {
        self.witnesses.iter().map(Witness::range).collect()
    }

    /// Union of all witness ranges (the stream minus separators).
    pub fn covered_positions(&self) -> RangeSet {
        self.witnesses.iter().map(Witness::range).collect()
    }

    /// The witness owning `position`, if any.
    pub fn witness_at(&self, position: usize) -> Option<&Witness> {
        let idx = self.witnesses.partition_point(|w| w.range.end <= position);
        self.witnesses
            .get(idx)
            .filter(|w| w.range.start <= position)
    }

    pub fn token(&self, position: usize) -> Option<&Token> {
        self.witness_at(position)
            .and_then(|w| w.token_at(position))
    }

    /// All tokens of the global stream in position order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.witnesses.iter().flat_map(|w| w.tokens.iter())
    }

    /// Length of the global stream including separator positions.
    pub fn stream_len(&self) -> usize {
        self.witnesses.last().map_or(0, |w| w.range.end)
    }
}
