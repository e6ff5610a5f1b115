//! Fitted skill vocabulary and multi-hot encoding.
//!
//! A [`Vocabulary`] is the sorted set of every skill token seen while
//! fitting. Token `i` in that order owns dimension `i` of every
//! [`SkillVector`] the vocabulary produces. Once built it is never mutated;
//! a refit yields a new vocabulary with a different fingerprint.

use std::collections::{BTreeSet, HashMap};

use sha2::{Digest, Sha256};

use crate::error::{Result, SkillrecError};

/// Immutable token -> dimension mapping.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
    fingerprint: String,
    id: u64,
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Vocabulary {}

impl Vocabulary {
    /// Fit a vocabulary from a corpus of token sequences.
    ///
    /// Tokens are expected to be normalized already; empty tokens are
    /// ignored. The result is sorted lexicographically so the same corpus
    /// always yields the same dimension indices.
    pub fn fit<C, S, T>(corpus: C) -> Self
    where
        C: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut distinct = BTreeSet::new();
        for sequence in corpus {
            for token in sequence {
                let token = token.as_ref();
                if !token.is_empty() && !distinct.contains(token) {
                    distinct.insert(token.to_string());
                }
            }
        }
        let vocabulary = Self::build(distinct.into_iter().collect());
        tracing::info!(
            size = vocabulary.len(),
            fingerprint = %vocabulary.fingerprint,
            "fitted skill vocabulary"
        );
        vocabulary
    }

    /// Rebuild a vocabulary from an ordered token list (e.g. a saved artifact).
    ///
    /// The list must be strictly increasing and contain no empty tokens.
    pub fn from_sorted_tokens(tokens: Vec<String>) -> Result<Self> {
        if let Some(empty) = tokens.iter().position(String::is_empty) {
            return Err(SkillrecError::ValidationFailed(format!(
                "vocabulary token {empty} is empty"
            )));
        }
        if let Some(pos) = tokens.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(SkillrecError::ValidationFailed(format!(
                "vocabulary tokens are not sorted and distinct at position {}: {:?} >= {:?}",
                pos + 1,
                tokens[pos],
                tokens[pos + 1]
            )));
        }
        Ok(Self::build(tokens))
    }

    fn build(tokens: Vec<String>) -> Self {
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.clone(), i))
            .collect();
        let digest = fingerprint_digest(&tokens);
        let mut id_bytes = [0u8; 8];
        id_bytes.copy_from_slice(&digest[..8]);
        Self {
            tokens,
            index,
            fingerprint: hex::encode(digest),
            id: u64::from_be_bytes(id_bytes),
        }
    }

    /// Number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in dimension order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Hex SHA-256 of the ordered token list.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Short numeric identity stamped on every vector this vocabulary encodes.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Dimension owned by `token`, if known.
    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Tokens from `tokens` that the vocabulary knows, in input order.
    #[must_use]
    pub fn known_tokens<'a, S: AsRef<str>>(&self, tokens: &'a [S]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(|token| token.as_ref())
            .filter(|token| self.contains(token))
            .collect()
    }

    /// Multi-hot encode a token sequence. Unknown tokens are dropped.
    #[must_use]
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> SkillVector {
        let mut values = vec![0.0f32; self.len()];
        let mut active = 0usize;
        for token in tokens {
            if let Some(dim) = self.index_of(token.as_ref()) {
                if values[dim] == 0.0 {
                    values[dim] = 1.0;
                    active += 1;
                }
            }
        }
        SkillVector {
            values,
            active,
            vocabulary_id: self.id,
        }
    }

    /// Encode each sequence; row `i` of the result encodes `sequences[i]`.
    #[must_use]
    pub fn encode_many<S: AsRef<str>>(&self, sequences: &[Vec<S>]) -> Vec<SkillVector> {
        sequences.iter().map(|tokens| self.encode(tokens)).collect()
    }
}

fn fingerprint_digest(tokens: &[String]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for token in tokens {
        hasher.update(token.as_bytes());
        hasher.update([0u8]);
    }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Binary skill vector produced by a specific [`Vocabulary`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVector {
    values: Vec<f32>,
    active: usize,
    vocabulary_id: u64,
}

impl SkillVector {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when no vocabulary token was present in the source sequence.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.active == 0
    }

    /// Number of set bits.
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Indices of the set bits in ascending order.
    #[must_use]
    pub fn active_dims(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0.0)
            .map(|(dim, _)| dim)
            .collect()
    }

    /// Identity of the vocabulary that produced this vector.
    #[must_use]
    pub const fn vocabulary_id(&self) -> u64 {
        self.vocabulary_id
    }
}
