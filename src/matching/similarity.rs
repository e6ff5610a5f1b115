//! Cosine similarity between a query vector and candidate vectors.

use rayon::prelude::*;

use crate::error::{Result, SkillrecError};

use super::vocabulary::SkillVector;

/// One similarity score per candidate, in candidate order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    scores: Vec<f32>,
    query_matched: bool,
}

impl ScoreVector {
    /// Build a score vector directly (mostly useful for selector tests).
    #[must_use]
    pub const fn new(scores: Vec<f32>, query_matched: bool) -> Self {
        Self {
            scores,
            query_matched,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// False when the query vector was all zero.
    #[must_use]
    pub const fn query_matched(&self) -> bool {
        self.query_matched
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f32> {
        self.scores
    }
}

/// Cosine similarity of two equal-length vectors; 0 when either norm is 0.
///
/// Slices of different lengths also give 0. This works on raw slices, so it
/// cannot tell which vocabulary produced them; use [`score`] to have mixed
/// vocabularies rejected with `VocabularyMismatch`.
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

/// Score every candidate row against the query.
pub fn score(query: &SkillVector, candidates: &[SkillVector]) -> Result<ScoreVector> {
    for candidate in candidates {
        ensure_compatible(query, candidate)?;
    }

    let scores = if query.is_zero() {
        vec![0.0; candidates.len()]
    } else {
        let q = query.as_slice();
        candidates
            .par_iter()
            .map(|row| cosine(q, row.as_slice()))
            .collect()
    };

    Ok(ScoreVector::new(scores, !query.is_zero()))
}

/// Full `queries x candidates` similarity matrix.
pub fn score_matrix(queries: &[SkillVector], candidates: &[SkillVector]) -> Result<Vec<Vec<f32>>> {
    queries
        .par_iter()
        .map(|query| score(query, candidates).map(ScoreVector::into_inner))
        .collect()
}

fn ensure_compatible(a: &SkillVector, b: &SkillVector) -> Result<()> {
    if a.vocabulary_id() != b.vocabulary_id() || a.len() != b.len() {
        return Err(SkillrecError::VocabularyMismatch {
            expected: format!("{:016x} ({} dims)", a.vocabulary_id(), a.len()),
            found: format!("{:016x} ({} dims)", b.vocabulary_id(), b.len()),
        });
    }
    Ok(())
}
