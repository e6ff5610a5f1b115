//! Top-N recommendation selection.
//!
//! Candidates are ranked by descending score, then randomized among
//! comparable scores so repeated requests surface different projects
//! without letting a clearly weaker match overtake a stronger one.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::similarity::ScoreVector;

/// Default width of a tie group.
pub const DEFAULT_TIE_EPSILON: f32 = 1e-6;

/// How the ranked order is perturbed before the top-N cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Shuffle only within groups of (near-)equal score.
    #[default]
    TieShuffle,
    /// Shuffle the whole ranking and sample N without replacement.
    ShuffleSample,
}

impl SelectionPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TieShuffle => "tie_shuffle",
            Self::ShuffleSample => "shuffle_sample",
        }
    }
}

impl std::str::FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "tie_shuffle" | "tie-shuffle" | "ties" => Ok(Self::TieShuffle),
            "shuffle_sample" | "shuffle-sample" | "sample" => Ok(Self::ShuffleSample),
            other => Err(format!(
                "invalid selection policy {other} (expected tie_shuffle|shuffle_sample)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Selector {
    policy: SelectionPolicy,
    tie_epsilon: f32,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(SelectionPolicy::default())
    }
}

impl Selector {
    #[must_use]
    pub const fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            tie_epsilon: DEFAULT_TIE_EPSILON,
        }
    }

    /// Scores closer than `epsilon` to the top of their group are treated as tied.
    #[must_use]
    pub fn with_tie_epsilon(mut self, epsilon: f32) -> Self {
        self.tie_epsilon = if epsilon.is_finite() { epsilon.max(0.0) } else { 0.0 };
        self
    }

    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    #[must_use]
    pub const fn tie_epsilon(&self) -> f32 {
        self.tie_epsilon
    }

    /// Pick at most `top_n` distinct candidate indices from `scores`.
    ///
    /// Returns an empty list when there are no candidates, when the query
    /// matched nothing in the vocabulary, or when `top_n` is zero.
    pub fn select<R: Rng + ?Sized>(
        &self,
        scores: &ScoreVector,
        top_n: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        if scores.is_empty() || !scores.query_matched() || top_n == 0 {
            return Vec::new();
        }

        let ranked = rank(scores.as_slice());
        let picked = match self.policy {
            SelectionPolicy::TieShuffle => self.tie_shuffle(scores.as_slice(), ranked, top_n, rng),
            SelectionPolicy::ShuffleSample => shuffle_sample(ranked, top_n, rng),
        };

        tracing::debug!(
            policy = self.policy.as_str(),
            candidates = scores.len(),
            selected = picked.len(),
            "selected recommendations"
        );
        picked
    }

    fn tie_shuffle<R: Rng + ?Sized>(
        &self,
        scores: &[f32],
        ranked: Vec<usize>,
        top_n: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let mut out = Vec::with_capacity(top_n.min(ranked.len()));
        let mut start = 0;
        while start < ranked.len() && out.len() < top_n {
            let head = score_at(scores, ranked[start]);
            let mut end = start + 1;
            while end < ranked.len() && head - score_at(scores, ranked[end]) <= self.tie_epsilon {
                end += 1;
            }
            let mut group = ranked[start..end].to_vec();
            group.shuffle(rng);
            let room = top_n - out.len();
            out.extend(group.into_iter().take(room));
            start = end;
        }
        out
    }
}

/// Eligible indices by descending score.
///
/// Zero-score candidates are dropped whenever at least one candidate
/// overlaps the query.
fn rank(scores: &[f32]) -> Vec<usize> {
    let any_overlap = scores.iter().any(|s| sanitize(*s) > 0.0);
    let mut ranked: Vec<usize> = (0..scores.len())
        .filter(|&i| !any_overlap || sanitize(scores[i]) > 0.0)
        .collect();
    ranked.sort_by(|&a, &b| score_at(scores, b).total_cmp(&score_at(scores, a)));
    ranked
}

fn shuffle_sample<R: Rng + ?Sized>(mut ranked: Vec<usize>, top_n: usize, rng: &mut R) -> Vec<usize> {
    ranked.shuffle(rng);
    let amount = top_n.min(ranked.len());
    rand::seq::index::sample(rng, ranked.len(), amount)
        .iter()
        .map(|i| ranked[i])
        .collect()
}

fn score_at(scores: &[f32], index: usize) -> f32 {
    sanitize(scores[index])
}

fn sanitize(score: f32) -> f32 {
    if score.is_nan() { 0.0 } else { score }
}
