//! End-to-end recommendation: skills text + projects in, ranked projects out.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use serde_json::Value;

use crate::config::RecommendConfig;
use crate::error::Result;

use super::normalize::{normalize, normalize_value};
use super::project::{ProjectRecord, parse_projects};
use super::selector::Selector;
use super::shared::SharedVocabulary;
use super::similarity::score;

/// A selected project together with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProject {
    pub score: f32,
    pub project: ProjectRecord,
}

/// Runs the matching pipeline against a shared vocabulary.
#[derive(Debug, Clone)]
pub struct Recommender {
    vocabulary: Arc<SharedVocabulary>,
    selector: Selector,
    shuffle_candidates: bool,
}

impl Recommender {
    #[must_use]
    pub fn new(vocabulary: Arc<SharedVocabulary>) -> Self {
        Self {
            vocabulary,
            selector: Selector::default(),
            shuffle_candidates: true,
        }
    }

    #[must_use]
    pub fn from_config(vocabulary: Arc<SharedVocabulary>, config: &RecommendConfig) -> Self {
        Self {
            vocabulary,
            selector: Selector::new(config.policy).with_tie_epsilon(config.tie_epsilon),
            shuffle_candidates: config.shuffle_candidates,
        }
    }

    #[must_use]
    pub const fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    /// Toggle the presentation shuffle applied to candidates before scoring.
    #[must_use]
    pub const fn with_shuffle_candidates(mut self, shuffle: bool) -> Self {
        self.shuffle_candidates = shuffle;
        self
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Arc<SharedVocabulary> {
        &self.vocabulary
    }

    /// Recommend up to `top_n` of `projects` for a comma-separated skills string.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        skills: &str,
        projects: Vec<Value>,
        top_n: usize,
        rng: &mut R,
    ) -> Result<Vec<Value>> {
        Ok(self
            .recommend_records(normalize(skills), parse_projects(projects), top_n, rng)?
            .into_iter()
            .map(|scored| scored.project.into_value())
            .collect())
    }

    /// Like [`Self::recommend`], but `skills` may be any JSON value.
    pub fn recommend_value<R: Rng + ?Sized>(
        &self,
        skills: &Value,
        projects: Vec<Value>,
        top_n: usize,
        rng: &mut R,
    ) -> Result<Vec<Value>> {
        Ok(self
            .recommend_records(normalize_value(skills), parse_projects(projects), top_n, rng)?
            .into_iter()
            .map(|scored| scored.project.into_value())
            .collect())
    }

    /// Core pipeline over already parsed inputs.
    ///
    /// Fails only when no vocabulary is loaded; "nothing to recommend" is an
    /// empty list.
    pub fn recommend_records<R: Rng + ?Sized>(
        &self,
        query: Vec<String>,
        mut projects: Vec<ProjectRecord>,
        top_n: usize,
        rng: &mut R,
    ) -> Result<Vec<ScoredProject>> {
        let vocabulary = self.vocabulary.snapshot()?;

        if projects.is_empty() {
            tracing::warn!("no projects provided");
            return Ok(Vec::new());
        }

        // Must happen before any vector is built so indices stay aligned.
        if self.shuffle_candidates {
            projects.shuffle(rng);
        }

        let known = vocabulary.known_tokens(&query);
        if known.is_empty() {
            tracing::warn!(query = ?query, "no query skill is in the vocabulary");
            return Ok(Vec::new());
        }
        tracing::debug!(skills = ?known, "recognized query skills");

        let query_vector = vocabulary.encode(&query);
        let stacks: Vec<Vec<String>> = projects
            .iter()
            .map(ProjectRecord::tech_stack_tokens)
            .collect();
        let candidate_vectors = vocabulary.encode_many(&stacks);
        let scores = score(&query_vector, &candidate_vectors)?;
        let picked = self.selector.select(&scores, top_n, rng);

        let scored_values = scores.as_slice();
        let mut slots: Vec<Option<ProjectRecord>> = projects.into_iter().map(Some).collect();
        let recommendations: Vec<ScoredProject> = picked
            .into_iter()
            .filter_map(|index| {
                slots[index].take().map(|project| ScoredProject {
                    score: scored_values[index],
                    project,
                })
            })
            .collect();

        tracing::info!(
            candidates = slots.len(),
            recommended = recommendations.len(),
            vocabulary = %vocabulary.fingerprint(),
            "recommendation complete"
        );
        Ok(recommendations)
    }
}
