//! Skill matching pipeline
//!
//! normalize -> encode against a fitted vocabulary -> cosine score ->
//! top-N selection with randomized tie-breaking.

pub mod normalize;
pub mod pipeline;
pub mod project;
pub mod selector;
pub mod shared;
pub mod similarity;
pub mod vocabulary;

pub use normalize::{normalize, normalize_tokens, normalize_value};
pub use pipeline::{Recommender, ScoredProject};
pub use project::{ProjectRecord, parse_projects};
pub use selector::{SelectionPolicy, Selector};
pub use shared::SharedVocabulary;
pub use similarity::{ScoreVector, cosine, score, score_matrix};
pub use vocabulary::{SkillVector, Vocabulary};
