//! Error types for skillrec

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkillrecError>;

#[derive(Debug, Error)]
pub enum SkillrecError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("missing config: {0}")]
    MissingConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),

    /// No fitted vocabulary is available; requests must be rejected.
    #[error("vocabulary unavailable: {0}")]
    VocabularyUnavailable(String),

    /// Vectors produced by different vocabulary fittings were mixed.
    #[error("vocabulary mismatch: expected {expected}, found {found}")]
    VocabularyMismatch { expected: String, found: String },
}

impl SkillrecError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
            Self::Config(_) => "config_error",
            Self::MissingConfig(_) => "missing_config",
            Self::Serialization(_) => "serialization_error",
            Self::ValidationFailed(_) => "validation_failed",
            Self::InvalidCorpus(_) => "invalid_corpus",
            Self::VocabularyUnavailable(_) => "vocabulary_unavailable",
            Self::VocabularyMismatch { .. } => "vocabulary_mismatch",
        }
    }
}
