//! Saved vocabulary artifact.
//!
//! The artifact is a self-describing JSON document. Callers treat it as an
//! opaque blob: `save_vocabulary` writes one, `load_vocabulary` turns one
//! back into a [`Vocabulary`] or reports it unavailable.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillrecError};
use crate::matching::Vocabulary;

/// Current on-disk format version.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyArtifact {
    pub format_version: u32,
    pub created_at: DateTime<Utc>,
    pub fingerprint: String,
    pub size: usize,
    pub tokens: Vec<String>,
}

impl VocabularyArtifact {
    #[must_use]
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            created_at: Utc::now(),
            fingerprint: vocabulary.fingerprint().to_string(),
            size: vocabulary.len(),
            tokens: vocabulary.tokens().to_vec(),
        }
    }

    /// Rebuild and verify the vocabulary described by this artifact.
    pub fn into_vocabulary(self) -> Result<Vocabulary> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(SkillrecError::ValidationFailed(format!(
                "unsupported artifact format version {} (expected {ARTIFACT_FORMAT_VERSION})",
                self.format_version
            )));
        }
        if self.size != self.tokens.len() {
            return Err(SkillrecError::ValidationFailed(format!(
                "artifact declares {} tokens but contains {}",
                self.size,
                self.tokens.len()
            )));
        }
        let vocabulary = Vocabulary::from_sorted_tokens(self.tokens)?;
        if vocabulary.fingerprint() != self.fingerprint {
            return Err(SkillrecError::VocabularyMismatch {
                expected: self.fingerprint,
                found: vocabulary.fingerprint().to_string(),
            });
        }
        Ok(vocabulary)
    }
}

/// Write the vocabulary atomically (temp file + rename).
pub fn save_vocabulary(path: &Path, vocabulary: &Vocabulary) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let artifact = VocabularyArtifact::from_vocabulary(vocabulary);
    let payload = serde_json::to_string_pretty(&artifact)
        .map_err(|err| SkillrecError::Serialization(format!("vocabulary serialize: {err}")))?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, payload)?;
    match fs::rename(&temp_path, path) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path)?;
            if let Err(err) = fs::rename(&temp_path, path) {
                let _ = fs::remove_file(&temp_path);
                return Err(SkillrecError::Io(err));
            }
        }
        Err(err) => {
            let _ = fs::remove_file(&temp_path);
            return Err(SkillrecError::Io(err));
        }
    }

    tracing::info!(
        path = %path.display(),
        size = vocabulary.len(),
        fingerprint = %vocabulary.fingerprint(),
        "saved vocabulary artifact"
    );
    Ok(())
}

/// Load a saved vocabulary.
///
/// Every failure (missing file, bad JSON, failed verification) is reported
/// as [`SkillrecError::VocabularyUnavailable`]. An empty vocabulary is
/// never returned in place of a broken artifact.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let unavailable =
        |reason: String| SkillrecError::VocabularyUnavailable(format!("{}: {reason}", path.display()));

    let raw = fs::read_to_string(path).map_err(|err| unavailable(err.to_string()))?;
    let artifact: VocabularyArtifact =
        serde_json::from_str(&raw).map_err(|err| unavailable(format!("parse: {err}")))?;
    artifact
        .into_vocabulary()
        .map_err(|err| unavailable(err.to_string()))
}
