//! Process-wide vocabulary handle.
//!
//! Request handlers take an `Arc` snapshot at the start of a request and
//! use it until the request finishes. Refits and reloads publish a whole
//! new vocabulary with a single atomic store, so a reader never observes a
//! half-built one.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::error::{Result, SkillrecError};
use crate::storage::artifact;

use super::vocabulary::Vocabulary;

#[derive(Default)]
pub struct SharedVocabulary {
    current: ArcSwapOption<Vocabulary>,
}

impl std::fmt::Debug for SharedVocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.current.load();
        f.debug_struct("SharedVocabulary")
            .field("loaded", &current.is_some())
            .field(
                "fingerprint",
                &current.as_deref().map(|vocab| vocab.fingerprint().to_string()),
            )
            .finish()
    }
}

impl SharedVocabulary {
    /// A handle with nothing loaded; every snapshot fails until one is published.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            current: ArcSwapOption::from_pointee(vocabulary),
        }
    }

    /// Open a saved artifact. A failed load leaves the handle empty.
    pub fn open(path: &Path) -> Self {
        let shared = Self::empty();
        if let Err(err) = shared.reload(path) {
            tracing::error!(path = %path.display(), error = %err, "vocabulary failed to load");
        }
        shared
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// Current vocabulary, or `VocabularyUnavailable` when none is loaded.
    pub fn snapshot(&self) -> Result<Arc<Vocabulary>> {
        self.current.load_full().ok_or_else(|| {
            SkillrecError::VocabularyUnavailable("no fitted vocabulary is loaded".to_string())
        })
    }

    /// Publish a new vocabulary, returning the one it replaced.
    pub fn replace(&self, vocabulary: Vocabulary) -> Option<Arc<Vocabulary>> {
        let next = Arc::new(vocabulary);
        tracing::info!(
            size = next.len(),
            fingerprint = %next.fingerprint(),
            "publishing vocabulary"
        );
        self.current.swap(Some(next))
    }

    /// Fit from `corpus` and publish the result.
    pub fn refit<C, S, T>(&self, corpus: C) -> Arc<Vocabulary>
    where
        C: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let next = Arc::new(Vocabulary::fit(corpus));
        self.current.store(Some(Arc::clone(&next)));
        next
    }

    /// Load an artifact and publish it.
    ///
    /// On failure the previously published vocabulary (if any) stays in place.
    pub fn reload(&self, path: &Path) -> Result<Arc<Vocabulary>> {
        let vocabulary = Arc::new(artifact::load_vocabulary(path)?);
        self.current.store(Some(Arc::clone(&vocabulary)));
        tracing::info!(
            path = %path.display(),
            size = vocabulary.len(),
            "vocabulary loaded"
        );
        Ok(vocabulary)
    }

    /// Drop the published vocabulary so requests fail closed.
    pub fn clear(&self) {
        self.current.store(None);
    }
}
