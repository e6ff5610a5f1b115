//! Load/save boundary for vocabulary artifacts and input files.

pub mod artifact;
pub mod corpus;

pub use artifact::{VocabularyArtifact, load_vocabulary, save_vocabulary};
pub use corpus::{load_corpus, load_projects};
