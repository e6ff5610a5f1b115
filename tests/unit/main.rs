//! Unit test suite entry point.

mod config_tests;
mod normalize_tests;
mod pipeline_tests;
mod selector_tests;
mod vocabulary_tests;
