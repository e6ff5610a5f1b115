//! Property test suite entry point.

mod determinism_tests;
mod matching_properties;
