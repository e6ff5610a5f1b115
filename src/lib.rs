//! skillrec - skill-based project recommendations
//!
//! The matching pipeline lives in [`matching`]; [`storage`] is the
//! load/save boundary for vocabulary artifacts and input files, and
//! [`cli`] is the command-line caller.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod storage;
pub mod test_utils;

pub use error::{Result, SkillrecError};
