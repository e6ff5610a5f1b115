//! Corpus and project list readers.
//!
//! A corpus file is JSON in one of two shapes:
//!
//! - an array whose entries are skill strings or arrays of skill strings
//! - an object with `projects` (records with `tech_stack`) and/or
//!   `students` (records with `skills`)

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SkillrecError};
use crate::matching::normalize::normalize_value;

/// Read a corpus file into normalized token sequences.
pub fn load_corpus(path: &Path) -> Result<Vec<Vec<String>>> {
    let value = read_json(path)?;
    let corpus = corpus_from_value(&value)?;
    tracing::debug!(path = %path.display(), sequences = corpus.len(), "loaded corpus");
    Ok(corpus)
}

/// Interpret an already parsed corpus document.
pub fn corpus_from_value(value: &Value) -> Result<Vec<Vec<String>>> {
    match value {
        Value::Array(entries) => Ok(entries.iter().map(normalize_value).collect()),
        Value::Object(tables) => {
            if !tables.contains_key("projects") && !tables.contains_key("students") {
                return Err(SkillrecError::InvalidCorpus(
                    "corpus object needs a `projects` or `students` table".to_string(),
                ));
            }
            let mut corpus = Vec::new();
            corpus.extend(table_column(tables.get("projects"), "tech_stack")?);
            corpus.extend(table_column(tables.get("students"), "skills")?);
            Ok(corpus)
        }
        _ => Err(SkillrecError::InvalidCorpus(
            "corpus must be a JSON array or object".to_string(),
        )),
    }
}

fn table_column(table: Option<&Value>, column: &str) -> Result<Vec<Vec<String>>> {
    let Some(table) = table else {
        return Ok(Vec::new());
    };
    let rows = table
        .as_array()
        .ok_or_else(|| SkillrecError::InvalidCorpus(format!("table for `{column}` is not an array")))?;
    Ok(rows
        .iter()
        .map(|row| row.get(column).map(normalize_value).unwrap_or_default())
        .collect())
}

/// Read a project list: a JSON array, or an object with a `projects` array.
pub fn load_projects(path: &Path) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items),
        Value::Object(mut object) => match object.remove("projects") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(SkillrecError::InvalidCorpus(format!(
                "{}: expected a `projects` array",
                path.display()
            ))),
        },
        _ => Err(SkillrecError::InvalidCorpus(format!(
            "{}: expected a JSON array of projects",
            path.display()
        ))),
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .map_err(|err| SkillrecError::InvalidCorpus(format!("read {}: {err}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|err| SkillrecError::InvalidCorpus(format!("parse {}: {err}", path.display())))
}
