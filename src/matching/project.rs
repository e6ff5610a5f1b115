//! Candidate project records.
//!
//! Records arrive as loosely structured JSON objects. Only `tech_stack`
//! matters for scoring; every other field is carried through untouched so
//! callers get back exactly what they sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SkillrecError};

use super::normalize::normalize_value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRecord {
    fields: Map<String, Value>,
}

impl ProjectRecord {
    /// Build a record from its three core fields.
    pub fn new(
        project_id: impl Into<Value>,
        title: impl Into<String>,
        tech_stack: impl Into<Value>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("project_id".to_string(), project_id.into());
        fields.insert("title".to_string(), Value::String(title.into()));
        fields.insert("tech_stack".to_string(), tech_stack.into());
        Self { fields }
    }

    /// Accept any JSON object; anything else is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SkillrecError::ValidationFailed(format!(
                "project record must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// `project_id`, falling back to `id`.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.fields
            .get("project_id")
            .or_else(|| self.fields.get("id"))
    }

    /// `title`, falling back to `name`.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.fields
            .get("title")
            .or_else(|| self.fields.get("name"))
            .and_then(Value::as_str)
    }

    /// Human-readable label for logs and terminal output.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.id(), self.title()) {
            (Some(id), Some(title)) => format!("{} ({})", title, display_id(id)),
            (None, Some(title)) => title.to_string(),
            (Some(id), None) => display_id(id),
            (None, None) => "<untitled>".to_string(),
        }
    }

    /// Whether the record carries a `tech_stack` field at all.
    #[must_use]
    pub fn has_tech_stack(&self) -> bool {
        self.fields.contains_key("tech_stack")
    }

    /// Normalized tech-stack tokens; a missing field is an empty stack.
    #[must_use]
    pub fn tech_stack_tokens(&self) -> Vec<String> {
        self.fields
            .get("tech_stack")
            .map(normalize_value)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Parse raw records, skipping (and logging) the ones that are not objects.
#[must_use]
pub fn parse_projects(values: Vec<Value>) -> Vec<ProjectRecord> {
    let total = values.len();
    let mut records = Vec::with_capacity(total);
    for (position, value) in values.into_iter().enumerate() {
        match ProjectRecord::from_value(value) {
            Ok(record) => {
                if !record.has_tech_stack() {
                    tracing::debug!(position, "project has no tech_stack; treating as empty");
                }
                records.push(record);
            }
            Err(err) => tracing::warn!(position, error = %err, "skipping project record"),
        }
    }
    if total > 0 && records.is_empty() {
        tracing::warn!(total, "no usable project records in batch");
    }
    records
}

fn display_id(id: &Value) -> String {
    match id {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
