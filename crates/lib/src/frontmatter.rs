//! YAML front matter for rule files (`---` delimited key/value block before a markdown body).
//!
//! The block is serialized by `serde_yaml`, which keeps ordinary text plain and quotes anything
//! that would otherwise read back as a different value. Every adapter that emits front matter
//! goes through here.

use serde_yaml::{Mapping, Value};

/// A front matter value: free text or a literal boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterValue<'a> {
    Text(&'a str),
    Bool(bool),
}

impl From<FrontMatterValue<'_>> for Value {
    fn from(value: FrontMatterValue<'_>) -> Self {
        match value {
            FrontMatterValue::Text(s) => Value::String(s.to_string()),
            FrontMatterValue::Bool(b) => Value::Bool(b),
        }
    }
}

/// Render `entries`, in order, as a front matter block followed by one blank line.
pub fn render(entries: &[(&str, FrontMatterValue<'_>)]) -> String {
    let mapping: Mapping = entries
        .iter()
        .map(|(key, value)| (Value::String(key.to_string()), Value::from(*value)))
        .collect();
    let body = serde_yaml::to_string(&mapping).unwrap_or_else(|e| {
        // JSON scalars are valid YAML flow scalars.
        log::warn!("serializing front matter: {}", e);
        entries
            .iter()
            .map(|(key, value)| format!("{}: {}\n", key, json_scalar(*value)))
            .collect()
    });
    format!("---\n{}---\n\n", body)
}

fn json_scalar(value: FrontMatterValue<'_>) -> serde_json::Value {
    match value {
        FrontMatterValue::Text(s) => serde_json::Value::from(s),
        FrontMatterValue::Bool(b) => serde_json::Value::from(b),
    }
}
