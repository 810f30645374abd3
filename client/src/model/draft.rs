//! # Draft Transactions
//!
//! A [`DraftTransaction`] is the normalized output of a form: backend payload keys
//! mapped to JSON values, plus the `code` discriminator naming the backend operation.
//! The pipeline treats it as read-only input.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::operation::OperationCode;

/// Fields carried to the backend but never listed on the review screen.
pub const INTERNAL_FIELDS: [&str; 5] = ["payNow", "code", "toCurrencyCode", "action", "binding"];

/// Normalized form output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftTransaction {
    fields: BTreeMap<String, Value>,
}

/// One line of the review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewField {
    pub key: String,
    pub value: String,
}

impl DraftTransaction {
    /// Start a draft for `code`; the `code` field is set immediately.
    pub fn new(code: OperationCode) -> Self {
        let mut draft = Self::default();
        draft.set("code", code.as_str());
        draft
    }

    /// Wrap an already-built field map.
    pub fn from_fields(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Display text of a field, or `None` when it is missing, null or blank.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(display_value)
    }

    /// First non-blank field among `keys`.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    /// Operation code, when present and known.
    pub fn code(&self) -> Option<OperationCode> {
        self.text("code").and_then(|code| code.parse().ok())
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, Value> {
        self.fields
    }

    /// Fields shown to the user for review.
    ///
    /// Internal fields and null, empty or whitespace-only values are left out.
    pub fn review_fields(&self) -> Vec<ReviewField> {
        self.fields
            .iter()
            .filter(|(key, _)| !INTERNAL_FIELDS.contains(&key.as_str()))
            .filter_map(|(key, value)| {
                display_value(value).map(|value| ReviewField {
                    key: key.clone(),
                    value,
                })
            })
            .collect()
    }
}

/// Render a JSON value for display; `None` means "do not show".
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("Yes".to_string()),
        Value::Bool(false) => Some("No".to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
