//! Submission response DTOs, shared by every money-movement operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Outcome flag of a submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Success,
    Error,
}

/// Response body of `POST /api/{operation}`.
///
/// Operation-specific receipt fields (confirmation number, posting date, ...) are kept
/// verbatim in `receipt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitResponse {
    pub status: SubmitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(flatten)]
    pub receipt: BTreeMap<String, Value>,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.status == SubmitStatus::Success
    }
}
