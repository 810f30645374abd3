//! Fee quote DTOs.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fee quote request sent to `POST /api/fees/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuoteRequest {
    pub from: String,
    pub to: String,
    pub amount: String,
    pub currency_code: String,
    pub code: String,
    pub pay_now: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acc_no: Option<String>,
}

/// Fee breakdown as returned by the backend.
///
/// Components are currency-formatted strings (`"USD 1.50"`). Some backends send bare
/// numbers instead, so both forms are accepted; a missing component decodes as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeeQuoteResponse {
    /// Commission
    #[serde(default, deserialize_with = "string_or_number")]
    pub comm: String,
    /// Stamp duty
    #[serde(default, deserialize_with = "string_or_number")]
    pub stamp: String,
    /// Tax
    #[serde(default, deserialize_with = "string_or_number")]
    pub ta: String,
    /// Transaction cost allowance
    #[serde(default, deserialize_with = "string_or_number")]
    pub ca: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number fee component, got {}",
            other
        ))),
    }
}
