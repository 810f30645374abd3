//! # Service Traits
//!
//! The two backend call shapes the pipeline depends on. Production code injects the
//! HTTP adapters from [`crate::services::api`]; tests inject mocks.

use async_trait::async_trait;
use serde_json::Value;
use shared::dto::fees::{FeeQuoteRequest, FeeQuoteResponse};
use shared::dto::payments::SubmitResponse;
use std::collections::BTreeMap;

use super::error::Result;

/// JSON object sent to a submission endpoint.
pub type Payload = BTreeMap<String, Value>;

/// Fee calculation endpoint.
#[async_trait]
pub trait FeeQuoteService: Send + Sync {
    /// Quote the fees for a prospective operation.
    async fn calculate_fees(&self, request: &FeeQuoteRequest) -> Result<FeeQuoteResponse>;
}

/// Operation submission endpoint (transfer, bill payment, order, ...).
///
/// A backend-declared failure is `Ok` with `status: error`; `Err` is reserved for
/// transport and decoding failures.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, payload: &Payload) -> Result<SubmitResponse>;
}
