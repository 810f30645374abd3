//! # Operation Submission Endpoints
//!
//! Every money-movement operation posts its payload to its own endpoint and answers
//! with the same `{status, msg, ...receipt}` envelope.

use shared::dto::payments::SubmitResponse;

use super::client::{read_json, ApiClient};
use crate::core::service::{Payload, SubmissionService};
use crate::core::{AppError, Result};

/// Submit a confirmed payload: `POST /api/{endpoint}`.
#[tracing::instrument(skip(client, payload), fields(endpoint = %endpoint, fields = payload.len()))]
pub async fn submit_operation(
    client: &ApiClient,
    endpoint: &str,
    payload: &Payload,
) -> Result<SubmitResponse> {
    tracing::info!("Submitting operation");
    let start = std::time::Instant::now();

    let response = client
        .post(endpoint)
        .json(payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Submission network error");
            AppError::Api(format!("Network error: {}", e))
        })?;

    let duration = start.elapsed();
    let result = read_json::<SubmitResponse>(response).await;
    match &result {
        Ok(response) if response.is_success() => tracing::info!(
            duration_ms = duration.as_millis() as u64,
            "Operation accepted"
        ),
        Ok(response) => tracing::warn!(
            msg = response.msg.as_deref().unwrap_or_default(),
            duration_ms = duration.as_millis() as u64,
            "Operation rejected by backend"
        ),
        Err(e) => tracing::error!(error = %e, "Submission failed"),
    }
    result
}

/// [`SubmissionService`] bound to one operation endpoint.
#[derive(Debug, Clone)]
pub struct OperationSubmitter {
    client: ApiClient,
    endpoint: String,
}

impl OperationSubmitter {
    pub fn new(client: ApiClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl SubmissionService for OperationSubmitter {
    async fn submit(&self, payload: &Payload) -> Result<SubmitResponse> {
        submit_operation(&self.client, &self.endpoint, payload).await
    }
}
