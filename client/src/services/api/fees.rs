//! # Fee Endpoints
//!
//! Fee quote for a prospective operation. Payload shaping only; staleness of quotes is
//! handled by the pipeline.

use shared::dto::fees::{FeeQuoteRequest, FeeQuoteResponse};

use super::client::{read_json, ApiClient};
use crate::core::{AppError, Result};

/// Quote fees: `POST /api/fees/calculate`.
#[tracing::instrument(skip(client, request), fields(
    code = %request.code,
    amount = %request.amount,
    currency = %request.currency_code
))]
pub async fn calculate_fees(
    client: &ApiClient,
    request: &FeeQuoteRequest,
) -> Result<FeeQuoteResponse> {
    let start = std::time::Instant::now();

    let response = client
        .post("fees/calculate")
        .json(request)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Fee quote network error");
            AppError::Api(format!("Network error: {}", e))
        })?;

    let result = read_json::<FeeQuoteResponse>(response).await;
    match &result {
        Ok(_) => tracing::debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Fee quote received"
        ),
        Err(e) => tracing::warn!(error = %e, "Fee quote failed"),
    }
    result
}
