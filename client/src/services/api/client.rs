//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::dto::error::ErrorResponse;
use shared::dto::fees::{FeeQuoteRequest, FeeQuoteResponse};

use super::payments::OperationSubmitter;
use crate::config::ClientConfig;
use crate::core::service::FeeQuoteService;
use crate::core::{AppError, Result};

/// HTTP client for communicating with the banking backend.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// The transport timeout comes from `config.http_timeout` so a dead backend never
    /// freezes a screen.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session_token: None,
        })
    }

    /// Attach the session token issued by the authentication layer.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Submission adapter bound to one operation endpoint (e.g. `"transfers/own"`).
    pub fn submitter(&self, endpoint: impl Into<String>) -> OperationSubmitter {
        OperationSubmitter::new(self.clone(), endpoint)
    }

    /// Base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST builder with the session token attached when present.
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        let request = self.client.post(self.url(path));
        match &self.session_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

/// Decode a success body as `T`, or a non-2xx body as the backend's error message.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse response: {}", e)))
    } else {
        match response.json::<ErrorResponse>().await {
            Ok(error) => Err(AppError::Api(error.error)),
            Err(_) => Err(AppError::Api(format!(
                "Request failed with status {}",
                status.as_u16()
            ))),
        }
    }
}

#[async_trait::async_trait]
impl FeeQuoteService for ApiClient {
    async fn calculate_fees(&self, request: &FeeQuoteRequest) -> Result<FeeQuoteResponse> {
        super::fees::calculate_fees(self, request).await
    }
}
