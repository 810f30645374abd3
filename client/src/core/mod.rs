//! # Core Abstractions
//!
//! Error types and service traits used for dependency injection.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Backend service traits (`FeeQuoteService`, `SubmissionService`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use banking_client::core::service::{FeeQuoteService, SubmissionService};
//! use banking_client::services::api::ApiClient;
//! use banking_client::ClientConfig;
//! use std::sync::Arc;
//!
//! # fn example() -> banking_client::Result<()> {
//! let api = Arc::new(ApiClient::new(&ClientConfig::default())?);
//! let fees: Arc<dyn FeeQuoteService> = api.clone();
//! let submitter: Arc<dyn SubmissionService> = Arc::new(api.submitter("transfers/own"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{FeeQuoteService, Payload, SubmissionService};
