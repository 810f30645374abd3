//! # Backend API Client Module
//!
//! HTTP adapters for the two backend call shapes the pipeline consumes.
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct, request building, error-body decoding
//! ├── fees.rs      - Fee quote endpoint (FeeQuoteService)
//! └── payments.rs  - Operation submission endpoints (SubmissionService)
//! ```

pub mod client;
pub mod fees;
pub mod payments;

pub use client::ApiClient;
pub use fees::calculate_fees;
pub use payments::{submit_operation, OperationSubmitter};
