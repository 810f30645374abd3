//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the banking client and the backend API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::fees`]**: Fee quote request/response
//!   - **[`dto::payments`]**: Operation submission response
//!   - **[`dto::error`]**: Error body returned with non-2xx statuses
//! - **[`utils`]**: Display helpers
//!   - **[`utils::mask_account_number`]**: Hide all but the last digits of an account
//!   - **[`utils::format_money`]**: Fixed two-decimal rendering
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON with a few legacy short keys (`comm`, `ta`, `ca`).
//! Every rename is declared on the struct, never done by hand at call sites.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::fees::{FeeQuoteRequest, FeeQuoteResponse};
//!
//! let request = FeeQuoteRequest {
//!     from: "1001".to_string(),
//!     to: "1002".to_string(),
//!     amount: "100.00".to_string(),
//!     currency_code: "USD".to_string(),
//!     code: "ACC_OWN_XFR".to_string(),
//!     pay_now: "Y".to_string(),
//!     to_currency_code: None,
//!     acc_no: None,
//! };
//! let body = serde_json::to_value(&request).unwrap();
//! assert_eq!(body["currencyCode"], "USD");
//! assert!(body.get("accNo").is_none());
//!
//! let quote: FeeQuoteResponse =
//!     serde_json::from_str(r#"{"comm":"1.00","stamp":2,"ta":"1.00","ca":"1.00"}"#).unwrap();
//! assert_eq!(quote.stamp, "2");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
