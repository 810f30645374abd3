//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the banking backend over the REST API.
//!
//! ## Module Organization
//!
//! - [`fees`] - Fee quote request and breakdown response
//! - [`payments`] - Submission response for every money-movement operation
//! - [`error`] - Error body for non-2xx responses
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/fees/calculate
//! Content-Type: application/json
//!
//! {
//!   "from": "1001",
//!   "to": "1002",
//!   "amount": "100.00",
//!   "currencyCode": "USD",
//!   "code": "ACC_OWN_XFR",
//!   "payNow": "Y"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "comm": "1.00", "stamp": "2.00", "ta": "1.00", "ca": "1.00" }
//! ```

pub mod error;
pub mod fees;
pub mod payments;

pub use error::*;
pub use fees::*;
pub use payments::*;
