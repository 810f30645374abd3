//! # Transaction Model
//!
//! Data handed between the form layer, the pipeline and the backend adapters.
//!
//! - **[`operation`]**: Backend operation codes
//! - **[`draft`]**: Normalized form output and review-list projection
//! - **[`fees`]**: Fee request derivation, fee breakdown and totals

pub mod draft;
pub mod fees;
pub mod operation;

pub use draft::{display_value, DraftTransaction, ReviewField, INTERNAL_FIELDS};
pub use fees::{
    fee_request, numeric_component, FeeBreakdown, FeeKey, FeeSummary, FEE_PAYLOAD_KEYS,
};
pub use operation::OperationCode;
