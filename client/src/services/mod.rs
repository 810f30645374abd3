//! # External Service Integrations
//!
//! - **[`api`]**: Backend HTTP adapters (fee quotes, operation submission)

pub mod api;
