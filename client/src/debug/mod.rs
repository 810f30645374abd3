//! # Logging Infrastructure
//!
//! Structured `tracing` output for the banking client.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use banking_client::debug::{self, LogConfig};
//!
//! # fn main() -> banking_client::Result<()> {
//! // Initialize at app startup and keep the guard alive
//! let _guard = debug::init(&LogConfig::from_env())?;
//!
//! tracing::info!(flow = "ACC_OWN_XFR", "Review screen opened");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `banking_client=debug,info`)
//! - `BANKING_LOG_DIR`: Log directory (default: `logs`)
//! - `BANKING_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
