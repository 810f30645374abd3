//! # Transaction Pipeline
//!
//! The preview → confirm → submit flow shared by every money-movement screen.
//!
//! - **[`config`]**: Per-flow parameters (key-map, fee policy, deadlines)
//! - **[`state`]**: Pipeline states and the transition table
//! - **[`session`]**: Preview sessions, review snapshots, receipts, payload assembly
//! - **[`events`]**: Notifications delivered to the UI loop
//! - **[`machine`]**: The state machine itself
//!
//! ```rust,no_run
//! use banking_client::flows;
//! use banking_client::{ApiClient, ClientConfig};
//!
//! # async fn run() -> banking_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api = ApiClient::new(&config)?;
//! let flow = flows::bill_payment(&config);
//! let (pipeline, events) = flow.pipeline(&api)?;
//!
//! let mut form = flow.form_state();
//! form.set("fromAccount", "10020030");
//! form.set("billerId", "ELEC01");
//! form.set("billRef", "449911");
//! form.set("amount", "42.10");
//! form.submit(|draft| {
//!     let _ = pipeline.open_with_draft(draft);
//! }).ok();
//!
//! while let Ok(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod events;
pub mod machine;
pub mod session;
pub mod state;


pub use config::{FeePolicy, FlowConfig, KeyMap};
pub use events::PipelineEvent;
pub use machine::{
    TransactionPipeline, FEES_REQUIRED_MESSAGE, GENERIC_FAILURE_MESSAGE, TIMEOUT_MESSAGE,
};
pub use session::{submission_payload, PreviewSession, Receipt, ReviewScreen, CONFIRMATION_KEYS};
pub use state::PipelineState;
