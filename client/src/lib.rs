//! # Banking Client - Library Root
//!
//! Client-side orchestration for the online banking money-movement screens.
//! Every transfer, bill payment, checkbook order, P2P payment and mobile top-up runs
//! through the same preview/confirm pipeline:
//!
//! ```text
//! form ──draft──▶ pipeline ──fee request──▶ /api/fees/calculate
//!                    │ ▲
//!                    │ └──── review (with or without fees) ◀──── user
//!                    ▼
//!               confirm ──payload──▶ /api/{operation} ──▶ result presentation
//! ```
//!
//! ## Module Structure
//!
//! - **core**: `AppError`, `Result<T>`, service traits for dependency injection
//! - **config**: `ClientConfig` loaded from the environment
//! - **debug**: `tracing` setup with daily-rotated log files
//! - **services**: HTTP adapters implementing the service traits
//! - **model**: Drafts, operation codes, fee breakdowns
//! - **forms**: Declarative form specs and reducer-style form state
//! - **pipeline**: The preview/confirm state machine
//! - **flows**: Ready-made flow definitions (form + pipeline config + endpoint)
//! - **presentation**: Success summaries and page-level alerts
//!
//! ## Core Concepts
//!
//! ### Event-Driven Pipeline
//!
//! Pipeline calls never block: fee quotes and submissions run as Tokio tasks and
//! report back as [`PipelineEvent`]s over an `async_channel` receiver. The UI loop
//! drains the receiver and renders from the events or from snapshots.
//!
//! ### State Management
//!
//! The active preview session lives in `Arc<RwLock<_>>` (parking_lot), written only
//! by the pipeline and locked briefly, never across an `.await`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use banking_client::{flows, presentation, ApiClient, ClientConfig};
//!
//! # async fn run() -> banking_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api = ApiClient::new(&config)?;
//! let flow = flows::own_account_transfer(&config);
//! let (pipeline, events) = flow.pipeline(&api)?;
//!
//! let mut form = flow.form_state();
//! form.set("fromAccount", "10020030");
//! form.set("toAccount", "10020031");
//! form.set("amount", "100.00");
//! if form.submit(|draft| { let _ = pipeline.open_with_draft(draft); }).is_ok() {
//!     while let Ok(event) = events.recv().await {
//!         if let Some(view) = presentation::present(&event) {
//!             println!("{:?}", view);
//!             break;
//!         }
//!         if matches!(event, banking_client::PipelineEvent::ReviewReady(_)) {
//!             pipeline.confirm()?;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod flows;
pub mod forms;
pub mod model;
pub mod pipeline;
pub mod presentation;
pub mod services;

pub use config::ClientConfig;
pub use self::core::{AppError, Result};
pub use flows::FlowDefinition;
pub use forms::{FormAction, FormState};
pub use model::{DraftTransaction, OperationCode};
pub use pipeline::{PipelineEvent, PipelineState, TransactionPipeline};
pub use services::api::ApiClient;
