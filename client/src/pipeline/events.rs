//! # Pipeline Events
//!
//! Results of background fee/submission tasks, delivered to the UI loop over an
//! `async_channel` receiver.

use uuid::Uuid;

use super::session::{Receipt, ReviewScreen};

/// Pipeline notifications, in the order the UI should apply them.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// Fee quote requested for the session
    FeesLoading { session_id: Uuid },
    /// Review screen ready (with or without a fee section)
    ReviewReady(ReviewScreen),
    /// Confirmed; submission in flight
    Submitting { session_id: Uuid },
    /// Backend accepted the operation; the pipeline is idle again
    Succeeded(Receipt),
    /// Submission failed; the session is back at review with draft and fees intact
    Failed { session_id: Uuid, message: String },
    /// User went back to the form
    Cancelled { session_id: Uuid },
}

impl PipelineEvent {
    pub fn session_id(&self) -> Uuid {
        match self {
            PipelineEvent::FeesLoading { session_id }
            | PipelineEvent::Submitting { session_id }
            | PipelineEvent::Failed { session_id, .. }
            | PipelineEvent::Cancelled { session_id } => *session_id,
            PipelineEvent::ReviewReady(review) => review.session_id,
            PipelineEvent::Succeeded(receipt) => receipt.session_id,
        }
    }
}
