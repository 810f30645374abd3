//! Pipeline states.

use serde::Serialize;
use std::fmt;

/// State of a transaction pipeline.
///
/// ```text
/// Idle ─open─▶ DraftReady ─▶ FeesLoading ─▶ ReviewReady ─confirm─▶ Submitting
///                  │                          ▲     │                 │    │
///                  └──── skip fees ───────────┘     └─cancel─▶ Idle   │    ▼
///                                                   ▲        Failed ◀─┘  Succeeded ─▶ Idle
///                                                   └──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PipelineState {
    Idle,
    DraftReady,
    FeesLoading,
    ReviewReady,
    Submitting,
    Succeeded,
    Failed,
}

impl PipelineState {
    /// A backend call for the current session is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, PipelineState::FeesLoading | PipelineState::Submitting)
    }

    /// The session may be cancelled from this state.
    pub fn is_cancellable(&self) -> bool {
        matches!(
            self,
            PipelineState::DraftReady | PipelineState::FeesLoading | PipelineState::ReviewReady
        )
    }

    /// Transition table. Opening a draft is allowed from every state (last submit wins).
    pub fn can_transition_to(&self, next: PipelineState) -> bool {
        use PipelineState::*;
        match (self, next) {
            (_, DraftReady) => true,
            (DraftReady, FeesLoading) | (DraftReady, ReviewReady) => true,
            (FeesLoading, ReviewReady) => true,
            (ReviewReady, Submitting) => true,
            (Submitting, Succeeded) | (Submitting, Failed) => true,
            (Succeeded, Idle) | (Failed, ReviewReady) => true,
            (DraftReady, Idle) | (FeesLoading, Idle) | (ReviewReady, Idle) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::DraftReady => "draftReady",
            PipelineState::FeesLoading => "feesLoading",
            PipelineState::ReviewReady => "reviewReady",
            PipelineState::Submitting => "submitting",
            PipelineState::Succeeded => "succeeded",
            PipelineState::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
