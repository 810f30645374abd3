//! # Transaction Pipeline
//!
//! One generic state machine for every preview → confirm → submit screen.
//!
//! Public methods are synchronous and return immediately; backend calls run as Tokio
//! tasks and report back through [`PipelineEvent`]s. Every task result is checked
//! against the session it was started for, so a quote or submission result that
//! arrives after a cancel or a newer draft is dropped instead of applied.

use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::fees::FeeQuoteRequest;
use shared::dto::payments::SubmitResponse;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::config::FlowConfig;
use super::events::PipelineEvent;
use super::session::{submission_payload, PreviewSession, Receipt, ReviewScreen};
use super::state::PipelineState;
use crate::core::service::{FeeQuoteService, Payload, SubmissionService};
use crate::core::{AppError, Result};
use crate::model::{fee_request, DraftTransaction, FeeBreakdown, FeeKey, OperationCode};

/// Shown when a submission fails without a usable backend message.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "We could not complete your request. Please try again later.";
/// Shown when a submission exceeds its deadline.
pub const TIMEOUT_MESSAGE: &str = "The bank did not respond in time. Please try again.";
/// Returned by `confirm` for flows that require a fee quote when none is attached.
pub const FEES_REQUIRED_MESSAGE: &str =
    "Fees could not be calculated for this operation. Please try again later.";

struct Inner {
    state: PipelineState,
    session: Option<PreviewSession>,
}

impl Inner {
    fn transition(&mut self, code: OperationCode, next: PipelineState) {
        if !self.state.can_transition_to(next) {
            warn!(flow = %code, from = %self.state, to = %next, "Unexpected pipeline transition");
        }
        debug!(flow = %code, from = %self.state, to = %next, "Pipeline transition");
        self.state = next;
    }
}

/// State shared with spawned tasks.
#[derive(Clone)]
struct Shared {
    flow: Arc<FlowConfig>,
    inner: Arc<RwLock<Inner>>,
    events: Sender<PipelineEvent>,
}

impl Shared {
    fn emit(&self, event: PipelineEvent) {
        if self.events.try_send(event).is_err() {
            debug!(flow = %self.flow.code, "Pipeline event dropped: no listener");
        }
    }
}

/// Preview/confirm pipeline for one flow, with its adapters injected.
pub struct TransactionPipeline {
    shared: Shared,
    fees: Arc<dyn FeeQuoteService>,
    submitter: Arc<dyn SubmissionService>,
}

impl TransactionPipeline {
    /// Build a pipeline and the receiver its events are delivered on.
    pub fn new(
        flow: FlowConfig,
        fees: Arc<dyn FeeQuoteService>,
        submitter: Arc<dyn SubmissionService>,
    ) -> Result<(Self, Receiver<PipelineEvent>)> {
        flow.validate()?;
        let (events, receiver) = async_channel::unbounded();

        let pipeline = Self {
            shared: Shared {
                flow: Arc::new(flow),
                inner: Arc::new(RwLock::new(Inner {
                    state: PipelineState::Idle,
                    session: None,
                })),
                events,
            },
            fees,
            submitter,
        };
        Ok((pipeline, receiver))
    }

    pub fn flow(&self) -> &FlowConfig {
        &self.shared.flow
    }

    pub fn state(&self) -> PipelineState {
        self.shared.inner.read().state
    }

    /// Snapshot of the active session.
    pub fn session(&self) -> Option<PreviewSession> {
        self.shared.inner.read().session.clone()
    }

    /// Review screen, available only in `reviewReady`.
    pub fn review(&self) -> Option<ReviewScreen> {
        let inner = self.shared.inner.read();
        if inner.state != PipelineState::ReviewReady {
            return None;
        }
        inner
            .session
            .as_ref()
            .map(|session| session.review(self.shared.flow.fee_policy))
    }

    /// Start a session for `draft`, replacing any pending one.
    ///
    /// The fee request is derived from this draft, so a changed draft never shows an
    /// older quote.
    pub fn open_with_draft(&self, draft: DraftTransaction) -> Result<Uuid> {
        let runtime = current_runtime()?;
        let flow = &self.shared.flow;

        let mut session = PreviewSession::new(draft);
        let session_id = session.id;
        let request = if flow.skip_fee_calculation {
            None
        } else {
            let request = fee_request(&session.draft, &flow.default_currency);
            session.fee_key = Some(FeeKey::from(&request));
            Some(request)
        };

        {
            let mut inner = self.shared.inner.write();
            if let Some(previous) = &inner.session {
                if inner.state.is_busy() {
                    info!(
                        flow = %flow.code,
                        previous = %previous.id,
                        state = %inner.state,
                        "Replacing pending preview session"
                    );
                }
            }
            inner.session = Some(session);
            inner.transition(flow.code, PipelineState::DraftReady);

            // Events are sent under the lock so listeners see them in transition order.
            if request.is_some() {
                inner.transition(flow.code, PipelineState::FeesLoading);
                self.shared.emit(PipelineEvent::FeesLoading { session_id });
            } else {
                inner.transition(flow.code, PipelineState::ReviewReady);
                if let Some(review) = inner.session.as_ref().map(|s| s.review(flow.fee_policy)) {
                    self.shared.emit(PipelineEvent::ReviewReady(review));
                }
            }
        }
        info!(flow = %flow.code, session = %session_id, "Preview session opened");

        if let Some(request) = request {
            runtime.spawn(fetch_fees(
                self.shared.clone(),
                self.fees.clone(),
                session_id,
                request,
            ));
        }

        Ok(session_id)
    }

    /// Change/Cancel: discard the session and hand the draft back for editing.
    pub fn cancel(&self) -> Result<DraftTransaction> {
        let flow = &self.shared.flow;
        let session = {
            let mut inner = self.shared.inner.write();
            if !inner.state.is_cancellable() {
                return Err(AppError::State(match inner.state {
                    PipelineState::Submitting => {
                        "cannot cancel while the submission is in flight".to_string()
                    }
                    state => format!("nothing to cancel while {}", state),
                }));
            }
            let session = inner
                .session
                .take()
                .ok_or_else(|| AppError::State("no preview session".to_string()))?;
            inner.transition(flow.code, PipelineState::Idle);
            self.shared.emit(PipelineEvent::Cancelled {
                session_id: session.id,
            });
            session
        };

        info!(flow = %flow.code, session = %session.id, "Preview session cancelled");
        Ok(session.draft)
    }

    /// Confirm the reviewed operation and submit it.
    pub fn confirm(&self) -> Result<Uuid> {
        let runtime = current_runtime()?;
        let flow = &self.shared.flow;

        let (session_id, payload) = {
            let mut inner = self.shared.inner.write();
            if inner.state != PipelineState::ReviewReady {
                return Err(AppError::State(format!(
                    "cannot confirm while {}",
                    inner.state
                )));
            }
            let Some(session) = inner.session.as_mut() else {
                return Err(AppError::State("no preview session".to_string()));
            };
            if !session.fees_satisfy(flow.fee_policy) {
                warn!(flow = %flow.code, session = %session.id, "Confirm blocked: fee quote required");
                return Err(AppError::Validation(FEES_REQUIRED_MESSAGE.to_string()));
            }

            session.last_error = None;
            let payload = submission_payload(&session.draft, session.fees.as_ref(), &flow.key_map);
            let session_id = session.id;
            inner.transition(flow.code, PipelineState::Submitting);
            self.shared.emit(PipelineEvent::Submitting { session_id });
            (session_id, payload)
        };

        info!(flow = %flow.code, session = %session_id, "Submitting confirmed operation");
        runtime.spawn(submit(
            self.shared.clone(),
            self.submitter.clone(),
            session_id,
            payload,
        ));
        Ok(session_id)
    }
}

fn current_runtime() -> Result<Handle> {
    Handle::try_current().map_err(|_| {
        AppError::State("the transaction pipeline must run inside a Tokio runtime".to_string())
    })
}

async fn fetch_fees(
    shared: Shared,
    fees: Arc<dyn FeeQuoteService>,
    session_id: Uuid,
    request: FeeQuoteRequest,
) {
    let flow = shared.flow.clone();
    let quote = match tokio::time::timeout(flow.fee_timeout, fees.calculate_fees(&request)).await {
        Ok(Ok(quote)) => Some(FeeBreakdown::from(quote)),
        Ok(Err(e)) => {
            warn!(flow = %flow.code, session = %session_id, error = %e, "Fee quote failed, reviewing without fees");
            None
        }
        Err(_) => {
            warn!(
                flow = %flow.code,
                session = %session_id,
                timeout_ms = flow.fee_timeout.as_millis() as u64,
                "Fee quote timed out, reviewing without fees"
            );
            None
        }
    };

    let key = FeeKey::from(&request);
    let mut inner = shared.inner.write();
    if inner.state != PipelineState::FeesLoading {
        debug!(session = %session_id, state = %inner.state, "Discarding fee quote: not loading fees");
        return;
    }
    let Some(session) = inner.session.as_mut().filter(|s| s.id == session_id) else {
        debug!(session = %session_id, "Discarding fee quote for a superseded session");
        return;
    };
    if session.fee_key.as_ref() != Some(&key) {
        warn!(session = %session_id, "Discarding fee quote for a changed draft");
        return;
    }

    session.fees = quote;
    let review = session.review(flow.fee_policy);
    inner.transition(flow.code, PipelineState::ReviewReady);
    // Still holding the lock: a cancel cannot slip in between the transition and the event.
    shared.emit(PipelineEvent::ReviewReady(review));
}

async fn submit(
    shared: Shared,
    submitter: Arc<dyn SubmissionService>,
    session_id: Uuid,
    payload: Payload,
) {
    let flow = shared.flow.clone();
    let result = tokio::time::timeout(flow.submit_timeout, submitter.submit(&payload))
        .await
        .unwrap_or_else(|_| {
            Err(AppError::Timeout(format!(
                "no response within {} ms",
                flow.submit_timeout.as_millis()
            )))
        });

    let outcome: std::result::Result<SubmitResponse, String> = match result {
        Ok(response) if response.is_success() => Ok(response),
        Ok(response) => Err(response
            .msg
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())),
        Err(e) => {
            error!(flow = %flow.code, session = %session_id, error = %e, "Submission failed");
            Err(match e {
                AppError::Timeout(_) => TIMEOUT_MESSAGE,
                _ => GENERIC_FAILURE_MESSAGE,
            }
            .to_string())
        }
    };

    let mut inner = shared.inner.write();
    let current = inner.state == PipelineState::Submitting
        && inner.session.as_ref().is_some_and(|s| s.id == session_id);
    if !current {
        warn!(
            session = %session_id,
            accepted = outcome.is_ok(),
            "Discarding submission result for a superseded session"
        );
        return;
    }

    let event = match outcome {
        Ok(response) => {
            inner.transition(flow.code, PipelineState::Succeeded);
            let Some(session) = inner.session.take() else {
                return;
            };
            inner.transition(flow.code, PipelineState::Idle);
            PipelineEvent::Succeeded(Receipt::new(session, response))
        }
        Err(message) => {
            inner.transition(flow.code, PipelineState::Failed);
            if let Some(session) = inner.session.as_mut() {
                session.last_error = Some(message.clone());
            }
            inner.transition(flow.code, PipelineState::ReviewReady);
            PipelineEvent::Failed {
                session_id,
                message,
            }
        }
    };

    match &event {
        PipelineEvent::Succeeded(receipt) => info!(
            flow = %flow.code,
            session = %session_id,
            confirmation = receipt.confirmation_number.as_deref().unwrap_or("-"),
            "Operation succeeded"
        ),
        PipelineEvent::Failed { message, .. } => {
            warn!(flow = %flow.code, session = %session_id, %message, "Operation failed")
        }
        _ => {}
    }
    shared.emit(event);
}
