//! # Result Presentation
//!
//! Projects terminal pipeline outcomes into what a screen renders: a success summary
//! or a page-level alert. No business logic lives here.

use serde::Serialize;
use shared::utils::mask_account;
use uuid::Uuid;

use crate::core::AppError;
use crate::model::FeeSummary;
use crate::pipeline::{PipelineEvent, Receipt, GENERIC_FAILURE_MESSAGE};

/// Draft keys holding account identifiers, masked on the summary.
const ACCOUNT_KEYS: [&str; 4] = ["accId", "accNo", "from", "to"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

/// Success screen content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessSummary {
    pub session_id: Uuid,
    pub title: String,
    pub confirmation_number: Option<String>,
    pub message: Option<String>,
    /// Review fields with account numbers masked
    pub fields: Vec<SummaryLine>,
    pub fees: Option<FeeSummary>,
}

impl SuccessSummary {
    pub fn from_receipt(receipt: &Receipt) -> Self {
        let title = match receipt.code {
            Some(code) => format!("{} completed", code.title()),
            None => "Operation completed".to_string(),
        };
        let fields = receipt
            .draft
            .review_fields()
            .into_iter()
            .map(|field| SummaryLine {
                label: humanize(&field.key),
                value: if is_account_key(&field.key) {
                    mask_account(&field.value)
                } else {
                    field.value
                },
            })
            .collect();

        Self {
            session_id: receipt.session_id,
            title,
            confirmation_number: receipt.confirmation_number.clone(),
            message: receipt.message.clone().filter(|m| !m.trim().is_empty()),
            fields,
            fees: receipt.fee_summary(),
        }
    }

    /// Plain-text rendering, one line per entry.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        if let Some(number) = &self.confirmation_number {
            lines.push(format!("Confirmation number: {}", number));
        }
        if let Some(message) = &self.message {
            lines.push(message.clone());
        }
        lines.extend(
            self.fields
                .iter()
                .map(|line| format!("{}: {}", line.label, line.value)),
        );
        if let Some(fees) = &self.fees {
            lines.push(format!("Commission: {}", fees.commission));
            lines.push(format!("Stamp duty: {}", fees.stamp));
            lines.push(format!("Tax: {}", fees.tax));
            lines.push(format!("TCA: {}", fees.tca));
            lines.push(format!("Total fees: {}", fees.total));
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Error,
    Warning,
}

/// Page-level alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMessage {
    pub session_id: Option<Uuid>,
    pub level: AlertLevel,
    pub message: String,
}

impl AlertMessage {
    /// Alert for an error returned synchronously by a pipeline call.
    ///
    /// Validation messages are meant for the user; anything else is replaced by the
    /// generic text.
    pub fn from_error(error: &AppError) -> Self {
        let (level, message) = match error {
            AppError::Validation(message) => (AlertLevel::Warning, message.clone()),
            _ => (AlertLevel::Error, GENERIC_FAILURE_MESSAGE.to_string()),
        };
        Self {
            session_id: None,
            level,
            message,
        }
    }
}

/// What a screen shows for a terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultView {
    Success(SuccessSummary),
    Alert(AlertMessage),
}

/// Result view for `event`; non-terminal events produce nothing.
pub fn present(event: &PipelineEvent) -> Option<ResultView> {
    match event {
        PipelineEvent::Succeeded(receipt) => {
            Some(ResultView::Success(SuccessSummary::from_receipt(receipt)))
        }
        PipelineEvent::Failed {
            session_id,
            message,
        } => Some(ResultView::Alert(AlertMessage {
            session_id: Some(*session_id),
            level: AlertLevel::Error,
            message: message.clone(),
        })),
        _ => None,
    }
}

fn is_account_key(key: &str) -> bool {
    ACCOUNT_KEYS.contains(&key) || key.to_ascii_lowercase().contains("account")
}

/// `fromAccount` → `From account`.
fn humanize(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
    }
    label
}
