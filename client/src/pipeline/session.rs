//! # Preview Sessions
//!
//! A [`PreviewSession`] is the draft plus whatever the pipeline has learned about it
//! (fee quote, last failure). Only the pipeline mutates it; everybody else gets
//! snapshots: [`ReviewScreen`] while the user decides, [`Receipt`] once the backend
//! accepted the operation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use shared::dto::payments::SubmitResponse;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::config::{FeePolicy, KeyMap};
use crate::core::service::Payload;
use crate::model::{DraftTransaction, FeeBreakdown, FeeKey, FeeSummary, OperationCode, ReviewField};

/// Receipt keys that carry the confirmation number, in lookup order.
pub const CONFIRMATION_KEYS: [&str; 5] = [
    "confirmationNumber",
    "confirmationNo",
    "referenceNumber",
    "refNo",
    "txnId",
];

/// One draft moving through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSession {
    pub id: Uuid,
    pub draft: DraftTransaction,
    /// Key the attached quote (or the pending fetch) was derived from
    pub fee_key: Option<FeeKey>,
    pub fees: Option<FeeBreakdown>,
    /// Message of the last failed submission, shown on the review screen
    pub last_error: Option<String>,
    pub opened_at: DateTime<Utc>,
}

impl PreviewSession {
    pub fn new(draft: DraftTransaction) -> Self {
        Self {
            id: Uuid::new_v4(),
            draft,
            fee_key: None,
            fees: None,
            last_error: None,
            opened_at: Utc::now(),
        }
    }

    /// Confirm is possible once the flow's fee policy is satisfied.
    pub fn fees_satisfy(&self, policy: FeePolicy) -> bool {
        policy == FeePolicy::Optional || self.fees.is_some()
    }

    /// Snapshot for the review screen.
    pub fn review(&self, policy: FeePolicy) -> ReviewScreen {
        ReviewScreen {
            session_id: self.id,
            code: self.draft.code(),
            fields: self.draft.review_fields(),
            fees: self.fees.as_ref().map(FeeSummary::from),
            can_confirm: self.fees_satisfy(policy),
            error: self.last_error.clone(),
        }
    }
}

/// What the user reviews before confirming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewScreen {
    pub session_id: Uuid,
    pub code: Option<OperationCode>,
    pub fields: Vec<ReviewField>,
    /// Absent when fees were skipped or could not be quoted
    pub fees: Option<FeeSummary>,
    pub can_confirm: bool,
    pub error: Option<String>,
}

/// Payload for the submission endpoint: draft fields, then `comm/stamp/tax/tca` when a
/// quote is attached, then the flow's key-map.
pub fn submission_payload(
    draft: &DraftTransaction,
    fees: Option<&FeeBreakdown>,
    key_map: &KeyMap,
) -> Payload {
    let mut payload: Payload = draft.fields().clone();
    if let Some(fees) = fees {
        for (key, value) in fees.payload_fields() {
            payload.insert(key.to_string(), value);
        }
    }
    key_map.apply(payload)
}

/// Success payload handed to result presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub session_id: Uuid,
    pub code: Option<OperationCode>,
    pub confirmation_number: Option<String>,
    pub message: Option<String>,
    pub draft: DraftTransaction,
    pub fees: Option<FeeBreakdown>,
    /// Operation-specific receipt fields as returned by the backend
    pub details: BTreeMap<String, Value>,
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(session: PreviewSession, response: SubmitResponse) -> Self {
        let confirmation_number = CONFIRMATION_KEYS
            .iter()
            .find_map(|key| response.receipt.get(*key).and_then(crate::model::display_value));

        Self {
            session_id: session.id,
            code: session.draft.code(),
            confirmation_number,
            message: response.msg,
            draft: session.draft,
            fees: session.fees,
            details: response.receipt,
            completed_at: Utc::now(),
        }
    }

    pub fn fee_summary(&self) -> Option<FeeSummary> {
        self.fees.as_ref().map(FeeSummary::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::dto::payments::SubmitStatus;

    fn draft() -> DraftTransaction {
        DraftTransaction::new(OperationCode::OwnAccountTransfer)
            .with("fromAccount", "1001")
            .with("toAccount", "1002")
            .with("amount", "100.00")
            .with("description", "rent")
            .with("payNow", "Y")
    }

    fn fees() -> FeeBreakdown {
        FeeBreakdown {
            commission: "1.00".to_string(),
            stamp: "2.00".to_string(),
            tax: "1.00".to_string(),
            tca: "1.00".to_string(),
        }
    }

    #[test]
    fn test_payload_merges_fees_then_renames() {
        let map = KeyMap::from([
            ("fromAccount", "from"),
            ("toAccount", "to"),
            ("description", "desc"),
        ]);
        let payload = submission_payload(&draft(), Some(&fees()), &map);

        assert_eq!(payload["from"], "1001");
        assert_eq!(payload["to"], "1002");
        assert_eq!(payload["desc"], "rent");
        assert_eq!(payload["amount"], "100.00");
        assert_eq!(payload["code"], "ACC_OWN_XFR");
        assert_eq!(payload["payNow"], "Y");
        assert_eq!(payload["comm"], "1.00");
        assert_eq!(payload["stamp"], "2.00");
        assert_eq!(payload["tax"], "1.00");
        assert_eq!(payload["tca"], "1.00");
    }

    #[test]
    fn test_payload_without_fees_omits_fee_keys() {
        let payload = submission_payload(&draft(), None, &KeyMap::new());
        for key in crate::model::FEE_PAYLOAD_KEYS {
            assert!(!payload.contains_key(key));
        }
        assert_eq!(payload["fromAccount"], "1001");
    }

    #[test]
    fn test_review_respects_fee_policy() {
        let mut session = PreviewSession::new(draft());
        assert!(session.review(FeePolicy::Optional).can_confirm);
        assert!(!session.review(FeePolicy::Required).can_confirm);

        session.fees = Some(fees());
        let review = session.review(FeePolicy::Required);
        assert!(review.can_confirm);
        assert_eq!(review.fees.map(|f| f.total).as_deref(), Some("5.00"));
        assert_eq!(review.fields.len(), 4);
    }

    #[test]
    fn test_receipt_picks_confirmation_number() {
        let mut session = PreviewSession::new(draft());
        session.fees = Some(fees());
        let response = SubmitResponse {
            status: SubmitStatus::Success,
            msg: Some("Done".to_string()),
            receipt: [("refNo".to_string(), json!(778899))].into_iter().collect(),
        };

        let receipt = Receipt::new(session, response);
        assert_eq!(receipt.confirmation_number.as_deref(), Some("778899"));
        assert_eq!(receipt.code, Some(OperationCode::OwnAccountTransfer));
        assert_eq!(receipt.fee_summary().map(|f| f.total).as_deref(), Some("5.00"));
    }

    #[test]
    fn test_review_and_receipt_serialize_session_id() {
        let session = PreviewSession::new(draft());
        let id = session.id.to_string();

        let review = serde_json::to_value(session.review(FeePolicy::Optional)).unwrap();
        assert_eq!(review["session_id"], json!(id));
        assert_eq!(review["can_confirm"], json!(true));

        let response = SubmitResponse {
            status: SubmitStatus::Success,
            msg: None,
            receipt: BTreeMap::new(),
        };
        let receipt = serde_json::to_value(Receipt::new(session, response)).unwrap();
        assert_eq!(receipt["session_id"], json!(id));
    }
}
