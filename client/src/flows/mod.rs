//! # Flow Catalog
//!
//! Ready-made money-movement flows. Each [`FlowDefinition`] bundles the form that
//! produces the draft, the pipeline parameters and the submission endpoint, so a
//! screen only wires a [`FormState`] to a [`TransactionPipeline`].

use async_channel::Receiver;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::core::{AppError, Result};
use crate::forms::{CurrencyComposition, FieldSpec, FormSpec, FormState, FormValues, Rule, Visibility};
use crate::model::OperationCode;
use crate::pipeline::{FeePolicy, FlowConfig, PipelineEvent, TransactionPipeline};
use crate::services::api::ApiClient;

/// Recurrence values of own-account transfers.
pub const FREQUENCIES: [&str; 3] = ["ONCE", "WEEKLY", "MONTHLY"];

const ACCOUNT_MAX_LEN: usize = 20;
const DESCRIPTION_MAX_LEN: usize = 140;

/// One money-movement screen.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    /// Stable identifier used in logs and routing
    pub slug: &'static str,
    /// Submission endpoint below `/api/`
    pub endpoint: &'static str,
    pub form: Arc<FormSpec>,
    pub config: FlowConfig,
}

impl FlowDefinition {
    pub fn code(&self) -> OperationCode {
        self.config.code
    }

    pub fn title(&self) -> &'static str {
        self.config.code.title()
    }

    /// Fresh form for this flow.
    pub fn form_state(&self) -> FormState {
        FormState::new(self.form.clone())
    }

    /// Pipeline wired to the HTTP adapters of `api`.
    pub fn pipeline(&self, api: &ApiClient) -> Result<(TransactionPipeline, Receiver<PipelineEvent>)> {
        TransactionPipeline::new(
            self.config.clone(),
            Arc::new(api.clone()),
            Arc::new(api.submitter(self.endpoint)),
        )
    }
}

fn from_account() -> FieldSpec {
    FieldSpec::new("fromAccount", "From account")
        .required()
        .rule(Rule::Digits)
        .rule(Rule::MaxLength(ACCOUNT_MAX_LEN))
}

fn amount() -> FieldSpec {
    FieldSpec::new("amount", "Amount").required().rule(Rule::Amount)
}

fn description() -> FieldSpec {
    FieldSpec::new("description", "Description").rule(Rule::MaxLength(DESCRIPTION_MAX_LEN))
}

fn pay_now(values: &FormValues) -> Option<Value> {
    let once = values
        .get("frequency")
        .map(|f| f.trim() == FREQUENCIES[0])
        .unwrap_or(true);
    Some(json!(if once { "Y" } else { "N" }))
}

/// Transfer between the customer's own accounts, optionally recurring.
pub fn own_account_transfer(config: &ClientConfig) -> FlowDefinition {
    let code = OperationCode::OwnAccountTransfer;
    let form = FormSpec::new(code)
        .field(from_account())
        .field(
            FieldSpec::new("toAccount", "To account")
                .required()
                .rule(Rule::Digits)
                .rule(Rule::MaxLength(ACCOUNT_MAX_LEN))
                .rule(Rule::DiffersFrom("fromAccount")),
        )
        .field(amount())
        .field(description())
        .field(
            FieldSpec::new("frequency", "Frequency")
                .required()
                .rule(Rule::OneOf(&FREQUENCIES))
                .default_value(FREQUENCIES[0]),
        )
        .field(
            FieldSpec::new("untilDate", "Until")
                .required()
                .visible_when(Visibility::WhenNotEquals("frequency", FREQUENCIES[0])),
        )
        .derived("payNow", pay_now);

    FlowDefinition {
        slug: "own-account-transfer",
        endpoint: "transfers/own",
        form: Arc::new(form),
        config: FlowConfig::from_client_config(code, config).with_key_map([
            ("fromAccount", "from"),
            ("toAccount", "to"),
            ("description", "desc"),
            ("untilDate", "endDate"),
        ]),
    }
}

/// Transfer to another customer's account.
pub fn other_account_transfer(config: &ClientConfig) -> FlowDefinition {
    let code = OperationCode::OtherAccountTransfer;
    let form = FormSpec::new(code)
        .field(from_account())
        .field(
            FieldSpec::new("toAccount", "Beneficiary account")
                .required()
                .rule(Rule::Digits)
                .rule(Rule::MinLength(6))
                .rule(Rule::MaxLength(ACCOUNT_MAX_LEN))
                .rule(Rule::DiffersFrom("fromAccount")),
        )
        .field(
            FieldSpec::new("beneficiaryName", "Beneficiary name")
                .required()
                .rule(Rule::MaxLength(60)),
        )
        .field(amount())
        .field(description())
        .fixed("payNow", "Y");

    FlowDefinition {
        slug: "other-account-transfer",
        endpoint: "transfers/other",
        form: Arc::new(form),
        config: FlowConfig::from_client_config(code, config)
            .with_fee_policy(FeePolicy::Required)
            .with_key_map([
                ("fromAccount", "from"),
                ("toAccount", "to"),
                ("description", "desc"),
            ]),
    }
}

/// Biller payment.
pub fn bill_payment(config: &ClientConfig) -> FlowDefinition {
    let code = OperationCode::BillPayment;
    let form = FormSpec::new(code)
        .field(from_account())
        .field(FieldSpec::new("billerId", "Biller").required())
        .field(
            FieldSpec::new("billRef", "Bill reference")
                .required()
                .rule(Rule::MaxLength(30)),
        )
        .field(amount())
        .fixed("payNow", "Y");

    FlowDefinition {
        slug: "bill-payment",
        endpoint: "bills/pay",
        form: Arc::new(form),
        config: FlowConfig::from_client_config(code, config)
            .with_fee_policy(FeePolicy::Required)
            .with_key_map([("fromAccount", "accId"), ("amount", "amt")]),
    }
}

/// Checkbook reorder. No variable fee, so the review shows no fee section.
pub fn checkbook_order(config: &ClientConfig) -> FlowDefinition {
    let code = OperationCode::CheckbookOrder;
    let form = FormSpec::new(code)
        .field(from_account())
        .field(
            FieldSpec::new("leaves", "Number of leaves")
                .required()
                .rule(Rule::Digits)
                .default_value("25"),
        )
        .field(
            FieldSpec::new("deliveryBranch", "Delivery branch")
                .required()
                .rule(Rule::MaxLength(40)),
        )
        .fixed("payNow", "Y");

    FlowDefinition {
        slug: "checkbook-order",
        endpoint: "checkbooks/order",
        form: Arc::new(form),
        config: FlowConfig::from_client_config(code, config)
            .skip_fee_calculation()
            .with_key_map([("fromAccount", "accId")]),
    }
}

/// Person-to-person payment addressed by phone number.
pub fn p2p_transfer(config: &ClientConfig) -> FlowDefinition {
    let code = OperationCode::PeerToPeer;
    let form = FormSpec::new(code)
        .field(from_account())
        .field(
            FieldSpec::new("toAccount", "Recipient phone")
                .required()
                .rule(Rule::Digits)
                .rule(Rule::MinLength(8))
                .rule(Rule::MaxLength(15)),
        )
        .field(
            FieldSpec::new("confirmToAccount", "Confirm recipient phone")
                .required()
                .rule(Rule::Matches("toAccount"))
                .transient(),
        )
        .field(amount())
        .field(FieldSpec::new("currencyCode", "Currency").rule(Rule::MaxLength(3)))
        .field(description())
        .fixed("payNow", "Y")
        .compose_currency(CurrencyComposition {
            amount_field: "amount",
            currency_field: "currencyCode",
            target_key: "txnAmount",
            default_currency: config.default_currency.clone(),
        });

    FlowDefinition {
        slug: "p2p-transfer",
        endpoint: "p2p/send",
        form: Arc::new(form),
        config: FlowConfig::from_client_config(code, config)
            .with_fee_policy(FeePolicy::Required)
            .with_key_map([
                ("fromAccount", "from"),
                ("toAccount", "to"),
                ("description", "desc"),
            ]),
    }
}

/// Prepaid mobile top-up.
pub fn mobile_recharge(config: &ClientConfig) -> FlowDefinition {
    let code = OperationCode::MobileRecharge;
    let form = FormSpec::new(code)
        .field(from_account())
        .field(
            FieldSpec::new("mobileNumber", "Mobile number")
                .required()
                .rule(Rule::Digits)
                .rule(Rule::MinLength(8))
                .rule(Rule::MaxLength(15)),
        )
        .field(FieldSpec::new("operator", "Operator").required())
        .field(amount())
        .fixed("payNow", "Y");

    FlowDefinition {
        slug: "mobile-recharge",
        endpoint: "mobile/recharge",
        form: Arc::new(form),
        config: FlowConfig::from_client_config(code, config)
            .with_key_map([("fromAccount", "accId"), ("amount", "amt")]),
    }
}

/// Every flow, in [`OperationCode::all`] order.
pub fn catalog(config: &ClientConfig) -> Vec<FlowDefinition> {
    OperationCode::all()
        .iter()
        .map(|code| definition(*code, config))
        .collect()
}

/// Flow for an operation code string such as `"BILL_PAY"`.
pub fn find(code: &str, config: &ClientConfig) -> Result<FlowDefinition> {
    let code: OperationCode = code
        .parse()
        .map_err(|_| AppError::NotFound(format!("No flow for operation code {}", code)))?;
    Ok(definition(code, config))
}

fn definition(code: OperationCode, config: &ClientConfig) -> FlowDefinition {
    match code {
        OperationCode::OwnAccountTransfer => own_account_transfer(config),
        OperationCode::OtherAccountTransfer => other_account_transfer(config),
        OperationCode::BillPayment => bill_payment(config),
        OperationCode::CheckbookOrder => checkbook_order(config),
        OperationCode::PeerToPeer => p2p_transfer(config),
        OperationCode::MobileRecharge => mobile_recharge(config),
    }
}
