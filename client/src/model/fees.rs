//! # Fee Breakdown
//!
//! Fee quote request derivation and the client-side view of a quote.
//!
//! `total_fees` is presentation only: the backend is the authority on what is
//! actually charged.

use serde::Serialize;
use serde_json::Value;
use shared::dto::fees::{FeeQuoteRequest, FeeQuoteResponse};
use shared::utils::format_money;

use super::draft::DraftTransaction;

/// Fee keys merged into the submission payload.
pub const FEE_PAYLOAD_KEYS: [&str; 4] = ["comm", "stamp", "tax", "tca"];

/// Fee components as returned by the backend, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    pub commission: String,
    pub stamp: String,
    pub tax: String,
    /// Transaction cost allowance
    pub tca: String,
}

impl From<FeeQuoteResponse> for FeeBreakdown {
    fn from(quote: FeeQuoteResponse) -> Self {
        Self {
            commission: quote.comm,
            stamp: quote.stamp,
            tax: quote.ta,
            tca: quote.ca,
        }
    }
}

impl FeeBreakdown {
    /// Sum of the four components after stripping currency symbols and letters.
    pub fn total_fees(&self) -> f64 {
        [&self.commission, &self.stamp, &self.tax, &self.tca]
            .into_iter()
            .map(|component| numeric_component(component))
            .sum()
    }

    /// [`Self::total_fees`] with two decimals.
    pub fn total_display(&self) -> String {
        format_money(self.total_fees())
    }

    /// `comm/stamp/tax/tca` entries for the submission payload.
    pub fn payload_fields(&self) -> [(&'static str, Value); 4] {
        [
            (FEE_PAYLOAD_KEYS[0], Value::String(self.commission.clone())),
            (FEE_PAYLOAD_KEYS[1], Value::String(self.stamp.clone())),
            (FEE_PAYLOAD_KEYS[2], Value::String(self.tax.clone())),
            (FEE_PAYLOAD_KEYS[3], Value::String(self.tca.clone())),
        ]
    }
}

/// Fee section of the review screen and receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeSummary {
    pub commission: String,
    pub stamp: String,
    pub tax: String,
    pub tca: String,
    /// Two-decimal total, e.g. `"5.00"`
    pub total: String,
}

impl From<&FeeBreakdown> for FeeSummary {
    fn from(fees: &FeeBreakdown) -> Self {
        Self {
            commission: fees.commission.clone(),
            stamp: fees.stamp.clone(),
            tax: fees.tax.clone(),
            tca: fees.tca.clone(),
            total: fees.total_display(),
        }
    }
}

/// Numeric value of a formatted fee string: the first run of digits, with `,` grouping
/// skipped and at most one decimal point. Currency text around it (`"Rs.2.00"`,
/// `"Tk. 1.50"`, `"1,000.00 EUR"`) is ignored. No digits at all counts as zero.
pub fn numeric_component(raw: &str) -> f64 {
    let Some(start) = raw.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };

    let mut number = String::new();
    let mut seen_point = false;
    let mut chars = raw[start..].chars().peekable();
    while let Some(c) = chars.next() {
        let digit_follows = chars.peek().is_some_and(|next| next.is_ascii_digit());
        match c {
            '0'..='9' => number.push(c),
            ',' if digit_follows => {}
            '.' if digit_follows && !seen_point => {
                seen_point = true;
                number.push(c);
            }
            _ => break,
        }
    }
    number.parse::<f64>().unwrap_or(0.0)
}

/// Identity of a fee quote. A quote is only valid for the key it was fetched with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeeKey {
    pub from: String,
    pub to: String,
    pub amount: String,
    pub currency: String,
    pub code: String,
}

impl From<&FeeQuoteRequest> for FeeKey {
    fn from(request: &FeeQuoteRequest) -> Self {
        Self {
            from: request.from.clone(),
            to: request.to.clone(),
            amount: request.amount.clone(),
            currency: request.currency_code.clone(),
            code: request.code.clone(),
        }
    }
}

/// Build the fee quote request for the current state of `draft`.
///
/// Defaults: `amount` "0", `currencyCode` `default_currency`, `payNow` "N".
/// `toCurrencyCode` and `accNo` are only sent when the draft has them.
pub fn fee_request(draft: &DraftTransaction, default_currency: &str) -> FeeQuoteRequest {
    FeeQuoteRequest {
        from: draft
            .first_text(&["fromAccount", "from", "accId"])
            .unwrap_or_default(),
        to: draft.first_text(&["toAccount", "to"]).unwrap_or_default(),
        amount: draft.text("amount").unwrap_or_else(|| "0".to_string()),
        currency_code: draft
            .text("currencyCode")
            .unwrap_or_else(|| default_currency.to_string()),
        code: draft.text("code").unwrap_or_default(),
        pay_now: draft.text("payNow").unwrap_or_else(|| "N".to_string()),
        to_currency_code: draft.text("toCurrencyCode"),
        acc_no: draft.text("accNo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OperationCode;

    fn breakdown(comm: &str, stamp: &str, tax: &str, tca: &str) -> FeeBreakdown {
        FeeBreakdown {
            commission: comm.to_string(),
            stamp: stamp.to_string(),
            tax: tax.to_string(),
            tca: tca.to_string(),
        }
    }

    #[test]
    fn test_total_of_plain_components() {
        let fees = breakdown("1.00", "2.00", "1.00", "1.00");
        assert_eq!(fees.total_display(), "5.00");
        assert_eq!(FeeSummary::from(&fees).total, "5.00");
    }

    #[test]
    fn test_total_strips_currency_text() {
        let fees = breakdown("USD 1.50", "$0.25", "", "EUR1,000.00");
        assert_eq!(fees.total_display(), "1001.75");
        assert_eq!(numeric_component("USD 1.50"), 1.5);
        assert_eq!(numeric_component("N/A"), 0.0);
    }

    #[test]
    fn test_total_with_dotted_currency_prefixes() {
        let fees = breakdown("Tk. 1.50", "Rs.2.00", "USD 1.00", "1.00");
        assert_eq!(fees.total_display(), "5.50");
        assert_eq!(numeric_component("Rs.2.00"), 2.0);
        assert_eq!(numeric_component("Tk. 1.50"), 1.5);
        assert_eq!(numeric_component("1,250.75 EUR"), 1250.75);
        assert_eq!(numeric_component("Rs."), 0.0);
    }

    #[test]
    fn test_fee_request_defaults() {
        let draft = DraftTransaction::new(OperationCode::CheckbookOrder).with("accId", "3003");
        let request = fee_request(&draft, "USD");
        assert_eq!(request.from, "3003");
        assert_eq!(request.to, "");
        assert_eq!(request.amount, "0");
        assert_eq!(request.currency_code, "USD");
        assert_eq!(request.code, "ACC_OC");
        assert_eq!(request.pay_now, "N");
        assert_eq!(request.to_currency_code, None);
        assert_eq!(request.acc_no, None);
    }

    #[test]
    fn test_fee_request_reads_current_draft() {
        let draft = DraftTransaction::new(OperationCode::OwnAccountTransfer)
            .with("fromAccount", "1001")
            .with("toAccount", "1002")
            .with("amount", "100.00")
            .with("currencyCode", "EUR")
            .with("toCurrencyCode", "USD")
            .with("accNo", "1001")
            .with("payNow", "Y");
        let request = fee_request(&draft, "USD");
        assert_eq!(request.from, "1001");
        assert_eq!(request.to, "1002");
        assert_eq!(request.currency_code, "EUR");
        assert_eq!(request.pay_now, "Y");
        assert_eq!(request.to_currency_code.as_deref(), Some("USD"));
        assert_eq!(request.acc_no.as_deref(), Some("1001"));

        let edited = draft.with("amount", "250.00");
        assert_ne!(
            FeeKey::from(&request),
            FeeKey::from(&fee_request(&edited, "USD"))
        );
    }
}
