//! Backend operation codes carried in every draft as the `code` field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::AppError;

/// Backend operation a draft targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationCode {
    /// Transfer between two of the customer's own accounts
    #[serde(rename = "ACC_OWN_XFR")]
    OwnAccountTransfer,
    /// Transfer to another customer's account
    #[serde(rename = "ACC_OTH_XFR")]
    OtherAccountTransfer,
    /// Utility / biller payment
    #[serde(rename = "BILL_PAY")]
    BillPayment,
    /// Checkbook reorder
    #[serde(rename = "ACC_OC")]
    CheckbookOrder,
    /// Person-to-person payment by phone or alias
    #[serde(rename = "P2P_XFR")]
    PeerToPeer,
    /// Prepaid mobile top-up
    #[serde(rename = "MOB_RECH")]
    MobileRecharge,
}

impl OperationCode {
    pub fn all() -> &'static [OperationCode] {
        &[
            OperationCode::OwnAccountTransfer,
            OperationCode::OtherAccountTransfer,
            OperationCode::BillPayment,
            OperationCode::CheckbookOrder,
            OperationCode::PeerToPeer,
            OperationCode::MobileRecharge,
        ]
    }

    /// Wire value of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationCode::OwnAccountTransfer => "ACC_OWN_XFR",
            OperationCode::OtherAccountTransfer => "ACC_OTH_XFR",
            OperationCode::BillPayment => "BILL_PAY",
            OperationCode::CheckbookOrder => "ACC_OC",
            OperationCode::PeerToPeer => "P2P_XFR",
            OperationCode::MobileRecharge => "MOB_RECH",
        }
    }

    /// Human-readable title for headers and receipts
    pub fn title(&self) -> &'static str {
        match self {
            OperationCode::OwnAccountTransfer => "Transfer Between My Accounts",
            OperationCode::OtherAccountTransfer => "Transfer To Another Account",
            OperationCode::BillPayment => "Bill Payment",
            OperationCode::CheckbookOrder => "Checkbook Order",
            OperationCode::PeerToPeer => "Send Money",
            OperationCode::MobileRecharge => "Mobile Top-Up",
        }
    }
}

impl fmt::Display for OperationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationCode::all()
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| AppError::NotFound(format!("unknown operation code {}", s)))
    }
}
