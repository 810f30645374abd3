//! # Flow Configuration
//!
//! Everything that differs between money-movement screens is declared here instead of
//! being re-coded per screen: the submission key-map, whether fees are quoted at all,
//! whether confirm needs a quote, and the client-side deadlines.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::core::service::Payload;
use crate::core::{AppError, Result};
use crate::model::OperationCode;

/// Whether a flow may be confirmed without a fee quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeePolicy {
    /// Confirm is allowed without fees; fee keys are then left out of the payload.
    #[default]
    Optional,
    /// Confirm is rejected until a fee quote is attached to the session.
    Required,
}

/// Declarative rename of draft keys to the submission endpoint's keys.
///
/// ```rust
/// use banking_client::pipeline::KeyMap;
/// use serde_json::json;
///
/// let map = KeyMap::from([("fromAccount", "accId"), ("amount", "amt")]);
/// let payload = map.apply(
///     [("fromAccount".to_string(), json!("1001")), ("amount".to_string(), json!("9.99"))]
///         .into_iter()
///         .collect(),
/// );
/// assert_eq!(payload["accId"], "1001");
/// assert_eq!(payload["amt"], "9.99");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMap {
    renames: BTreeMap<String, String>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.renames.insert(from.into(), to.into());
        self
    }

    pub fn target(&self, key: &str) -> Option<&str> {
        self.renames.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Rename the keys of `payload`. A renamed key overwrites an existing key of the
    /// same name; keys without a mapping pass through.
    pub fn apply(&self, payload: Payload) -> Payload {
        let (renamed, kept): (Vec<_>, Vec<_>) = payload
            .into_iter()
            .partition(|(key, _)| self.renames.contains_key(key));

        let mut out: Payload = kept.into_iter().collect();
        for (key, value) in renamed {
            if let Some(target) = self.renames.get(&key) {
                out.insert(target.clone(), value);
            }
        }
        out
    }
}

impl<const N: usize> From<[(&str, &str); N]> for KeyMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(KeyMap::new(), |map, (from, to)| map.rename(from, to))
    }
}

/// Per-flow parameters of the transaction pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub code: OperationCode,
    pub key_map: KeyMap,
    /// Go straight to review without quoting fees (no variable fee, e.g. checkbook orders)
    pub skip_fee_calculation: bool,
    pub fee_policy: FeePolicy,
    pub fee_timeout: Duration,
    pub submit_timeout: Duration,
    /// Currency for fee requests when the draft has no `currencyCode`
    pub default_currency: String,
}

impl FlowConfig {
    /// Flow with default timeouts, no renames, fees quoted and optional.
    pub fn new(code: OperationCode) -> Self {
        Self::from_client_config(code, &ClientConfig::default())
    }

    /// Flow taking its deadlines and default currency from `config`.
    pub fn from_client_config(code: OperationCode, config: &ClientConfig) -> Self {
        Self {
            code,
            key_map: KeyMap::new(),
            skip_fee_calculation: false,
            fee_policy: FeePolicy::Optional,
            fee_timeout: config.fee_timeout,
            submit_timeout: config.submit_timeout,
            default_currency: config.default_currency.clone(),
        }
    }

    pub fn with_key_map(mut self, key_map: impl Into<KeyMap>) -> Self {
        self.key_map = key_map.into();
        self
    }

    pub fn skip_fee_calculation(mut self) -> Self {
        self.skip_fee_calculation = true;
        self
    }

    pub fn with_fee_policy(mut self, policy: FeePolicy) -> Self {
        self.fee_policy = policy;
        self
    }

    pub fn with_timeouts(mut self, fee_timeout: Duration, submit_timeout: Duration) -> Self {
        self.fee_timeout = fee_timeout;
        self.submit_timeout = submit_timeout;
        self
    }

    /// Reject contradictory settings before a pipeline is built.
    pub fn validate(&self) -> Result<()> {
        if self.skip_fee_calculation && self.fee_policy == FeePolicy::Required {
            return Err(AppError::Config(format!(
                "{}: a flow that skips fee calculation cannot require fees",
                self.code
            )));
        }
        if self.fee_timeout.is_zero() || self.submit_timeout.is_zero() {
            return Err(AppError::Config(format!(
                "{}: pipeline timeouts must be greater than zero",
                self.code
            )));
        }
        Ok(())
    }
}
