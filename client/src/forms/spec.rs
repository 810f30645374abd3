//! # Form Specifications
//!
//! A [`FormSpec`] declares a form once: its fields (rules, visibility, payload key),
//! the fixed and derived fields every draft carries, and optional currency
//! composition. Validation and draft construction are pure functions of the spec
//! and the current [`FormValues`].

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::rules::{Counterpart, FormValues, Rule, Visibility};
use crate::model::{DraftTransaction, OperationCode};

/// One input of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Draft key the value is stored under; defaults to `name`
    pub payload_key: &'static str,
    pub rules: Vec<Rule>,
    pub default: Option<&'static str>,
    pub visible_when: Visibility,
    /// Validated but never placed into the draft (e.g. "confirm phone number")
    pub transient: bool,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            payload_key: name,
            rules: Vec::new(),
            default: None,
            visible_when: Visibility::Always,
            transient: false,
        }
    }

    pub fn payload_key(mut self, key: &'static str) -> Self {
        self.payload_key = key;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub fn visible_when(mut self, visibility: Visibility) -> Self {
        self.visible_when = visibility;
        self
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }
}

/// Computes a draft field from the raw values; `None` leaves it out.
pub type DeriveFn = fn(&FormValues) -> Option<Value>;

#[derive(Debug, Clone)]
pub struct DerivedField {
    pub key: &'static str,
    pub derive: DeriveFn,
}

/// Adds `"<currency> <amount>"` to the draft under `target_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyComposition {
    pub amount_field: &'static str,
    pub currency_field: &'static str,
    pub target_key: &'static str,
    /// Used when the currency field is blank or absent
    pub default_currency: String,
}

impl CurrencyComposition {
    fn compose(&self, values: &FormValues) -> Option<String> {
        let amount = values.get(self.amount_field).map(|v| v.trim())?;
        if amount.is_empty() {
            return None;
        }
        let currency = values
            .get(self.currency_field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(self.default_currency.as_str());
        Some(format!("{} {}", currency, amount))
    }
}

/// Per-field validation messages, first failing rule per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Record `message` unless the field already has an error.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|field, _| keep(field));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Declarative description of one money-movement form.
#[derive(Debug, Clone)]
pub struct FormSpec {
    pub code: OperationCode,
    pub fields: Vec<FieldSpec>,
    pub fixed: Vec<(&'static str, Value)>,
    pub derived: Vec<DerivedField>,
    pub currency: Option<CurrencyComposition>,
}

impl FormSpec {
    pub fn new(code: OperationCode) -> Self {
        Self {
            code,
            fields: Vec::new(),
            fixed: Vec::new(),
            derived: Vec::new(),
            currency: None,
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fixed(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.fixed.push((key, value.into()));
        self
    }

    pub fn derived(mut self, key: &'static str, derive: DeriveFn) -> Self {
        self.derived.push(DerivedField { key, derive });
        self
    }

    pub fn compose_currency(mut self, composition: CurrencyComposition) -> Self {
        self.currency = Some(composition);
        self
    }

    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Values a fresh form starts with.
    pub fn defaults(&self) -> FormValues {
        self.fields
            .iter()
            .filter_map(|f| f.default.map(|d| (f.name.to_string(), d.to_string())))
            .collect()
    }

    /// Run every rule of every visible field.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in visible_fields(self, values) {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            let counterpart = |name: &str| {
                self.field_spec(name).map(|other| Counterpart {
                    label: other.label,
                    value: values.get(name).map(String::as_str).unwrap_or(""),
                })
            };
            for rule in &field.rules {
                if let Err(message) = rule.check(field.label, value, counterpart) {
                    errors.insert(field.name, message);
                    break;
                }
            }
        }
        errors
    }

    /// Map valid values to a draft: visible non-transient fields under their payload
    /// keys (blank ones left out), then fixed, derived and composed fields.
    pub fn build_draft(&self, values: &FormValues) -> DraftTransaction {
        let mut draft = DraftTransaction::new(self.code);

        for field in visible_fields(self, values) {
            if field.transient {
                continue;
            }
            if let Some(value) = values.get(field.name).map(|v| v.trim()) {
                if !value.is_empty() {
                    draft.set(field.payload_key, value);
                }
            }
        }
        for (key, value) in &self.fixed {
            draft.set(*key, value.clone());
        }
        for derived in &self.derived {
            if let Some(value) = (derived.derive)(values) {
                draft.set(derived.key, value);
            }
        }
        if let Some(composition) = &self.currency {
            if let Some(composed) = composition.compose(values) {
                draft.set(composition.target_key, composed);
            }
        }

        draft
    }

    /// Inverse of [`Self::build_draft`] for the user-editable fields.
    pub fn values_from_draft(&self, draft: &DraftTransaction) -> FormValues {
        let mut values = self.defaults();
        for field in self.fields.iter().filter(|f| !f.transient) {
            if let Some(value) = draft.text(field.payload_key) {
                values.insert(field.name.to_string(), value);
            }
        }
        values
    }
}

/// Fields visible for the current values, in declaration order.
pub fn visible_fields<'a>(spec: &'a FormSpec, values: &FormValues) -> Vec<&'a FieldSpec> {
    spec.fields
        .iter()
        .filter(|field| field.visible_when.is_visible(values))
        .collect()
}
