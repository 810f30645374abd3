//! # Form State
//!
//! Reducer-style state for one form instance. All changes go through
//! [`FormState::dispatch`]; visibility is recomputed from the values on every read
//! and errors of fields that become hidden are dropped after each action.

use std::sync::Arc;
use tracing::debug;

use super::rules::FormValues;
use super::spec::{visible_fields, FieldErrors, FieldSpec, FormSpec};
use crate::model::DraftTransaction;

/// Changes a form can undergo.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetField { name: String, value: String },
    ClearField(String),
    /// Back to the field defaults
    Reset,
    /// Re-populate from a draft returned by a cancelled preview
    Restore(DraftTransaction),
}

#[derive(Debug, Clone)]
pub struct FormState {
    spec: Arc<FormSpec>,
    values: FormValues,
    errors: FieldErrors,
}

impl FormState {
    pub fn new(spec: Arc<FormSpec>) -> Self {
        let values = spec.defaults();
        Self {
            spec,
            values,
            errors: FieldErrors::new(),
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn dispatch(&mut self, action: FormAction) {
        match action {
            FormAction::SetField { name, value } => {
                if self.spec.field_spec(&name).is_none() {
                    debug!(form = %self.spec.code, field = %name, "Ignoring value for unknown field");
                    return;
                }
                self.errors.remove(&name);
                self.values.insert(name, value);
            }
            FormAction::ClearField(name) => {
                self.values.remove(&name);
                self.errors.remove(&name);
            }
            FormAction::Reset => {
                self.values = self.spec.defaults();
                self.errors = FieldErrors::new();
            }
            FormAction::Restore(draft) => {
                self.values = self.spec.values_from_draft(&draft);
                self.errors = FieldErrors::new();
            }
        }

        let visible: Vec<&str> = visible_fields(&self.spec, &self.values)
            .into_iter()
            .map(|f| f.name)
            .collect();
        self.errors.retain(|field| visible.contains(&field));
    }

    /// Shorthand for [`FormAction::SetField`].
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.dispatch(FormAction::SetField {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.spec
            .field_spec(name)
            .is_some_and(|f| f.visible_when.is_visible(&self.values))
    }

    pub fn visible_fields(&self) -> Vec<&FieldSpec> {
        visible_fields(&self.spec, &self.values)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate visible fields and keep the messages for display.
    pub fn validate(&mut self) -> bool {
        self.errors = self.spec.validate(&self.values);
        self.errors.is_empty()
    }

    /// Validate and, when clean, hand the draft to `on_draft`.
    ///
    /// Nothing is built or sent while any visible field is invalid.
    pub fn submit<F>(&mut self, on_draft: F) -> Result<(), FieldErrors>
    where
        F: FnOnce(DraftTransaction),
    {
        if !self.validate() {
            debug!(form = %self.spec.code, errors = self.errors.len(), "Form submit rejected");
            return Err(self.errors.clone());
        }
        on_draft(self.spec.build_draft(&self.values));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::rules::{Rule, Visibility};
    use crate::model::OperationCode;

    fn spec() -> Arc<FormSpec> {
        Arc::new(
            FormSpec::new(OperationCode::OwnAccountTransfer)
                .field(FieldSpec::new("fromAccount", "From account").required())
                .field(
                    FieldSpec::new("toAccount", "To account")
                        .required()
                        .rule(Rule::DiffersFrom("fromAccount")),
                )
                .field(FieldSpec::new("amount", "Amount").required().rule(Rule::Amount))
                .field(FieldSpec::new("frequency", "Frequency").default_value("ONCE"))
                .field(
                    FieldSpec::new("untilDate", "Until")
                        .required()
                        .visible_when(Visibility::WhenNotEquals("frequency", "ONCE")),
                ),
        )
    }

    #[test]
    fn test_invalid_amount_never_reaches_callback() {
        let mut form = FormState::new(spec());
        form.set("fromAccount", "1001");
        form.set("toAccount", "1002");
        form.set("amount", "10.999");

        let mut called = false;
        let result = form.submit(|_| called = true);
        assert!(!called);
        let errors = result.unwrap_err();
        assert!(errors.get("amount").is_some());
        assert_eq!(form.errors(), &errors);
    }

    #[test]
    fn test_valid_submit_builds_draft() {
        let mut form = FormState::new(spec());
        form.set("fromAccount", "1001");
        form.set("toAccount", "1002");
        form.set("amount", "25.50");

        let mut draft = None;
        form.submit(|d| draft = Some(d)).unwrap();
        let draft = draft.unwrap();
        assert_eq!(draft.text("amount").as_deref(), Some("25.50"));
        assert_eq!(draft.text("frequency").as_deref(), Some("ONCE"));
        assert_eq!(draft.code(), Some(OperationCode::OwnAccountTransfer));
    }

    #[test]
    fn test_visibility_follows_dispatch_and_prunes_errors() {
        let mut form = FormState::new(spec());
        assert!(!form.is_visible("untilDate"));

        form.set("frequency", "MONTHLY");
        assert!(form.is_visible("untilDate"));
        assert!(!form.validate());
        assert!(form.errors().get("untilDate").is_some());

        form.set("frequency", "ONCE");
        assert!(form.errors().get("untilDate").is_none());
        assert_eq!(form.visible_fields().len(), 4);
    }

    #[test]
    fn test_set_clears_field_error_and_ignores_unknown() {
        let mut form = FormState::new(spec());
        form.validate();
        assert!(form.errors().get("amount").is_some());

        form.set("amount", "5");
        assert!(form.errors().get("amount").is_none());

        form.set("nonexistent", "x");
        assert!(form.value("nonexistent").is_none());
    }

    #[test]
    fn test_restore_and_reset() {
        let mut form = FormState::new(spec());
        let draft = DraftTransaction::new(OperationCode::OwnAccountTransfer)
            .with("fromAccount", "1001")
            .with("toAccount", "1002")
            .with("amount", "100")
            .with("frequency", "WEEKLY")
            .with("untilDate", "2030-06-30");

        form.dispatch(FormAction::Restore(draft));
        assert_eq!(form.value("amount"), Some("100"));
        assert_eq!(form.value("untilDate"), Some("2030-06-30"));
        assert!(form.is_visible("untilDate"));

        form.dispatch(FormAction::ClearField("amount".to_string()));
        assert_eq!(form.value("amount"), None);

        form.dispatch(FormAction::Reset);
        assert_eq!(form.value("frequency"), Some("ONCE"));
        assert_eq!(form.value("fromAccount"), None);
    }
}
