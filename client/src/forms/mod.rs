//! # Forms
//!
//! Client-side input handling that turns user input into a [`DraftTransaction`].
//! No network access happens here; every failure is a recoverable field error.
//!
//! - **[`rules`]**: Validation rules and visibility conditions
//! - **[`spec`]**: Declarative form specifications and draft construction
//! - **[`state`]**: Reducer-style form state
//!
//! [`DraftTransaction`]: crate::model::DraftTransaction

pub mod rules;
pub mod spec;
pub mod state;

pub use rules::{FormValues, Rule, Visibility};
pub use spec::{
    visible_fields, CurrencyComposition, DeriveFn, FieldErrors, FieldSpec, FormSpec,
};
pub use state::{FormAction, FormState};
