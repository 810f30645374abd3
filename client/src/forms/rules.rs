//! Declarative field rules and visibility conditions.

use lib_utils::{
    validate_amount, validate_digits, validate_max_length, validate_min_length,
    validate_not_empty,
};
use std::collections::BTreeMap;

/// Raw form input, keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// Validation rule attached to a field.
///
/// Every rule except [`Rule::Required`] passes on a blank value, so optional fields
/// are only checked once the user types something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Decimal amount, positive, at most 2 fractional digits
    Amount,
    MinLength(usize),
    MaxLength(usize),
    /// ASCII digits only (account and phone numbers)
    Digits,
    /// Must not equal the named field (from/to accounts)
    DiffersFrom(&'static str),
    /// Must equal the named field (confirmation inputs)
    Matches(&'static str),
    /// One of a fixed set of codes
    OneOf(&'static [&'static str]),
}

/// The other side of a cross-field rule.
pub struct Counterpart<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

impl Rule {
    /// Check `value`; `counterpart` resolves the field a cross-field rule refers to.
    pub fn check<'a>(
        &self,
        label: &str,
        value: &str,
        counterpart: impl Fn(&str) -> Option<Counterpart<'a>>,
    ) -> Result<(), String> {
        if *self == Rule::Required {
            return validate_not_empty(value, label);
        }
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }

        match *self {
            Rule::Required => Ok(()),
            Rule::Amount => validate_amount(value, label),
            Rule::MinLength(min) => validate_min_length(value, min, label),
            Rule::MaxLength(max) => validate_max_length(value, max, label),
            Rule::Digits => validate_digits(value, label),
            Rule::DiffersFrom(other) => match counterpart(other) {
                Some(other) if other.value.trim() == value => {
                    Err(format!("{} must be different from {}", label, other.label))
                }
                _ => Ok(()),
            },
            Rule::Matches(other) => match counterpart(other) {
                Some(other) if other.value.trim() == value => Ok(()),
                Some(other) => Err(format!("{} does not match {}", label, other.label)),
                None => Err(format!("{} does not match", label)),
            },
            Rule::OneOf(allowed) if allowed.iter().any(|a| *a == value) => Ok(()),
            Rule::OneOf(allowed) => Err(format!("{} must be one of {}", label, allowed.join(", "))),
        }
    }
}

/// When a field is shown. Hidden fields are neither validated nor submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Always,
    WhenEquals(&'static str, &'static str),
    WhenNotEquals(&'static str, &'static str),
}

impl Visibility {
    pub fn is_visible(&self, values: &FormValues) -> bool {
        let current = |field: &str| values.get(field).map(|v| v.trim()).unwrap_or("");
        match *self {
            Visibility::Always => true,
            Visibility::WhenEquals(field, expected) => current(field) == expected,
            Visibility::WhenNotEquals(field, expected) => current(field) != expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none<'a>(_: &str) -> Option<Counterpart<'a>> {
        None
    }

    #[test]
    fn test_required_and_optional_blank() {
        assert_eq!(
            Rule::Required.check("Amount", "  ", none),
            Err("Amount is required".to_string())
        );
        assert!(Rule::Amount.check("Amount", "", none).is_ok());
        assert!(Rule::Digits.check("Phone", " ", none).is_ok());
    }

    #[test]
    fn test_amount_rule() {
        assert!(Rule::Amount.check("Amount", "100.00", none).is_ok());
        assert!(Rule::Amount.check("Amount", "100.001", none).is_err());
        assert!(Rule::Amount.check("Amount", "-5", none).is_err());
        assert!(Rule::Amount.check("Amount", "0", none).is_err());
        assert!(Rule::Amount.check("Amount", "abc", none).is_err());
    }

    #[test]
    fn test_cross_field_rules() {
        let from = |_: &str| {
            Some(Counterpart {
                label: "From account",
                value: "1001",
            })
        };
        assert_eq!(
            Rule::DiffersFrom("fromAccount").check("To account", "1001", from),
            Err("To account must be different from From account".to_string())
        );
        assert!(Rule::DiffersFrom("fromAccount").check("To account", "1002", from).is_ok());
        assert!(Rule::Matches("fromAccount").check("Confirm", "1001", from).is_ok());
        assert!(Rule::Matches("fromAccount").check("Confirm", "1002", from).is_err());
    }

    #[test]
    fn test_one_of() {
        let rule = Rule::OneOf(&["ONCE", "WEEKLY"]);
        assert!(rule.check("Frequency", "WEEKLY", none).is_ok());
        assert_eq!(
            rule.check("Frequency", "DAILY", none),
            Err("Frequency must be one of ONCE, WEEKLY".to_string())
        );
    }

    #[test]
    fn test_visibility() {
        let mut values = FormValues::new();
        let until = Visibility::WhenNotEquals("frequency", "ONCE");
        assert!(until.is_visible(&values));

        values.insert("frequency".to_string(), "ONCE".to_string());
        assert!(!until.is_visible(&values));
        assert!(Visibility::WhenEquals("frequency", "ONCE").is_visible(&values));

        values.insert("frequency".to_string(), "WEEKLY".to_string());
        assert!(until.is_visible(&values));
    }
}
