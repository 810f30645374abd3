//! # Validation Utilities
//!
//! Input validation helpers shared by every form.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate maximum length.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() > max {
        Err(format!("{} must be at most {} characters", field_name, max))
    } else {
        Ok(())
    }
}

/// Validate that a string contains only ASCII digits.
pub fn validate_digits(value: &str, field_name: &str) -> Result<(), String> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{} must contain only digits", field_name))
    }
}

/// Validate a money amount: digits with an optional fraction of one or two
/// digits, strictly greater than zero.
///
/// ```rust
/// use lib_utils::validate_amount;
///
/// assert!(validate_amount("100.00", "Amount").is_ok());
/// assert!(validate_amount("12.345", "Amount").is_err());
/// assert!(validate_amount("0.00", "Amount").is_err());
/// ```
pub fn validate_amount(value: &str, field_name: &str) -> Result<(), String> {
    let value = value.trim();
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };

    let whole_ok = !whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit());
    let fraction_ok = match fraction {
        Some(f) => (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()),
        None => true,
    };
    if !whole_ok || !fraction_ok {
        return Err(format!(
            "{} must be a number with at most 2 decimal places",
            field_name
        ));
    }

    let positive = value.chars().any(|c| c.is_ascii_digit() && c != '0');
    if !positive {
        return Err(format!("{} must be greater than 0", field_name));
    }

    Ok(())
}
