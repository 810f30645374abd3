//! # Shared Utility Functions
//!
//! Display helpers used wherever account numbers or amounts are shown to the user.
//!
//! ## Account Masking
//!
//! - [`mask_account_number`] - Replace all but the last N characters with `*`
//! - [`mask_account`] - [`mask_account_number`] with the default of 4 visible characters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_money, mask_account};
//!
//! assert_eq!(mask_account("0012345678"), "******5678");
//! assert_eq!(format_money(5.0), "5.00");
//! ```

/// Mask an account number, keeping only the last `visible` characters readable.
///
/// Values no longer than `visible` are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_account_number;
///
/// assert_eq!(mask_account_number("0012345678", 4), "******5678");
/// assert_eq!(mask_account_number("0012345678", 2), "********78");
/// assert_eq!(mask_account_number("1001", 4), "1001");
/// ```
pub fn mask_account_number(account: &str, visible: usize) -> String {
    let len = account.chars().count();
    if len <= visible {
        return account.to_string();
    }

    account
        .chars()
        .enumerate()
        .map(|(i, c)| if i < len - visible { '*' } else { c })
        .collect()
}

/// Mask an account number with the default 4 visible characters.
pub fn mask_account(account: &str) -> String {
    mask_account_number(account, 4)
}

/// Render an amount with exactly two decimals.
///
/// ```rust
/// use shared::utils::format_money;
///
/// assert_eq!(format_money(1.5), "1.50");
/// assert_eq!(format_money(0.126), "0.13");
/// ```
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_account_number() {
        assert_eq!(mask_account_number("0012345678", 4), "******5678");
        assert_eq!(mask_account_number("123", 4), "123");
        assert_eq!(mask_account_number("", 4), "");
        assert_eq!(mask_account_number("12345", 0), "*****");
    }

    #[test]
    fn test_mask_account() {
        assert_eq!(mask_account("9876543210"), "******3210");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(5.0), "5.00");
        assert_eq!(format_money(1234.5), "1234.50");
    }
}
