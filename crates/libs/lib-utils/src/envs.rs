//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, falling back to `default` when unset.
///
/// A variable that is set but unparsable is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_falls_back() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_VAR", "fallback"), "fallback");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_UNSET_VAR", 42u64), Ok(42));
        assert_eq!(
            get_env("LIB_UTILS_TEST_UNSET_VAR"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_UNSET_VAR"))
        );
    }

    #[test]
    fn test_wrong_format_is_reported() {
        env::set_var("LIB_UTILS_TEST_BAD_NUMBER", "ten");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_BAD_NUMBER", 1u64),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_NUMBER"))
        );
        env::remove_var("LIB_UTILS_TEST_BAD_NUMBER");
    }
}
