//! # Client Configuration
//!
//! Loaded from environment variables and validated once, before any pipeline is built.
//!
//! | variable | default |
//! |---|---|
//! | `BANKING_API_URL` | `http://127.0.0.1:3001` |
//! | `BANKING_HTTP_TIMEOUT_SECS` | `10` |
//! | `BANKING_FEE_TIMEOUT_MS` | `8000` |
//! | `BANKING_SUBMIT_TIMEOUT_MS` | `20000` |
//! | `BANKING_DEFAULT_CURRENCY` | `USD` |

use lib_utils::envs::{get_env_or, get_env_parse_or};
use std::time::Duration;

use crate::core::{AppError, Result};

const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";
const MAX_PIPELINE_TIMEOUT_MS: u64 = 120_000;

/// Banking client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub api_base_url: String,
    /// Transport-level timeout of the HTTP client
    pub http_timeout: Duration,
    /// Deadline for a fee quote before the review screen degrades to "no fees"
    pub fee_timeout: Duration,
    /// Deadline for a submission before it is reported as failed
    pub submit_timeout: Duration,
    /// Currency sent with fee requests when the draft has none
    pub default_currency: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(10),
            fee_timeout: Duration::from_millis(8_000),
            submit_timeout: Duration::from_millis(20_000),
            default_currency: "USD".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let api_base_url = get_env_or("BANKING_API_URL", DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let http_timeout_secs: u64 = get_env_parse_or("BANKING_HTTP_TIMEOUT_SECS", 10)?;
        let fee_timeout_ms: u64 = get_env_parse_or("BANKING_FEE_TIMEOUT_MS", 8_000)?;
        let submit_timeout_ms: u64 = get_env_parse_or("BANKING_SUBMIT_TIMEOUT_MS", 20_000)?;
        let default_currency = get_env_or("BANKING_DEFAULT_CURRENCY", "USD").to_uppercase();

        let config = Self {
            api_base_url,
            http_timeout: Duration::from_secs(http_timeout_secs),
            fee_timeout: Duration::from_millis(fee_timeout_ms),
            submit_timeout: Duration::from_millis(submit_timeout_ms),
            default_currency,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(AppError::Config(format!(
                "BANKING_API_URL must start with http:// or https://, got {}",
                self.api_base_url
            )));
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::Config(
                "BANKING_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        for (name, timeout) in [
            ("BANKING_FEE_TIMEOUT_MS", self.fee_timeout),
            ("BANKING_SUBMIT_TIMEOUT_MS", self.submit_timeout),
        ] {
            let ms = timeout.as_millis();
            if ms == 0 || ms > u128::from(MAX_PIPELINE_TIMEOUT_MS) {
                return Err(AppError::Config(format!(
                    "{} must be between 1 and {}",
                    name, MAX_PIPELINE_TIMEOUT_MS
                )));
            }
        }

        if self.default_currency.len() != 3
            || !self.default_currency.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(AppError::Config(format!(
                "BANKING_DEFAULT_CURRENCY must be a 3-letter code, got {}",
                self.default_currency
            )));
        }

        Ok(())
    }
}
