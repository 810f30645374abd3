//! Logging configuration from environment variables

use lib_utils::envs::get_env_or;
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file name prefix inside `log_dir`
    pub file_name: String,
    /// Log level filter (e.g., "banking_client=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: "banking-client.log".to_string(),
            log_level: "banking_client=info,warn".to_string(),
            stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: PathBuf::from(get_env_or("BANKING_LOG_DIR", "logs")),
            file_name: defaults.file_name,
            log_level: get_env_or("RUST_LOG", &defaults.log_level),
            stderr: get_env_or("BANKING_LOG_STDERR", "0").trim() == "1",
        }
    }

    /// Full path of the current log file (before the rotation suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.log_file(), PathBuf::from("logs/banking-client.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_from_env_overrides() {
        std::env::set_var("BANKING_LOG_DIR", "/tmp/banking-logs");
        std::env::set_var("BANKING_LOG_STDERR", " 1 ");
        let config = LogConfig::from_env();
        std::env::remove_var("BANKING_LOG_DIR");
        std::env::remove_var("BANKING_LOG_STDERR");

        assert_eq!(
            config.log_file(),
            PathBuf::from("/tmp/banking-logs/banking-client.log")
        );
        assert!(config.stderr);
    }
}
