//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "scholarship_client=info,warn";
pub const LOG_FILE_NAME: &str = "scholarship-client.log";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log level filter (e.g., "scholarship_client=debug,info")
    pub log_level: String,
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// Also write logs to `log_dir`
    pub file_enabled: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            file_enabled: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("SCHOLARSHIP_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_dir,
            file_enabled: std::env::var("SCHOLARSHIP_LOG_FILE_ENABLED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Raise the filter to debug for this crate, keeping other directives.
    pub fn verbose(mut self) -> Self {
        self.log_level = format!("scholarship_client=debug,{}", self.log_level);
        self
    }

    /// Prefix of the rotated log files; each day is written to
    /// `<prefix>.YYYY-MM-DD`.
    pub fn log_file_prefix(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
