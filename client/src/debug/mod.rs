//! # Logging Infrastructure
//!
//! Structured logging for the client library and the `scholarship` CLI.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `scholarship_client=debug,info`)
//! - `SCHOLARSHIP_LOG_DIR`: Log directory (default: `logs`)
//! - `SCHOLARSHIP_LOG_FILE_ENABLED`: Also write a daily rotated log file (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
