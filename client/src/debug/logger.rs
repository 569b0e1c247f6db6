//! Logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};

/// Initialize the logging system
///
/// Console output always goes to stderr so command output on stdout stays
/// machine readable. With `file_enabled`, logs are also written to
/// `<log_dir>/scholarship-client.log.YYYY-MM-DD`, one file per day.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the lifetime of the program.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = if config.file_enabled {
        match fs::create_dir_all(&config.log_dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory: {}", e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if initialized.is_err() {
        // A subscriber is already installed (embedding application or tests)
        return None;
    }

    tracing::debug!(
        log_level = %config.log_level,
        log_file_prefix = guard.as_ref().map(|_| config.log_file_prefix().display().to_string()),
        "Logging initialized"
    );

    guard
}
