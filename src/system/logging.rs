//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration.

use crate::config::LoggingConfig;
use tracing_subscriber;

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If opening the log file fails
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(config: &LoggingConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match config.file {
        Some(ref log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .expect("Failed to open log file");
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.file.is_none());

    if config.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
