use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless the environment variable named by
/// `config.file_env` holds a file path, since stdout carries completion
/// candidates for the shell. Lines are appended, so every completion request
/// of a session lands in the same file.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// Returns whether this call installed one.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let Some(log_path) = std::env::var(&config.file_env).ok() else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to open log file {}: {}", log_path, err);
            return false;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
    match installed {
        Ok(()) => {
            tracing::debug!(path = %log_path, "File logging enabled");
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "Subscriber already installed, keeping it");
            false
        }
    }
}
