//! Tracing setup for the CLI.
//!
//! Logs always go to stderr so stdout stays clean for command output. A file
//! layer is added when file logging is enabled.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

const LOG_FILE: &str = "repugnant.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if !config.file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    }

    let log_dir = match &config.log_dir {
        Some(dir) => dir.clone(),
        None => log_dir(),
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::debug!("Log file: {}/{}", log_dir.display(), LOG_FILE);
    Ok(Some(guard))
}

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/repugnant/logs`
/// - Linux: `~/.cache/repugnant/logs` (or `$XDG_CACHE_HOME/repugnant/logs`)
/// - Windows: `%LOCALAPPDATA%\repugnant\logs`
/// - Fallback: `/tmp/repugnant/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "repugnant")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/repugnant"));

    base_dir.join("logs")
}
