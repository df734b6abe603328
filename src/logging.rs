//! File-only logging
//!
//! The TUI owns the terminal, so log records never go to stdout or stderr.
//! They are written to `<temp dir>/codepilot-logs/codepilot.log` through a
//! non-blocking appender. The level comes from `RUST_LOG` and defaults to
//! `info`.

use crate::error::{PlaygroundError, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory that receives the log file
pub fn log_directory() -> PathBuf {
    env::temp_dir().join("codepilot-logs")
}

/// Install the global subscriber.
///
/// Returns the log file path and the guard that flushes the appender; keep the
/// guard alive until the program exits.
pub fn init_file_logging(component_name: &str) -> Result<(PathBuf, WorkerGuard)> {
    let log_dir = log_directory();
    fs::create_dir_all(&log_dir).map_err(|source| PlaygroundError::Io {
        path: log_dir.clone(),
        source,
    })?;

    let file_name = format!("{component_name}.log");
    let (writer, guard) = non_blocking(rolling::never(&log_dir, &file_name));

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| PlaygroundError::Logging(e.to_string()))?;

    tracing::info!(component = component_name, "logging initialized");
    Ok((log_dir.join(file_name), guard))
}
