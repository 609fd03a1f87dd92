//! Shared logging utilities for lexbatch binaries.
//!
//! Stdout is reserved for the line-oriented run report, so console logging
//! goes to stderr and everything at the filter level also lands in a
//! daily-rolling file under `~/.lexbatch/logs`.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "lexbatch=info,lexbatch_corpus=info,lexbatch_lex=info";
const QUIET_CONSOLE_FILTER: &str = "warn";

/// Logging configuration shared by lexbatch binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
}

/// Keeps the background file writer alive; drop it last.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
    pub log_dir: Option<PathBuf>,
}

/// Initialize tracing with a rolling file writer and stderr output.
///
/// A log directory that cannot be created degrades to console-only logging.
pub fn init_logging(config: LogConfig<'_>) -> LogGuard {
    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let console_filter = if config.verbose {
        file_filter.clone()
    } else {
        EnvFilter::new(QUIET_CONSOLE_FILTER)
    };

    let (file_layer, guard, log_dir) = match ensure_logs_dir() {
        Ok(dir) => {
            let file_name = format!("{}.log", sanitize_name(config.app_name));
            let appender = tracing_appender::rolling::daily(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file_filter);
            (Some(layer), Some(guard), Some(dir))
        }
        Err(err) => {
            eprintln!("Warning: file logging disabled: {:#}", err);
            (None, None, None)
        }
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .init();

    LogGuard {
        _file: guard,
        log_dir,
    }
}

/// Get the lexbatch home directory: ~/.lexbatch (or `LEXBATCH_HOME`).
pub fn lexbatch_home() -> Option<PathBuf> {
    if let Ok(override_path) = std::env::var("LEXBATCH_HOME") {
        return Some(PathBuf::from(override_path));
    }
    dirs::home_dir().map(|home| home.join(".lexbatch"))
}

/// Get the logs directory: ~/.lexbatch/logs
pub fn logs_dir() -> Option<PathBuf> {
    lexbatch_home().map(|home| home.join("logs"))
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("Could not determine home directory")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs)
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect()
}
