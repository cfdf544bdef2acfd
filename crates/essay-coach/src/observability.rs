//! Logging and tracing initialization.
//!
//! Console diagnostics go to stderr so they never mix with command output.
//! When a log destination is configured (flag, env, or config file), spans
//! and events are additionally written as JSONL through a non-blocking
//! appender whose guard must be held for the process lifetime.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name used when only a directory is configured.
const LOG_FILE_NAME: &str = "essay-coach.jsonl";

/// Resolved log destination settings.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`ESSAY_COACH_LOG_PATH`).
    pub log_path: Option<PathBuf>,
    /// Log directory (`ESSAY_COACH_LOG_DIR`, or config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as the lowest-precedence fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("ESSAY_COACH_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("ESSAY_COACH_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// The log file to write, if any destination is configured.
    fn resolve_log_file(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.log_path {
            return Some(path.clone());
        }
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins outright; otherwise `--quiet` forces errors-only and
/// each `-v` steps the level up from the config default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber.
///
/// Returns the appender guard when file logging is active; dropping it
/// flushes and stops the background writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(log_file) = config.resolve_log_file() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
        return Ok(None);
    };

    if let Some(parent) = log_file.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(writer))
        .init();

    Ok(Some(guard))
}
