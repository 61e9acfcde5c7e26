//! File logging setup.
//!
//! The TUI owns stdout/stderr while it runs, so tracing output goes to
//! `${FLIPFORM_HOME}/logs/flipform.log` through a non-blocking writer.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "FLIPFORM_LOG";

const LOG_FILE_NAME: &str = "flipform.log";

/// Keeps the background log writer alive. Flushes on drop.
#[must_use = "dropping the guard stops the log writer"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Installs the global tracing subscriber writing to the default log directory.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init(config: &Config) -> Result<LogGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global tracing subscriber writing into `dir`.
///
/// # Errors
/// See [`init`].
pub fn init_in(dir: &Path, config: &Config) -> Result<LogGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let directive = filter_directive(std::env::var(LOG_ENV_VAR).ok(), &config.log_level);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to install log subscriber")?;

    tracing::debug!(dir = %dir.display(), %directive, "logging initialized");
    Ok(LogGuard { _worker: worker })
}

/// Picks the filter directive: a non-empty env value wins over the config.
fn filter_directive(env_value: Option<String>, fallback: &str) -> String {
    env_value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
