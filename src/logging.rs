//! Logging setup for the revfix binary
//!
//! Console logs go to stderr so fix summaries and diffs on stdout stay clean
//! for piping. Debug runs also append to a timestamped file under the user
//! config directory unless `--log-file` names a destination explicitly.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
pub fn init_logging(debug: bool, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = if debug {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let env_filter = EnvFilter::new(format!("revfix={}", level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(debug)
        .with_file(debug)
        .with_writer(std::io::stderr);

    let log_path = log_file.or_else(|| if debug { default_log_path().ok() } else { None });

    let Some(log_path) = log_path else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file)
        .with_target(true)
        .with_line_number(true)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// Timestamped log path under the user config directory
fn default_log_path() -> Result<PathBuf> {
    let log_dir = dirs::config_dir()
        .context("could not determine config directory")?
        .join("revfix")
        .join("logs");

    let filename = format!("revfix-{}.log", chrono::Local::now().format("%Y%m%d-%H%M%S"));
    Ok(log_dir.join(filename))
}
