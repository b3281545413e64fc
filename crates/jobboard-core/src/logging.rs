//! Tracing setup for the job-board client.
//!
//! Events go to `jobboard.log` in the XDG state dir. The CLI falls back to
//! stderr when that file cannot be opened. `RUST_LOG` overrides the filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,jobboard_core=debug,jobboard=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/jobboard/jobboard.log` (or under `$XDG_STATE_HOME`).
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("jobboard")?;
    Ok(dirs.get_state_home().join("jobboard").join("jobboard.log"))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Plain-text subscriber appending to `path`. Session tokens never reach
/// events; `SessionToken` redacts itself in `Debug`.
fn file_subscriber(path: &Path, filter: EnvFilter) -> Result<impl Subscriber + Send + Sync> {
    let file = open_log(path)?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish())
}

/// Install file logging at the default path. An error here means the caller
/// should use [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    init_logging_at(&path)
}

/// Install file logging at `path`.
pub fn init_logging_at(path: &Path) -> Result<()> {
    let subscriber = file_subscriber(path, env_filter())?;
    tracing::subscriber::set_global_default(subscriber).context("install tracing subscriber")?;
    tracing::info!(log = %path.display(), "jobboard logging started");
    Ok(())
}

/// Stderr-only logging. A subscriber that is already installed is left alone.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
