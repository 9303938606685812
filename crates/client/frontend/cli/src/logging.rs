//! File logging for the terminal client.
//!
//! The TUI owns stdout and stderr while it runs, so every log line goes to
//! `client.log` in a per-session directory under the platform cache dir.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "client.log";

/// Keeps the background log writer alive.
///
/// Buffered lines are flushed when this is dropped, so hold it until the
/// client shuts down.
#[must_use = "dropping the session stops file logging"]
pub struct LogSession {
    pub dir: PathBuf,
    _guard: WorkerGuard,
}

/// Installs the global subscriber and returns the session's log handle.
///
/// `RUST_LOG` refines the filter; the default level is `info`.
pub fn setup_logging(session_id: Option<&str>) -> Result<LogSession> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = prepare_session_dir(&log_directory(), &session_id)?;

    let (non_blocking_file, guard) = file_writer(&session_log_dir);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing the tracing subscriber")?;

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}", session_log_dir.join(LOG_FILE_NAME).display());

    Ok(LogSession {
        dir: session_log_dir,
        _guard: guard,
    })
}

fn file_writer(dir: &Path) -> (NonBlocking, WorkerGuard) {
    tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
}

/// Platform cache directory for logs, falling back to the temp dir.
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "calendar")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("calendar").join("logs"))
}

fn prepare_session_dir(base: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = base.join(session_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    Ok(dir)
}
