//! Tracing subscriber setup.
//!
//! The release binary has no console, so logs go to a file through a
//! non-blocking writer; the hook thread never waits on disk I/O.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::model::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, LOG_FILE_NAME};

/// Guard that ensures the log file is flushed when dropped.
pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Filter from `HOTCORNERS_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
///
/// With `log_dir`, logs are appended to `hotcorners.log` in that directory;
/// otherwise (or if the file cannot be opened) they go to stderr. Never
/// fails: a second call or an unusable directory just leaves logging as is.
pub fn init(log_dir: Option<&Path>) -> LogGuard {
    let file = log_dir.and_then(|dir| {
        fs::create_dir_all(dir).ok()?;
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE_NAME))
            .ok()
    });

    match file {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .with_thread_names(true)
                .try_init();
            LogGuard {
                _guard: Some(guard),
            }
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
            LogGuard { _guard: None }
        }
    }
}
