//! Error types.
//!
//! Only startup can fail. Once the hook is installed, every per-event path
//! absorbs its own failures and at most logs them.

use std::path::PathBuf;

use thiserror::Error;

use crate::events::PointerEvent;

/// Problems found while building the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Only button and wheel events can carry an action.
    #[error("event '{0:?}' cannot be bound to an action")]
    UnbindableEvent(PointerEvent),

    /// A launch action with nothing to launch.
    #[error("launch action has an empty target")]
    EmptyTarget,

    /// The JSON could not be parsed into a configuration.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can stop the application from starting.
#[derive(Error, Debug)]
pub enum HotCornersError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Config file could not be read or written.
    #[error("I/O error on '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other I/O error (e.g. a worker thread could not be spawned).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Windows API error, e.g. the low-level mouse hook was refused.
    #[error("Windows API error: {0}")]
    #[cfg(target_os = "windows")]
    WindowsApi(#[from] windows::core::Error),

    /// The application only runs on Windows.
    #[error("hot corners are not supported on this platform")]
    Unsupported,
}

/// Result type for fallible startup operations.
pub type Result<T> = std::result::Result<T, HotCornersError>;
