//! Configuration constants and default values.
//!
//! This module contains all application constants including zone geometry
//! defaults, dwell timing, storage locations and validation limits.

// === Zone Geometry ===

/// Default hot-zone size in pixels (corner width/height).
pub const DEFAULT_CORNER_SIZE: i32 = 20;

/// How far the top-left zone reaches outside the screen, in pixels.
///
/// Pointer coordinates are not clamped while the mouse keeps pushing
/// against the screen edge, so a fast approach can report positions
/// beyond the visible area.
pub const OUTSIDE_MARGIN: i32 = 100;

/// Slack, in pixels, added past the screen edge for the edge-hugging zones.
pub const EDGE_SLACK: i32 = 1;

// === Dwell ===

/// Default time the pointer must linger in the top-left corner, in ms.
pub const DEFAULT_DWELL_TIME_MS: u64 = 300;

// === Validation Limits ===

/// Minimum corner size in pixels.
pub const MIN_CORNER_SIZE: i32 = 1;

/// Maximum corner size in pixels.
pub const MAX_CORNER_SIZE: i32 = 500;

/// Minimum dwell time in ms.
pub const MIN_DWELL_TIME_MS: u64 = 50;

/// Maximum dwell time in ms.
pub const MAX_DWELL_TIME_MS: u64 = 10_000;

// === Storage ===

/// Directory (under `%APPDATA%`) holding the config and log files.
pub const APP_DIR_NAME: &str = "HotCorners";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "hotcorners.log";

/// Environment variable read for the log filter directive.
pub const LOG_ENV_VAR: &str = "HOTCORNERS_LOG";

/// Log filter used when `HOTCORNERS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";
