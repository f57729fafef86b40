//! Configuration storage for Windows.
//!
//! Persists settings to a JSON file in %APPDATA%/HotCorners/config.json

mod config;

pub use config::*;
