//! Windows-specific implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - Input handling (low-level mouse hook, key state probe, SendInput)
//! - App services (primary display bounds, ShellExecuteEx action worker)
//! - Storage (JSON config file persistence)

pub mod app;
pub mod input;
pub mod storage;
