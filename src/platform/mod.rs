//! Platform-specific implementations.
//!
//! Only Windows is supported. The platform tree holds every FFI call:
//! - Input handling (low-level mouse hook, key state, synthetic input)
//! - App services (display metrics, program launching)
//! - Storage (JSON config file persistence)

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::*;
