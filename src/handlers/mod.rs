//! Event handlers and dispatching.
//!
//! This module contains the hook dispatcher that processes every mouse
//! event, the dwell monitor it drives, and the traits through which both
//! reach the operating system.

pub mod backend;
pub mod dispatcher;
pub mod dwell;

pub use backend::{ActionExecutor, InputProbe};
pub use dispatcher::{HookDispatcher, Resolved};
pub use dwell::{DwellMonitor, DwellOutcome, DwellStatus};
