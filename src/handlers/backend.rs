//! Seams between the dispatch engine and the operating system.
//!
//! The engine only ever talks to the platform through these two traits, so
//! everything in `handlers` runs unchanged under test doubles.

use crate::model::{Action, Point};

/// Fresh queries of pointer and key state.
///
/// Both calls must be cheap and non-blocking. `None` means the query
/// failed; callers treat that as "condition not satisfied".
pub trait InputProbe: Send + Sync {
    /// Current screen-space pointer position.
    fn cursor_position(&self) -> Option<Point>;

    /// Whether any modifier key or mouse button is held down right now.
    fn input_held(&self) -> Option<bool>;
}

/// Runs actions without waiting for them.
///
/// `execute` must return promptly and never report failure back: the
/// caller sits on the system-wide input path.
pub trait ActionExecutor: Send + Sync {
    fn execute(&self, action: &Action);
}
