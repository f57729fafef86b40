//! Hot corners for Windows: mouse gestures in screen corners and edges
//! launch programs, and lingering in the top-left corner opens task view.
//!
//! Everything outside `platform` is pure Rust with no FFI, so the whole
//! dispatch engine runs as normal integration tests on any OS.

pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export the types most callers need
pub use error::{ConfigError, HotCornersError, Result};
pub use events::{classify, ActionQueue, PointerEvent, RawEvent, RawEventKind};
pub use handlers::{ActionExecutor, DwellStatus, HookDispatcher, InputProbe};
pub use model::{compute_zones, Action, ActionTable, HotCornersConfig, Point, Rect, Zone, Zones};
