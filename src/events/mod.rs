//! Pointer events and the action queue.
//!
//! # Data flow
//!
//! ```text
//! ┌──────────────┐  RawEvent   ┌──────────────┐  Action   ┌─────────────┐
//! │  Mouse hook  │ ──────────▶ │  Dispatcher  │ ────────▶ │ ActionQueue │
//! │ (WH_MOUSE_LL)│  classify() │ (hook thread)│ execute() │  (worker)   │
//! └──────────────┘             └──────────────┘           └─────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: `RawEvent`, `PointerEvent` and `classify`
//! - [`queue`]: `ActionQueue`, the fire-and-forget action worker

pub mod queue;
pub mod types;

// Re-export main types for convenient access
pub use queue::ActionQueue;
pub use types::{classify, wheel_delta, PointerEvent, RawEvent, RawEventKind};
