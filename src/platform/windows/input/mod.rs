//! Input handling for Windows (mouse hook, key state, synthetic keys, hotkeys).

pub mod hook;
pub mod hotkeys;
pub mod inject;
pub mod probe;

pub use hook::{mouse_hook_proc, raw_event_kind, MouseHook, MOUSE_HOOK};
pub use hotkeys::{QuitHotkey, HOTKEY_QUIT};
pub use inject::send_task_view;
pub use probe::Win32Probe;
