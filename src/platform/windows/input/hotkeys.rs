//! Global quit hotkey.

use tracing::warn;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT,
};

// Hotkey IDs
pub const HOTKEY_QUIT: i32 = 1;

/// Virtual key code of 'Q'.
const VK_Q: u32 = 0x51;

/// Thread hotkey (Ctrl+Alt+Q) that ends the message loop.
///
/// Registered without a window, so `WM_HOTKEY` arrives in the thread's
/// message queue. Unregistered on drop.
pub struct QuitHotkey {
    registered: bool,
}

impl QuitHotkey {
    /// Register the hotkey. Failure (e.g. already taken by another app) is
    /// logged and leaves the application running without it.
    pub fn register() -> Self {
        let registered = match unsafe {
            RegisterHotKey(None, HOTKEY_QUIT, MOD_CONTROL | MOD_ALT | MOD_NOREPEAT, VK_Q)
        } {
            Ok(()) => true,
            Err(e) => {
                warn!("quit hotkey Ctrl+Alt+Q unavailable: {}", e);
                false
            }
        };
        Self { registered }
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }
}

impl Drop for QuitHotkey {
    fn drop(&mut self) {
        if self.registered {
            let _ = unsafe { UnregisterHotKey(None, HOTKEY_QUIT) };
        }
    }
}
