//! Primary display metrics.

use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

use crate::model::Rect;

/// Bounds of the primary monitor, which by definition starts at (0,0).
pub fn primary_bounds() -> Rect {
    let (width, height) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
    Rect::new(0, 0, width, height)
}
