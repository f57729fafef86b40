//! Fresh pointer and key state queries for the dwell re-check.

use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, VIRTUAL_KEY, VK_CONTROL, VK_LBUTTON, VK_LWIN, VK_MBUTTON, VK_MENU,
    VK_RBUTTON, VK_RWIN, VK_SHIFT, VK_XBUTTON1, VK_XBUTTON2,
};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

use crate::handlers::InputProbe;
use crate::model::Point;

/// Keys and buttons that veto a dwell trigger while held.
const BLOCKING_KEYS: [VIRTUAL_KEY; 10] = [
    VK_SHIFT,
    VK_CONTROL,
    VK_MENU,
    VK_LWIN,
    VK_RWIN,
    VK_LBUTTON,
    VK_RBUTTON,
    VK_MBUTTON,
    VK_XBUTTON1,
    VK_XBUTTON2,
];

/// Asynchronous key state: the most significant bit is set while down.
fn is_down(vk: VIRTUAL_KEY) -> bool {
    unsafe { GetAsyncKeyState(i32::from(vk.0)) < 0 }
}

/// [`InputProbe`] backed by `GetCursorPos` and `GetAsyncKeyState`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Probe;

impl InputProbe for Win32Probe {
    fn cursor_position(&self) -> Option<Point> {
        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt) }.ok()?;
        Some(Point::new(pt.x, pt.y))
    }

    fn input_held(&self) -> Option<bool> {
        Some(BLOCKING_KEYS.iter().any(|vk| is_down(*vk)))
    }
}
