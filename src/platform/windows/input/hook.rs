//! Low-level mouse hook feeding the dispatcher.

use std::cell::RefCell;
use std::sync::atomic::{AtomicIsize, Ordering};

use tracing::{info, warn};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, MSLLHOOKSTRUCT, WH_MOUSE_LL,
    WM_LBUTTONDOWN, WM_MBUTTONDOWN, WM_MOUSEMOVE, WM_MOUSEWHEEL, WM_RBUTTONDOWN, WM_XBUTTONDOWN,
};

use crate::error::Result;
use crate::events::{RawEvent, RawEventKind};
use crate::handlers::HookDispatcher;
use crate::model::Point;

/// Global mouse hook handle (must be static for the hook callback).
pub static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

thread_local! {
    /// Dispatcher driven by the hook. The hook runs on the thread that
    /// installed it, so thread-local storage is all it needs.
    static DISPATCHER: RefCell<Option<HookDispatcher>> = const { RefCell::new(None) };
}

/// Map a `WM_*` mouse message to its event kind.
pub fn raw_event_kind(message: u32) -> RawEventKind {
    match message {
        WM_MOUSEMOVE => RawEventKind::Move,
        WM_LBUTTONDOWN => RawEventKind::LeftDown,
        WM_RBUTTONDOWN => RawEventKind::RightDown,
        WM_MBUTTONDOWN => RawEventKind::MiddleDown,
        WM_XBUTTONDOWN => RawEventKind::ExtendedDown,
        WM_MOUSEWHEEL => RawEventKind::Wheel,
        other => RawEventKind::Other(other),
    }
}

/// Low-level mouse hook procedure. Observes only, never swallows an event.
pub extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if ncode >= 0 && lparam.0 != 0 {
        // SAFETY: for WH_MOUSE_LL with ncode >= 0, lparam points to a valid
        // MSLLHOOKSTRUCT for the duration of the call.
        let info = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
        let event = RawEvent::new(
            raw_event_kind(wparam.0 as u32),
            info.mouseData,
            Point::new(info.pt.x, info.pt.y),
        );

        DISPATCHER.with(|slot| {
            // A failed borrow would mean re-entry; skip rather than panic.
            if let Ok(mut slot) = slot.try_borrow_mut() {
                if let Some(dispatcher) = slot.as_mut() {
                    dispatcher.handle_event(&event);
                }
            }
        });
    }

    let hook = MOUSE_HOOK.load(Ordering::SeqCst);
    unsafe { CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam) }
}

/// Installed mouse hook. Unhooks and shuts the dispatcher down on drop.
///
/// Must be created and dropped on the thread that runs the message loop.
pub struct MouseHook {
    hook: HHOOK,
}

impl MouseHook {
    /// Hand `dispatcher` to the hook callback and register the hook.
    pub fn install(dispatcher: HookDispatcher) -> Result<Self> {
        DISPATCHER.with(|slot| *slot.borrow_mut() = Some(dispatcher));

        let hook = unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) }
            .inspect_err(|_| {
                // Nothing will ever drive it; release it on this thread.
                drop(DISPATCHER.with(|slot| slot.borrow_mut().take()));
            })?;

        MOUSE_HOOK.store(hook.0 as isize, Ordering::SeqCst);
        info!("mouse hook installed");
        Ok(Self { hook })
    }
}

impl Drop for MouseHook {
    fn drop(&mut self) {
        if let Err(e) = unsafe { UnhookWindowsHookEx(self.hook) } {
            warn!("failed to remove mouse hook: {}", e);
        }
        MOUSE_HOOK.store(0, Ordering::SeqCst);

        // Take it out first so the dwell join happens outside the borrow.
        let dispatcher = DISPATCHER.with(|slot| slot.borrow_mut().take());
        if let Some(mut dispatcher) = dispatcher {
            dispatcher.shutdown();
        }
        info!("mouse hook removed");
    }
}
