//! Action execution: shell launches and task view, off the hook thread.

use std::mem;

use tracing::{debug, warn};
use windows::core::{w, HSTRING, PCWSTR};
use windows::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED, COINIT_DISABLE_OLE1DDE};
use windows::Win32::System::Environment::ExpandEnvironmentStringsW;
use windows::Win32::UI::Shell::{ShellExecuteExW, SEE_MASK_FLAG_NO_UI, SHELLEXECUTEINFOW};
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

use crate::events::ActionQueue;
use crate::model::Action;
use crate::platform::windows::input::send_task_view;

/// Expand `%VAR%` references. Returns the input unchanged on failure.
pub fn expand_env(target: &str) -> String {
    let src = HSTRING::from(target);
    let needed = unsafe { ExpandEnvironmentStringsW(&src, None) };
    if needed == 0 {
        return target.to_owned();
    }

    let mut buf = vec![0u16; needed as usize];
    let written = unsafe { ExpandEnvironmentStringsW(&src, Some(&mut buf)) } as usize;
    if written == 0 || written > buf.len() {
        return target.to_owned();
    }
    // `written` counts the terminating null.
    String::from_utf16_lossy(&buf[..written - 1])
}

/// Open a program, document or folder with the shell's default verb.
pub fn shell_open(target: &str) -> windows::core::Result<()> {
    let file = HSTRING::from(expand_env(target));
    let mut info = SHELLEXECUTEINFOW {
        cbSize: mem::size_of::<SHELLEXECUTEINFOW>() as u32,
        fMask: SEE_MASK_FLAG_NO_UI,
        lpVerb: w!("open"),
        lpFile: PCWSTR(file.as_ptr()),
        nShow: SW_SHOWNORMAL.0,
        ..Default::default()
    };
    unsafe { ShellExecuteExW(&mut info) }
}

/// Run one action; failures are logged and dropped.
pub fn perform(action: Action) {
    match action {
        Action::Launch(target) => match shell_open(&target) {
            Ok(()) => debug!(%target, "launched"),
            Err(e) => warn!(%target, "launch failed: {}", e),
        },
        Action::TaskView => {
            if let Err(e) = send_task_view() {
                warn!("task view input failed: {}", e);
            }
        }
    }
}

/// Shell extensions may rely on COM in a single-threaded apartment.
fn init_com() {
    let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED | COINIT_DISABLE_OLE1DDE) };
    if let Err(e) = hr.ok() {
        warn!("COM initialisation failed: {}", e);
    }
}

/// Start the worker thread that runs actions for the dispatcher.
pub fn spawn_launcher() -> std::io::Result<ActionQueue> {
    ActionQueue::spawn(init_com, perform)
}
