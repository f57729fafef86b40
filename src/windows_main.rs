//! Windows-specific entry point and application logic.
//!
//! Installs the low-level mouse hook and pumps messages until Ctrl+Alt+Q
//! or `WM_QUIT`. The hook callback runs on this thread.

use std::sync::Arc;

use tracing::{debug, error, info};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, TranslateMessage, MSG, WM_HOTKEY,
};

use hotcorners::handlers::{ActionExecutor, HookDispatcher, InputProbe};
use hotcorners::logging;
use hotcorners::model::compute_zones;
use hotcorners::platform::windows::app::{primary_bounds, spawn_launcher};
use hotcorners::platform::windows::input::{MouseHook, QuitHotkey, Win32Probe, HOTKEY_QUIT};
use hotcorners::platform::windows::storage;

/// Main entry point for Windows.
pub fn run() {
    let _log = logging::init(Some(&storage::app_dir()));

    if let Err(e) = run_app() {
        error!("hotcorners error: {}", e);
        // Release builds have no console.
        #[cfg(debug_assertions)]
        eprintln!("HotCorners error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> hotcorners::Result<()> {
    let config = storage::load_config();
    let display = primary_bounds();
    let zones = compute_zones(config.corner_size, display);

    info!(
        corner_size = config.corner_size,
        dwell_ms = config.dwell_time_ms,
        bindings = config.bindings.binding_count(),
        "starting on {}x{} display",
        display.width(),
        display.height()
    );
    debug!(
        "zones: top-left {} top-right {} top {} left {} right {}",
        zones.top_left, zones.top_right, zones.top_band, zones.left_band, zones.right_band
    );

    let executor: Arc<dyn ActionExecutor> = Arc::new(spawn_launcher()?);
    let probe: Arc<dyn InputProbe> = Arc::new(Win32Probe);
    let dispatcher = HookDispatcher::new(&config, zones, probe, executor);

    // Hook registration failure is fatal: there is nothing to do without it.
    let _hook = MouseHook::install(dispatcher)?;
    let quit = QuitHotkey::register();
    if quit.is_registered() {
        info!("running; Ctrl+Alt+Q quits");
    }

    message_loop();

    info!("shutting down");
    Ok(())
}

/// Message pump for `WH_MOUSE_LL`: the hook is serviced from here.
fn message_loop() {
    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            if msg.message == WM_HOTKEY && msg.wParam.0 as i32 == HOTKEY_QUIT {
                break;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
