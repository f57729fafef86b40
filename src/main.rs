// No console window in release builds; logs go to %APPDATA%/HotCorners.
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        eprintln!("HotCorners error: {}", hotcorners::HotCornersError::Unsupported);
        std::process::exit(1);
    }
}
