//! Application services for Windows (display metrics, action execution).

pub mod display;
pub mod launcher;

pub use display::primary_bounds;
pub use launcher::{expand_env, perform, shell_open, spawn_launcher};
