//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including zone geometry, action tables, configuration and constants.
//!
//! Platform-specific persistence is in `platform::windows::storage`.

pub mod actions;
pub mod config;
pub mod constants;
pub mod geometry;

pub use actions::{Action, ActionTable, ZoneBindings};
pub use config::HotCornersConfig;
pub use constants::*;
pub use geometry::{compute_zones, Point, Rect, Zone, Zones, CLICK_ZONE_PRIORITY};
