//! Screen geometry: rectangles, hot zones and the point-in-zone test.
//!
//! ```text
//!                        [top band]
//!  [top-left] ┌─┬────════════────┬─┐ [top-right]
//!             ├─┘                └─┤
//!             ║                    ║
//!   [left band]                    [right band]
//!             ║                    ║
//!             │                    │
//!             └────────────────────┘
//! ```
//!
//! Zones are computed once at startup from the primary display bounds and
//! never change for the life of the process.

use std::fmt;

use super::constants::{EDGE_SLACK, OUTSIDE_MARGIN};

/// A screen-space point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer pixel rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Right edge inclusive, bottom edge exclusive.
    ///
    /// The asymmetry keeps the authored zone boundaries from swallowing each
    /// other's shared row/column; do not make it symmetric.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y < self.bottom
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({};{}) - ({};{})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// The hot zones known to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zone {
    /// Dwell-only corner, fixed action.
    TopLeft,
    TopRight,
    TopBand,
    LeftBand,
    RightBand,
}

impl Zone {
    /// Human-readable name for logging.
    pub fn description(&self) -> &'static str {
        match self {
            Zone::TopLeft => "top left corner",
            Zone::TopRight => "top right corner",
            Zone::TopBand => "top band",
            Zone::LeftBand => "left band",
            Zone::RightBand => "right band",
        }
    }
}

/// Order in which zones are tested for button and wheel events.
///
/// The first zone containing the pointer wins; later zones are not tested.
pub const CLICK_ZONE_PRIORITY: [Zone; 4] = [
    Zone::TopRight,
    Zone::TopBand,
    Zone::LeftBand,
    Zone::RightBand,
];

/// The rectangles of every hot zone, computed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones {
    pub top_left: Rect,
    pub top_right: Rect,
    pub top_band: Rect,
    pub left_band: Rect,
    pub right_band: Rect,
}

impl Zones {
    /// Lay the zones out on `display`, the primary display bounds.
    ///
    /// Bands cover the middle third of their edge and straddle it by one
    /// pixel on each side. No overlap check is made here.
    pub fn compute(corner_size: i32, display: Rect) -> Self {
        let third_w = display.width() / 3;
        let third_h = display.height() / 3;

        let top_left = Rect::new(
            display.left - OUTSIDE_MARGIN,
            display.top - OUTSIDE_MARGIN,
            display.left + corner_size,
            display.top + corner_size,
        );

        let top_right = Rect::new(
            display.right - corner_size,
            display.top - EDGE_SLACK,
            display.right + EDGE_SLACK,
            display.top + corner_size,
        );

        let right_band = Rect::new(
            display.right - EDGE_SLACK,
            display.top + third_h,
            display.right + EDGE_SLACK,
            display.bottom - third_h,
        );

        let left_band = Rect::new(
            display.left - EDGE_SLACK,
            right_band.top,
            display.left + EDGE_SLACK,
            right_band.bottom,
        );

        let top_band = Rect::new(
            display.left + third_w,
            display.top - EDGE_SLACK,
            display.right - third_w,
            display.top + EDGE_SLACK,
        );

        Self {
            top_left,
            top_right,
            top_band,
            left_band,
            right_band,
        }
    }

    /// Rectangle of a single zone.
    pub fn rect(&self, zone: Zone) -> Rect {
        match zone {
            Zone::TopLeft => self.top_left,
            Zone::TopRight => self.top_right,
            Zone::TopBand => self.top_band,
            Zone::LeftBand => self.left_band,
            Zone::RightBand => self.right_band,
        }
    }

    /// First click zone (in [`CLICK_ZONE_PRIORITY`] order) containing `p`.
    pub fn click_zone_at(&self, p: Point) -> Option<Zone> {
        CLICK_ZONE_PRIORITY
            .iter()
            .copied()
            .find(|zone| self.rect(*zone).contains(p))
    }
}

/// Convenience wrapper for [`Zones::compute`].
pub fn compute_zones(corner_size: i32, display: Rect) -> Zones {
    Zones::compute(corner_size, display)
}
