//! Pointer events and their classification.
//!
//! The platform hook translates each native mouse message into a
//! [`RawEvent`]; [`classify`] then reduces it to the abstract
//! [`PointerEvent`] the dispatcher and the action tables work with.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use serde::{Deserialize, Serialize};

use crate::model::geometry::Point;

/// Kind of a native mouse message, as delivered by the input hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEventKind {
    Move,
    LeftDown,
    RightDown,
    MiddleDown,
    /// X button (back/forward) pressed.
    ExtendedDown,
    /// Vertical wheel; the delta travels in the payload.
    Wheel,
    /// Any other message (button release, double click, horizontal wheel...).
    Other(u32),
}

/// A native mouse event reduced to what the dispatcher needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub kind: RawEventKind,
    /// Auxiliary payload; for wheel events the high word is the signed delta.
    pub mouse_data: u32,
    /// Screen-space pointer position at the time of the event.
    pub position: Point,
}

impl RawEvent {
    pub fn new(kind: RawEventKind, mouse_data: u32, position: Point) -> Self {
        Self {
            kind,
            mouse_data,
            position,
        }
    }

    /// Pointer movement to `position`.
    pub fn moved(position: Point) -> Self {
        Self::new(RawEventKind::Move, 0, position)
    }

    /// Wheel rotation of `delta` at `position`.
    pub fn wheel(delta: i16, position: Point) -> Self {
        Self::new(
            RawEventKind::Wheel,
            u32::from(delta as u16) << 16,
            position,
        )
    }

    pub fn is_move(&self) -> bool {
        self.kind == RawEventKind::Move
    }
}

/// Abstract pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    LeftButton,
    RightButton,
    MiddleButton,
    ExtendedButton,
    WheelUp,
    WheelDown,
    Move,
    Unknown,
}

impl PointerEvent {
    /// Events that may be bound to an action in a zone's action table.
    pub const BINDABLE: [PointerEvent; 6] = [
        PointerEvent::LeftButton,
        PointerEvent::RightButton,
        PointerEvent::MiddleButton,
        PointerEvent::ExtendedButton,
        PointerEvent::WheelUp,
        PointerEvent::WheelDown,
    ];

    /// Returns true if this event can carry an action binding.
    pub fn is_bindable(&self) -> bool {
        !matches!(self, PointerEvent::Move | PointerEvent::Unknown)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            PointerEvent::LeftButton => "Left click",
            PointerEvent::RightButton => "Right click",
            PointerEvent::MiddleButton => "Middle click",
            PointerEvent::ExtendedButton => "X click",
            PointerEvent::WheelUp => "Fwd wheel",
            PointerEvent::WheelDown => "Bck wheel",
            PointerEvent::Move => "Move",
            PointerEvent::Unknown => "Unknown",
        }
    }
}

/// Signed wheel delta carried in the high word of `mouse_data`.
pub fn wheel_delta(mouse_data: u32) -> i16 {
    ((mouse_data >> 16) & 0xFFFF) as u16 as i16
}

/// Map a raw event kind and payload to a [`PointerEvent`]. Total and pure.
pub fn classify(kind: RawEventKind, mouse_data: u32) -> PointerEvent {
    match kind {
        RawEventKind::Move => PointerEvent::Move,
        RawEventKind::LeftDown => PointerEvent::LeftButton,
        RawEventKind::RightDown => PointerEvent::RightButton,
        RawEventKind::MiddleDown => PointerEvent::MiddleButton,
        RawEventKind::ExtendedDown => PointerEvent::ExtendedButton,
        RawEventKind::Wheel if wheel_delta(mouse_data) > 0 => PointerEvent::WheelUp,
        RawEventKind::Wheel => PointerEvent::WheelDown,
        RawEventKind::Other(_) => PointerEvent::Unknown,
    }
}
