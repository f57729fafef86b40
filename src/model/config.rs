//! Application configuration (pure Rust, no FFI).
//!
//! This module defines the configuration structure that is
//! serialized to/from the JSON config file.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::actions::{Action, ActionTable, ZoneBindings};
use super::constants::*;
use crate::error::ConfigError;
use crate::events::PointerEvent;

/// Complete configuration, serializable to/from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotCornersConfig {
    /// Size of the corner zones in pixels.
    pub corner_size: i32,
    /// Time the pointer must linger in the top-left corner, in ms.
    pub dwell_time_ms: u64,
    /// Action fired by a dwell in the top-left corner.
    pub dwell_action: Action,
    /// Click and wheel bindings of the other zones.
    pub bindings: ZoneBindings,
}

impl Default for HotCornersConfig {
    fn default() -> Self {
        Self {
            corner_size: DEFAULT_CORNER_SIZE,
            dwell_time_ms: DEFAULT_DWELL_TIME_MS,
            dwell_action: Action::TaskView,
            bindings: default_bindings(),
        }
    }
}

impl HotCornersConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate();
        Ok(config)
    }

    /// Pretty JSON, as written to the config file.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.corner_size = self.corner_size.clamp(MIN_CORNER_SIZE, MAX_CORNER_SIZE);
        self.dwell_time_ms = self
            .dwell_time_ms
            .clamp(MIN_DWELL_TIME_MS, MAX_DWELL_TIME_MS);
    }

    /// Dwell delay as a `Duration`.
    pub fn dwell_time(&self) -> Duration {
        Duration::from_millis(self.dwell_time_ms)
    }
}

/// Built-in bindings, all pointing at locations every Windows install has.
fn default_bindings() -> ZoneBindings {
    let table = |entries: &[(PointerEvent, &str)]| -> ActionTable {
        let map: BTreeMap<_, _> = entries
            .iter()
            .map(|(event, target)| (*event, Action::launch(*target)))
            .collect();
        ActionTable::try_from(map).unwrap_or_default()
    };

    ZoneBindings {
        top_right: table(&[
            (PointerEvent::WheelUp, "%windir%\\system32\\charmap.exe"),
            (PointerEvent::WheelDown, "%windir%\\system32\\SnippingTool.exe"),
        ]),
        top_band: table(&[
            (PointerEvent::LeftButton, "%windir%\\system32\\cmd.exe"),
            (PointerEvent::WheelDown, "%windir%\\system32\\cmd.exe"),
        ]),
        left_band: table(&[(PointerEvent::LeftButton, "%UserProfile%")]),
        right_band: ActionTable::new(),
    }
}
