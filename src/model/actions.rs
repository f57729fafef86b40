//! Actions and per-zone action tables (pure Rust, no FFI).
//!
//! An [`ActionTable`] maps the bindable pointer events of one zone to an
//! [`Action`]. A missing entry is a valid outcome and means "do nothing".
//! Tables are built once from configuration and only read afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::events::PointerEvent;
use crate::model::geometry::Zone;

/// An external side effect bound to a gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open a program, document or folder. `%VAR%` references are expanded
    /// when the action runs.
    Launch(String),
    /// Show the task switcher (Win+Tab).
    TaskView,
}

impl Action {
    pub fn launch(target: impl Into<String>) -> Self {
        Action::Launch(target.into())
    }

    fn check(&self) -> Result<(), ConfigError> {
        match self {
            Action::Launch(target) if target.trim().is_empty() => Err(ConfigError::EmptyTarget),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Launch(target) => write!(f, "launch '{}'", target),
            Action::TaskView => write!(f, "task view"),
        }
    }
}

/// Immutable mapping from bindable pointer events to actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<PointerEvent, Action>",
    into = "BTreeMap<PointerEvent, Action>"
)]
pub struct ActionTable {
    entries: BTreeMap<PointerEvent, Action>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style binding. Rejects `Move`/`Unknown` and empty targets.
    pub fn bind(mut self, event: PointerEvent, action: Action) -> Result<Self, ConfigError> {
        if !event.is_bindable() {
            return Err(ConfigError::UnbindableEvent(event));
        }
        action.check()?;
        self.entries.insert(event, action);
        Ok(self)
    }

    /// Action bound to `event`, if any.
    pub fn lookup(&self, event: PointerEvent) -> Option<&Action> {
        self.entries.get(&event)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl TryFrom<BTreeMap<PointerEvent, Action>> for ActionTable {
    type Error = ConfigError;

    fn try_from(entries: BTreeMap<PointerEvent, Action>) -> Result<Self, Self::Error> {
        entries
            .into_iter()
            .try_fold(ActionTable::new(), |table, (event, action)| {
                table.bind(event, action)
            })
    }
}

impl From<ActionTable> for BTreeMap<PointerEvent, Action> {
    fn from(table: ActionTable) -> Self {
        table.entries
    }
}

/// Action tables of the four click zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneBindings {
    pub top_right: ActionTable,
    pub top_band: ActionTable,
    pub left_band: ActionTable,
    pub right_band: ActionTable,
}

impl ZoneBindings {
    /// Table of a click zone. The top-left corner is dwell-only and has none.
    pub fn table(&self, zone: Zone) -> Option<&ActionTable> {
        match zone {
            Zone::TopLeft => None,
            Zone::TopRight => Some(&self.top_right),
            Zone::TopBand => Some(&self.top_band),
            Zone::LeftBand => Some(&self.left_band),
            Zone::RightBand => Some(&self.right_band),
        }
    }

    /// Action bound to `event` in `zone`, if any.
    pub fn lookup(&self, zone: Zone, event: PointerEvent) -> Option<&Action> {
        self.table(zone).and_then(|t| t.lookup(event))
    }

    /// Total number of bindings over all zones.
    pub fn binding_count(&self) -> usize {
        self.top_right.len() + self.top_band.len() + self.left_band.len() + self.right_band.len()
    }
}
