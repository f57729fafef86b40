//! Hook dispatcher: the per-event entry point of the engine.
//!
//! Called once per mouse event on the hook thread, strictly in arrival
//! order. Movement drives the dwell monitor of the top-left corner; button
//! and wheel events are matched against the click zones and their action
//! tables. Nothing here blocks, fails, or suppresses the event: forwarding
//! to the next hook is the caller's job and always happens.

use std::sync::Arc;

use tracing::debug;

use super::backend::{ActionExecutor, InputProbe};
use super::dwell::{DwellMonitor, DwellStatus};
use crate::events::{classify, PointerEvent, RawEvent};
use crate::model::{Action, HotCornersConfig, Point, Zone, ZoneBindings, Zones};

/// A button or wheel event resolved to a bound action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub zone: Zone,
    pub event: PointerEvent,
    pub action: &'a Action,
}

pub struct HookDispatcher {
    zones: Zones,
    bindings: ZoneBindings,
    dwell: DwellMonitor,
    executor: Arc<dyn ActionExecutor>,
}

impl HookDispatcher {
    /// Build a dispatcher over precomputed `zones`.
    pub fn new(
        config: &HotCornersConfig,
        zones: Zones,
        probe: Arc<dyn InputProbe>,
        executor: Arc<dyn ActionExecutor>,
    ) -> Self {
        let dwell = DwellMonitor::new(
            Zone::TopLeft,
            zones.top_left,
            config.dwell_action.clone(),
            config.dwell_time(),
            probe,
            Arc::clone(&executor),
        );

        Self {
            zones,
            bindings: config.bindings.clone(),
            dwell,
            executor,
        }
    }

    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    pub fn dwell_status(&self) -> DwellStatus {
        self.dwell.status()
    }

    /// Handle one mouse event.
    pub fn handle_event(&mut self, event: &RawEvent) {
        if event.is_move() {
            self.on_move(event.position);
        } else if let Some(hit) = self.resolve(event) {
            debug!(
                "{} in {} {};{}",
                hit.event.description(),
                hit.zone.description(),
                event.position.x,
                event.position.y
            );
            self.executor.execute(hit.action);
        }
    }

    /// Look up the action a button or wheel event is bound to, if any.
    ///
    /// Movement and unknown events never resolve. Zones are tried in
    /// priority order and only the first zone containing the pointer is
    /// consulted.
    pub fn resolve(&self, event: &RawEvent) -> Option<Resolved<'_>> {
        let pointer_event = classify(event.kind, event.mouse_data);
        if !pointer_event.is_bindable() {
            return None;
        }
        let zone = self.zones.click_zone_at(event.position)?;
        let action = self.bindings.lookup(zone, pointer_event)?;
        Some(Resolved {
            zone,
            event: pointer_event,
            action,
        })
    }

    fn on_move(&mut self, p: Point) {
        let inside = self.dwell.rect().contains(p);
        match (inside, self.dwell.is_armed()) {
            (true, false) => {
                debug!("Entered {} {};{}", self.dwell.zone().description(), p.x, p.y);
                self.dwell.start();
            }
            (false, true) => {
                debug!("Exited {} {};{}", self.dwell.zone().description(), p.x, p.y);
                self.dwell.stop();
            }
            _ => {}
        }
    }

    /// Cancel any pending dwell wait.
    pub fn shutdown(&mut self) {
        self.dwell.stop();
    }
}
