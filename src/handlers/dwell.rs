//! Dwell monitor: fires an action when the pointer lingers in a zone.
//!
//! `start()` spawns a wait thread that sleeps on a condition variable for
//! the dwell delay. `stop()` flips the cancel flag under the same mutex the
//! wait thread holds while it re-checks liveness and fires, so once `stop()`
//! returns the action of that wait can no longer fire.
//!
//! The monitor is owned by the hook thread; only that thread calls
//! `start()`/`stop()`.

use std::fmt;
use std::io;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use super::backend::{ActionExecutor, InputProbe};
use crate::model::{Action, Rect, Zone};

/// Externally visible state of the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwellStatus {
    /// No wait for this visit yet.
    Idle,
    /// Wait in progress.
    Waiting,
    /// Wait finished (fired or rejected); latched until the next `stop()`.
    Completed,
}

/// How a single wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwellOutcome {
    Fired,
    Cancelled,
    /// A modifier key or mouse button was held.
    InputHeld,
    /// The pointer was no longer in the zone.
    LeftZone,
    /// Pointer or key state could not be queried.
    ProbeFailed,
    /// The wait thread could not be spawned.
    NotStarted,
}

impl fmt::Display for DwellOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DwellOutcome::Fired => "fired",
            DwellOutcome::Cancelled => "cancelled",
            DwellOutcome::InputHeld => "input held",
            DwellOutcome::LeftZone => "left zone",
            DwellOutcome::ProbeFailed => "probe failed",
            DwellOutcome::NotStarted => "not started",
        };
        f.write_str(s)
    }
}

#[derive(Default)]
struct CancelToken {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

impl CancelToken {
    fn lock(&self) -> MutexGuard<'_, bool> {
        self.cancelled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cancel(&self) {
        *self.lock() = true;
        self.wake.notify_all();
    }
}

struct PendingWait {
    token: Arc<CancelToken>,
    thread: JoinHandle<DwellOutcome>,
}

/// What `start()` left behind for the current visit.
enum Armed {
    Waiting(PendingWait),
    /// Spawning failed; not retried until the pointer leaves.
    SpawnFailed,
}

/// Everything the wait thread needs, moved into it on `start()`.
struct WaitJob {
    zone: Zone,
    rect: Rect,
    action: Action,
    delay: Duration,
    probe: Arc<dyn InputProbe>,
    executor: Arc<dyn ActionExecutor>,
    token: Arc<CancelToken>,
}

impl WaitJob {
    fn run(self) -> DwellOutcome {
        let guard = self.token.lock();
        let (guard, _) = self
            .token
            .wake
            .wait_timeout_while(guard, self.delay, |cancelled| !*cancelled)
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if *guard {
            return DwellOutcome::Cancelled;
        }

        // Keep the guard until the action is handed off: a concurrent
        // stop() blocks here instead of racing the fire.
        let outcome = self.check_liveness();
        if outcome == DwellOutcome::Fired {
            debug!(zone = self.zone.description(), action = %self.action, "dwell trigger");
            self.executor.execute(&self.action);
        }
        drop(guard);
        outcome
    }

    fn check_liveness(&self) -> DwellOutcome {
        match self.probe.input_held() {
            None => return DwellOutcome::ProbeFailed,
            Some(true) => return DwellOutcome::InputHeld,
            Some(false) => {}
        }
        match self.probe.cursor_position() {
            None => DwellOutcome::ProbeFailed,
            Some(p) if !self.rect.contains(p) => DwellOutcome::LeftZone,
            Some(_) => DwellOutcome::Fired,
        }
    }
}

/// Cancellable dwell timer bound to one zone and one action.
pub struct DwellMonitor {
    zone: Zone,
    rect: Rect,
    action: Action,
    delay: Duration,
    probe: Arc<dyn InputProbe>,
    executor: Arc<dyn ActionExecutor>,
    pending: Option<Armed>,
}

impl DwellMonitor {
    pub fn new(
        zone: Zone,
        rect: Rect,
        action: Action,
        delay: Duration,
        probe: Arc<dyn InputProbe>,
        executor: Arc<dyn ActionExecutor>,
    ) -> Self {
        Self {
            zone,
            rect,
            action,
            delay,
            probe,
            executor,
            pending: None,
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// True from `start()` until the matching `stop()`, even after the
    /// wait itself has completed.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> DwellStatus {
        match &self.pending {
            None => DwellStatus::Idle,
            Some(Armed::Waiting(p)) if !p.thread.is_finished() => DwellStatus::Waiting,
            Some(_) => DwellStatus::Completed,
        }
    }

    /// Arm the monitor. No-op while already armed.
    pub fn start(&mut self) {
        if self.pending.is_some() {
            return;
        }

        let token = Arc::new(CancelToken::default());
        let job = WaitJob {
            zone: self.zone,
            rect: self.rect,
            action: self.action.clone(),
            delay: self.delay,
            probe: Arc::clone(&self.probe),
            executor: Arc::clone(&self.executor),
            token: Arc::clone(&token),
        };

        let spawned = thread::Builder::new()
            .name("hotcorners-dwell".into())
            .spawn(move || job.run());
        self.arm(token, spawned);
    }

    fn arm(&mut self, token: Arc<CancelToken>, spawned: io::Result<JoinHandle<DwellOutcome>>) {
        let armed = match spawned {
            Ok(thread) => Armed::Waiting(PendingWait { token, thread }),
            Err(e) => {
                warn!(zone = self.zone.description(), "failed to spawn dwell wait: {}", e);
                Armed::SpawnFailed
            }
        };
        self.pending = Some(armed);
    }

    /// Cancel the wait and release its thread. No-op while idle.
    ///
    /// Returns how the wait ended, or `None` if the monitor was idle.
    pub fn stop(&mut self) -> Option<DwellOutcome> {
        let pending = match self.pending.take()? {
            Armed::Waiting(pending) => pending,
            Armed::SpawnFailed => return Some(DwellOutcome::NotStarted),
        };
        pending.token.cancel();
        match pending.thread.join() {
            Ok(outcome) => {
                debug!(zone = self.zone.description(), %outcome, "dwell wait ended");
                Some(outcome)
            }
            Err(_) => {
                warn!("dwell wait thread panicked");
                None
            }
        }
    }
}

impl Drop for DwellMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
