//! Shared test doubles for the dispatch engine.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use hotcorners::handlers::{ActionExecutor, HookDispatcher, InputProbe};
use hotcorners::model::{compute_zones, Action, HotCornersConfig, Point, Rect};

/// Probe with scripted answers. `None` simulates a failed query.
///
/// A non-zero stall makes every key state query block that long, keeping
/// the dwell wait inside its re-check.
pub struct FakeProbe {
    cursor: Mutex<Option<Point>>,
    held: Mutex<Option<bool>>,
    stall: Mutex<Duration>,
    key_queries: AtomicUsize,
}

impl FakeProbe {
    pub fn at(p: Point) -> Arc<Self> {
        Arc::new(Self {
            cursor: Mutex::new(Some(p)),
            held: Mutex::new(Some(false)),
            stall: Mutex::new(Duration::ZERO),
            key_queries: AtomicUsize::new(0),
        })
    }

    pub fn set_cursor(&self, p: Option<Point>) {
        *self.cursor.lock().unwrap() = p;
    }

    pub fn set_held(&self, held: Option<bool>) {
        *self.held.lock().unwrap() = held;
    }

    pub fn set_stall(&self, stall: Duration) {
        *self.stall.lock().unwrap() = stall;
    }

    /// Number of key state queries started so far.
    pub fn key_queries(&self) -> usize {
        self.key_queries.load(Ordering::SeqCst)
    }
}

impl InputProbe for FakeProbe {
    fn cursor_position(&self) -> Option<Point> {
        *self.cursor.lock().unwrap()
    }

    fn input_held(&self) -> Option<bool> {
        self.key_queries.fetch_add(1, Ordering::SeqCst);
        let stall = *self.stall.lock().unwrap();
        if !stall.is_zero() {
            thread::sleep(stall);
        }
        *self.held.lock().unwrap()
    }
}

/// Executor that records every action instead of running it.
#[derive(Default)]
pub struct RecordingExecutor {
    actions: Mutex<Vec<Action>>,
}

impl RecordingExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.actions.lock().unwrap().len()
    }
}

impl ActionExecutor for RecordingExecutor {
    fn execute(&self, action: &Action) {
        self.actions.lock().unwrap().push(action.clone());
    }
}

pub const FULL_HD: Rect = Rect::new(0, 0, 1920, 1080);

/// Dispatcher over a 1920x1080 display.
pub fn dispatcher(
    config: &HotCornersConfig,
    probe: Arc<FakeProbe>,
    executor: Arc<RecordingExecutor>,
) -> HookDispatcher {
    let zones = compute_zones(config.corner_size, FULL_HD);
    HookDispatcher::new(config, zones, probe, executor)
}

/// Config with a short dwell so timing tests stay fast.
pub fn quick_dwell_config(dwell_time_ms: u64) -> HotCornersConfig {
    HotCornersConfig {
        dwell_time_ms,
        ..Default::default()
    }
}

/// Poll `cond` until it holds or `timeout` elapses.
pub fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    cond()
}
