//! Fire-and-forget action queue backed by an mpsc channel.
//!
//! The queue provides the "execute and don't wait" half of action dispatch:
//! - The hook thread enqueues actions via `ActionQueue::execute()` and
//!   returns immediately
//! - A single worker thread receives them in order and runs the handler
//!
//! Launching a program can block for a long time (shell extensions, network
//! paths), so it never happens on the hook thread.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::handlers::ActionExecutor;
use crate::model::Action;

/// Sending half of the worker channel plus the worker itself.
///
/// Dropping the queue closes the channel; the worker finishes the actions
/// already queued and exits.
pub struct ActionQueue {
    sender: Option<Sender<Action>>,
    worker: Option<JoinHandle<()>>,
}

impl ActionQueue {
    /// Spawn the worker thread.
    ///
    /// `init` runs once on the worker before the first action (per-thread
    /// setup such as COM initialisation); `handler` runs once per action.
    pub fn spawn<I, H>(init: I, handler: H) -> std::io::Result<Self>
    where
        I: FnOnce() + Send + 'static,
        H: Fn(Action) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<Action>();
        let worker = thread::Builder::new()
            .name("hotcorners-actions".into())
            .spawn(move || {
                init();
                for action in receiver {
                    debug!(%action, "running action");
                    handler(action);
                }
                debug!("action worker stopped");
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }
}

impl ActionExecutor for ActionQueue {
    fn execute(&self, action: &Action) {
        // Receiver gone means the worker died; nothing left to do.
        if let Some(sender) = &self.sender {
            let _ = sender.send(action.clone());
        }
    }
}

impl Drop for ActionQueue {
    fn drop(&mut self) {
        // Close our end first so the worker's loop can end.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("action worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_queue() -> (ActionQueue, Arc<Mutex<Vec<Action>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let queue = ActionQueue::spawn(|| {}, move |a| sink.lock().unwrap().push(a)).unwrap();
        (queue, seen)
    }

    #[test]
    fn test_actions_run_in_order() {
        let (queue, seen) = recording_queue();
        queue.execute(&Action::launch("a"));
        queue.execute(&Action::TaskView);
        queue.execute(&Action::launch("b"));
        drop(queue);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Action::launch("a"), Action::TaskView, Action::launch("b")]
        );
    }

    #[test]
    fn test_drop_drains_pending_actions() {
        let (queue, seen) = recording_queue();
        for i in 0..50 {
            queue.execute(&Action::launch(format!("t{}", i)));
        }
        drop(queue);
        assert_eq!(seen.lock().unwrap().len(), 50);
    }

    #[test]
    fn test_init_runs_before_handler() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let init_log = Arc::clone(&order);
        let run_log = Arc::clone(&order);
        let queue = ActionQueue::spawn(
            move || init_log.lock().unwrap().push("init"),
            move |_| run_log.lock().unwrap().push("run"),
        )
        .unwrap();
        queue.execute(&Action::TaskView);
        drop(queue);
        assert_eq!(*order.lock().unwrap(), vec!["init", "run"]);
    }

    #[test]
    fn test_execute_does_not_wait_for_handler() {
        let queue = ActionQueue::spawn(
            || {},
            |_| std::thread::sleep(std::time::Duration::from_millis(200)),
        )
        .unwrap();
        let start = std::time::Instant::now();
        queue.execute(&Action::TaskView);
        assert!(start.elapsed() < std::time::Duration::from_millis(100));
    }

    #[test]
    fn test_dead_worker_is_tolerated() {
        let queue = ActionQueue::spawn(|| {}, |_| panic!("handler failed")).unwrap();
        queue.execute(&Action::TaskView);
        std::thread::sleep(std::time::Duration::from_millis(50));
        // Receiver is gone; sending and dropping must both still return.
        queue.execute(&Action::TaskView);
        drop(queue);
    }
}
