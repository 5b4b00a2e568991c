//! Cancellable deferred tasks.
//!
//! The storefront fakes network latency with fixed-duration timers. The
//! raw timer has a hazard: if the view that started it goes away, the
//! callback still fires against whatever state is left. [`Deferred`]
//! makes the deferral explicit and abandonable: cancel it (or just drop
//! it) and the result is discarded instead of landing on a dead view.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A task scheduled to run once after a bounded delay.
///
/// The task runs on a background thread after `delay` elapses, unless the
/// handle was cancelled first. Cancellation is checked once, at the
/// deadline: a task already past its check runs to completion, but its
/// result is only observable through this handle, so an abandoned handle
/// still discards it.
#[derive(Debug)]
pub struct Deferred<T> {
    cancelled: Arc<AtomicBool>,
    rx: Receiver<T>,
}

/// Schedule `task` to run after `delay`.
pub fn defer<T, F>(delay: Duration, task: F) -> Deferred<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        thread::sleep(delay);
        if flag.load(Ordering::SeqCst) {
            return;
        }
        // The receiver may already be dropped; the result is discarded.
        let _ = tx.send(task());
    });

    Deferred { cancelled, rx }
}

impl<T> Deferred<T> {
    /// Abandon the task. Its closure will not run if the deadline has
    /// not passed yet; an already-delivered result stays discarded.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether this handle was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Take the result if it has been delivered, without blocking.
    pub fn try_take(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the task completes and take its result.
    ///
    /// Returns `None` if the task was cancelled before it ran.
    pub fn wait(self) -> Option<T> {
        self.rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_after_the_delay() {
        let task = defer(Duration::from_millis(10), || 42);
        assert_eq!(task.wait(), Some(42));
    }

    #[test]
    fn cancel_before_deadline_discards_the_task() {
        let task = defer(Duration::from_millis(50), || 42);
        task.cancel();
        assert!(task.is_cancelled());
        assert_eq!(task.wait(), None);
    }

    #[test]
    fn try_take_is_none_until_delivery() {
        let task = defer(Duration::from_millis(50), || "done");
        assert_eq!(task.try_take(), None);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(task.try_take(), Some("done"));
    }

    #[test]
    fn dropping_the_handle_abandons_the_result() {
        // The worker's send fails quietly; nothing panics.
        let task = defer(Duration::from_millis(5), || 1);
        drop(task);
        thread::sleep(Duration::from_millis(30));
    }
}
