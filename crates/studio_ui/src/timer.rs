//! Timer primitives: a scheduler seam, a debouncer, keyed one-shot timers and
//! a repeating timer.
//!
//! Browser timers are reached through the [`Scheduler`] trait so the same
//! debouncing and auto-repeat logic runs against `setTimeout`/`setInterval` in
//! the browser and against a virtual clock in tests. Handles cancel their task
//! when dropped, which is how both `gloo-timers` and the test scheduler behave.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

/// Source of one-shot and repeating timers.
pub trait Scheduler {
    /// Handle to a pending one-shot task. Dropping it cancels the task.
    type Timeout;
    /// Handle to a repeating task. Dropping it stops the repetition.
    type Interval;

    /// Run `task` once after `delay_ms` milliseconds.
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Timeout;

    /// Run `task` every `period_ms` milliseconds until the handle is dropped.
    fn interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Interval;
}

/// Delays a task until calls have been quiet for a fixed interval.
///
/// Every [`call`](Self::call) cancels the previously pending task before
/// scheduling the new one, so a burst of calls closer together than the delay
/// results in exactly one execution: the last task, `delay_ms` after the last
/// call.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Timeout>>,
}

impl<S: Scheduler> Debouncer<S> {
    /// Create a debouncer with the given quiet interval.
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    /// Schedule `task`, replacing any task that has not fired yet.
    pub fn call(&self, task: impl FnOnce() + 'static) {
        let mut pending = self.pending.borrow_mut();
        // Cancel first so two timers never overlap.
        drop(pending.take());
        *pending = Some(self.scheduler.timeout(self.delay_ms, Box::new(task)));
    }

    /// Drop the pending task, if any.
    pub fn cancel(&self) {
        drop(self.pending.borrow_mut().take());
    }
}

/// One-shot timers keyed by `K`.
///
/// Scheduling a key replaces that key's pending task, and single keys can be
/// cancelled while the others keep running.
pub struct KeyedTimers<S: Scheduler, K> {
    scheduler: S,
    pending: RefCell<HashMap<K, S::Timeout>>,
}

impl<S: Scheduler, K: Eq + Hash> KeyedTimers<S, K> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: RefCell::new(HashMap::new()),
        }
    }

    /// Run `task` after `delay_ms`, replacing any pending task for `key`.
    pub fn schedule(&self, key: K, delay_ms: u32, task: impl FnOnce() + 'static) {
        let timeout = self.scheduler.timeout(delay_ms, Box::new(task));
        let replaced = self.pending.borrow_mut().insert(key, timeout);
        drop(replaced);
    }

    /// Drop the pending task for `key`, if any.
    pub fn cancel(&self, key: &K) {
        let removed = self.pending.borrow_mut().remove(key);
        drop(removed);
    }

    /// Drop every pending task.
    pub fn cancel_all(&self) {
        let removed = std::mem::take(&mut *self.pending.borrow_mut());
        drop(removed);
    }
}

/// A restartable repeating timer holding at most one interval.
pub struct Repeater<S: Scheduler> {
    scheduler: S,
    active: RefCell<Option<S::Interval>>,
}

impl<S: Scheduler> Repeater<S> {
    /// Create a stopped repeater.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            active: RefCell::new(None),
        }
    }

    /// Stop any running interval and start `task` every `period_ms`.
    pub fn start(&self, period_ms: u32, task: impl FnMut() + 'static) {
        let mut active = self.active.borrow_mut();
        drop(active.take());
        *active = Some(self.scheduler.interval(period_ms, Box::new(task)));
    }

    /// Stop the running interval, if any.
    pub fn stop(&self) {
        drop(self.active.borrow_mut().take());
    }

    /// Whether an interval is currently running.
    pub fn is_running(&self) -> bool {
        self.active.borrow().is_some()
    }
}

/// Scheduler backed by the browser's `setTimeout`/`setInterval`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    type Timeout = gloo_timers::callback::Timeout;
    type Interval = gloo_timers::callback::Interval;

    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Timeout {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }

    fn interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Interval {
        gloo_timers::callback::Interval::new(period_ms, task)
    }
}
