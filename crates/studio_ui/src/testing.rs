//! Virtual-clock scheduler for tests.
//!
//! Time only moves when [`ManualScheduler::advance`] is called. Due tasks run
//! in deadline order (ties in scheduling order), and the clock reads the task's
//! deadline while it runs, so tasks may schedule further work.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::timer::Scheduler;

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: u64,
    period: Option<u64>,
    job: Option<Job>,
}

#[derive(Default)]
struct Inner {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

/// A [`Scheduler`] driven by an explicit virtual clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

/// Handle returned by [`ManualScheduler`]. Dropping it cancels the task.
pub struct ManualHandle {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.entries.remove(&self.id);
            }
        }
    }
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Number of scheduled (not yet cancelled or finished) tasks.
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Move the clock forward by `ms`, running every task that becomes due.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        while let Some((id, job)) = self.take_due(target) {
            match job {
                Job::Once(task) => task(),
                Job::Repeat(mut task) => {
                    task();
                    let mut inner = self.inner.borrow_mut();
                    if let Some(entry) = inner.entries.get_mut(&id) {
                        let period = entry.period.unwrap_or(1);
                        entry.due += period;
                        entry.job = Some(Job::Repeat(task));
                    }
                }
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn take_due(&self, target: u64) -> Option<(u64, Job)> {
        let mut inner = self.inner.borrow_mut();
        let (id, due) = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.job.is_some() && entry.due <= target)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, entry)| (*id, entry.due))?;

        inner.now = due;
        let entry = inner.entries.get_mut(&id)?;
        let job = entry.job.take()?;
        if entry.period.is_none() {
            inner.entries.remove(&id);
        }
        Some((id, job))
    }

    fn insert(&self, delay: u64, period: Option<u64>, job: Job) -> ManualHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + delay;
        inner.entries.insert(
            id,
            Entry {
                due,
                period,
                job: Some(job),
            },
        );
        ManualHandle {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

impl Scheduler for ManualScheduler {
    type Timeout = ManualHandle;
    type Interval = ManualHandle;

    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Timeout {
        self.insert(u64::from(delay_ms), None, Job::Once(task))
    }

    fn interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Interval {
        let period = u64::from(period_ms.max(1));
        self.insert(period, Some(period), Job::Repeat(task))
    }
}
