//! Transient toast notifications.
//!
//! Only one notification is on screen at a time: showing a new one removes the
//! current element and cancels its timers. The element is revealed shortly
//! after mounting, hidden when its duration elapses and removed once the hide
//! transition has had time to run.

use std::cell::RefCell;
use std::rc::Rc;

use studio_ui::Scheduler;

use crate::constants::notification::{DEFAULT_DURATION_MS, REMOVE_DELAY_MS, REVEAL_DELAY_MS};

/// Kind of notification, controlling icon and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Icon prefixed to the message.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Info => "ℹ️",
            NotificationKind::Warning => "⚠️",
        }
    }

    /// Modifier class next to `notification`.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }
}

/// A message to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration_ms: u32,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Override how long the notification stays visible.
    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Text rendered into the element: icon, space, message.
    pub fn text(&self) -> String {
        format!("{} {}", self.kind.icon(), self.message)
    }
}

/// Rendering surface for notifications.
pub trait NotificationView {
    /// Handle to a mounted notification element.
    type Node: Clone + 'static;

    /// Remove every notification element currently on the page.
    fn clear_all(&self);
    /// Create and attach an element for `notification`.
    fn mount(&self, notification: &Notification) -> Option<Self::Node>;
    /// Start the reveal transition.
    fn reveal(&self, node: &Self::Node);
    /// Start the hide transition.
    fn hide(&self, node: &Self::Node);
    /// Detach the element.
    fn remove(&self, node: &Self::Node);
}

/// Shows notifications through a [`NotificationView`], one at a time.
pub struct NotificationHost<S: Scheduler, V: NotificationView + 'static> {
    scheduler: S,
    view: Rc<V>,
    timers: RefCell<Vec<S::Timeout>>,
}

impl<S: Scheduler, V: NotificationView + 'static> NotificationHost<S, V> {
    pub fn new(scheduler: S, view: V) -> Self {
        Self {
            scheduler,
            view: Rc::new(view),
            timers: RefCell::new(Vec::new()),
        }
    }

    /// Replace whatever is showing with `notification`.
    pub fn show(&self, notification: &Notification) {
        let mut timers = self.timers.borrow_mut();
        timers.clear();
        self.view.clear_all();

        log::info!(
            "📢 Notification [{}]: {}",
            notification.kind.css_class(),
            notification.message
        );

        let Some(node) = self.view.mount(notification) else {
            return;
        };

        let (view, n) = (self.view.clone(), node.clone());
        timers.push(
            self.scheduler
                .timeout(REVEAL_DELAY_MS, Box::new(move || view.reveal(&n))),
        );

        let (view, n) = (self.view.clone(), node.clone());
        timers.push(self.scheduler.timeout(
            notification.duration_ms,
            Box::new(move || view.hide(&n)),
        ));

        let view = self.view.clone();
        timers.push(self.scheduler.timeout(
            notification.duration_ms.saturating_add(REMOVE_DELAY_MS),
            Box::new(move || view.remove(&node)),
        ));
    }

    /// The view notifications are rendered into.
    pub fn view(&self) -> &V {
        &self.view
    }
}
