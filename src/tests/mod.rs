//! Flow tests for the filter studio.
//!
//! These drive [`StudioApp`] the way the browser runtime does: effects that
//! schedule work go through timers on a virtual clock, and everything else is
//! recorded for inspection.

mod action_tests;
mod drag_tests;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use studio_ui::testing::ManualScheduler;
use studio_ui::{Debouncer, KeyedTimers};

use crate::api::UploadReply;
use crate::app::StudioApp;
use crate::config::StudioConfig;
use crate::message::{ControlMessage, Effect, Message, UploadMessage};
use crate::notification::{Notification, NotificationKind};
use crate::upload::UploadCandidate;

/// Server handle used by the flow tests.
const FILE: &str = "7f3a_cat.png";

/// App plus the pieces of the runtime that feed messages back into it.
struct Harness {
    app: StudioApp,
    clock: ManualScheduler,
    apply: Debouncer<ManualScheduler>,
    restage: KeyedTimers<ManualScheduler, String>,
    /// Filters whose restage timer has fired, in firing order.
    restaged: Rc<RefCell<Vec<String>>>,
    inbox: Rc<RefCell<VecDeque<Message>>>,
    effects: Vec<Effect>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(&StudioConfig::default())
    }

    fn with_config(config: &StudioConfig) -> Self {
        let clock = ManualScheduler::new();
        Self {
            app: StudioApp::new(config),
            apply: Debouncer::new(clock.clone(), config.preferences.debounce_ms),
            restage: KeyedTimers::new(clock.clone()),
            restaged: Rc::new(RefCell::new(Vec::new())),
            clock,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            effects: Vec::new(),
        }
    }

    /// Harness with an image already uploaded as [`FILE`].
    fn uploaded() -> Self {
        let mut harness = Self::new();
        harness.upload(FILE);
        harness.take();
        harness
    }

    fn upload(&mut self, file_name: &str) {
        self.send(UploadMessage::FileChosen(UploadCandidate::new(
            "cat.png",
            "image/png",
            2048,
        )));
        self.send(UploadMessage::Finished(Ok(reply(file_name))));
    }

    fn send(&mut self, msg: impl Into<Message>) {
        self.handle(msg.into());
        self.drain();
    }

    /// Move the virtual clock and process whatever timers produced.
    fn advance(&mut self, ms: u64) {
        self.clock.advance(ms);
        self.drain();
    }

    fn drain(&mut self) {
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            match next {
                Some(msg) => self.handle(msg),
                None => break,
            }
        }
    }

    fn handle(&mut self, msg: Message) {
        for effect in self.app.update(msg) {
            match effect {
                Effect::ScheduleApply => {
                    let inbox = self.inbox.clone();
                    self.apply.call(move || {
                        inbox.borrow_mut().push_back(ControlMessage::Apply.into())
                    });
                }
                Effect::CancelApply => self.apply.cancel(),
                Effect::Restage {
                    ref filter,
                    delay_ms,
                    ..
                } => {
                    let (restaged, name) = (self.restaged.clone(), filter.clone());
                    self.restage.schedule(filter.clone(), delay_ms, move || {
                        restaged.borrow_mut().push(name)
                    });
                }
                Effect::CancelRestage(Some(ref filter)) => self.restage.cancel(filter),
                Effect::CancelRestage(None) => self.restage.cancel_all(),
                _ => {}
            }
            self.effects.push(effect);
        }
    }

    /// Recorded effects since the last call.
    fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    fn requests(&self) -> Vec<&Effect> {
        self.effects.iter().filter(|e| is_request(e)).collect()
    }

    fn notifications(&self) -> Vec<&Notification> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }
}

fn reply(file_name: &str) -> UploadReply {
    UploadReply {
        success: "true".to_string(),
        file_name: Some(file_name.to_string()),
        message: "Image uploaded.".to_string(),
    }
}

fn is_request(effect: &Effect) -> bool {
    matches!(
        effect,
        Effect::Upload { .. }
            | Effect::SendFilters { .. }
            | Effect::SendOrder { .. }
            | Effect::SendReset { .. }
            | Effect::SendDiscard { .. }
    )
}

fn notice(kind: NotificationKind, message: &str, duration_ms: u32) -> Effect {
    Effect::Notify(Notification::new(kind, message).duration(duration_ms))
}
