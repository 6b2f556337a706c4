//! Browser runtime: owns the app and carries out its effects.
//!
//! DOM listeners and request futures feed messages into [`Runtime::dispatch`].
//! The app is borrowed only while `update` runs, so effects that lead to new
//! messages (timers, requests) never observe a held borrow.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use studio_ui::dom::{self, Listeners};
use studio_ui::{
    BrowserScheduler, Debouncer, DomError, KeyPress, KeyedTimers, Repeater, ScrollDirection,
    SideEffect,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::api::client;
use crate::app::StudioApp;
use crate::config::StudioConfig;
use crate::constants::AUTO_SCROLL;
use crate::message::{
    ActionMessage, ControlMessage, DragMessage, Effect, Message, UploadMessage,
};
use crate::notification::NotificationHost;
use crate::ui_constants::ids;
use crate::views::{self, filter_list, panes, DomNotificationView};
use crate::wasm_file;

/// The running application in the page.
pub struct Runtime {
    app: RefCell<StudioApp>,
    dispatch: SideEffect<Message>,
    list: Element,
    apply: Debouncer<BrowserScheduler>,
    restage: KeyedTimers<BrowserScheduler, String>,
    auto_scroll: Repeater<BrowserScheduler>,
    notifications: NotificationHost<BrowserScheduler, DomNotificationView>,
    pending_file: RefCell<Option<File>>,
    placeholder: RefCell<Option<Element>>,
    listeners: RefCell<Listeners>,
}

impl Runtime {
    /// Render the filter list, register listeners and start handling events.
    pub fn mount(config: &StudioConfig) -> Result<Rc<Self>, DomError> {
        let list = dom::by_id::<Element>(ids::FILTER_LIST)?;
        let app = StudioApp::new(config);
        let layouts = views::board_layout(app.board());
        filter_list::render(&list, &layouts)?;

        let runtime = Rc::new_cyclic(|weak: &Weak<Runtime>| {
            let weak = weak.clone();
            Runtime {
                app: RefCell::new(app),
                dispatch: SideEffect::new(move |msg| {
                    if let Some(runtime) = weak.upgrade() {
                        runtime.dispatch(msg);
                    }
                }),
                list,
                apply: Debouncer::new(BrowserScheduler, config.preferences.debounce_ms),
                restage: KeyedTimers::new(BrowserScheduler),
                auto_scroll: Repeater::new(BrowserScheduler),
                notifications: NotificationHost::new(BrowserScheduler, DomNotificationView),
                pending_file: RefCell::new(None),
                placeholder: RefCell::new(None),
                listeners: RefCell::new(Listeners::new()),
            }
        });

        let mut listeners = filter_list::wire(&runtime.list, &layouts, &runtime.dispatch);
        runtime.wire_page(&mut listeners)?;
        log::info!("🎮 {} event listeners initialized", listeners.count());
        *runtime.listeners.borrow_mut() = listeners;

        panes::set_controls_enabled(false);
        log::info!("✅ Application initialized successfully");
        Ok(runtime)
    }

    /// Listeners outside the filter list: upload input, buttons, shortcuts.
    fn wire_page(self: &Rc<Self>, listeners: &mut Listeners) -> Result<(), DomError> {
        let input = dom::by_id::<HtmlInputElement>(ids::IMAGE_INPUT)?;
        let (weak, picker) = (Rc::downgrade(self), input.clone());
        listeners.on(&input, "change", move |_| {
            let (Some(runtime), Some(file)) = (weak.upgrade(), wasm_file::selected_file(&picker))
            else {
                return;
            };
            let candidate = wasm_file::candidate(&file);
            *runtime.pending_file.borrow_mut() = Some(file);
            runtime.dispatch(UploadMessage::FileChosen(candidate).into());
        });

        let buttons = [
            (ids::RESET_BUTTON, ActionMessage::Reset),
            (ids::DISCARD_BUTTON, ActionMessage::Discard),
        ]
        .into_iter()
        .chain(ids::DOWNLOAD_BUTTONS.iter().map(|id| (*id, ActionMessage::Download)));
        for (id, action) in buttons {
            let Some(button) = dom::try_by_id::<HtmlElement>(id) else {
                log::debug!("No #{} on this page", id);
                continue;
            };
            let dispatch = self.dispatch.clone();
            listeners.on(&button, "click", move |_| dispatch.emit(action.clone().into()));
        }

        let weak = Rc::downgrade(self);
        listeners.on_active(&dom::document()?, "keydown", move |event| {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            let Some(press) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(KeyPress::from_event)
            else {
                return;
            };
            if runtime.app.borrow().handles_key(&press) {
                event.prevent_default();
                runtime.dispatch(ActionMessage::Key(press).into());
            }
        });
        Ok(())
    }

    /// Update the app and carry out the resulting effects.
    pub fn dispatch(&self, message: Message) {
        let effects = self.app.borrow_mut().update(message);
        for effect in effects {
            if let Err(e) = self.run(effect) {
                log::error!("❌ Failed to update page: {}", e);
            }
        }
    }

    fn run(&self, effect: Effect) -> Result<(), DomError> {
        match effect {
            Effect::Notify(notification) => self.notifications.show(&notification),
            Effect::SetLoading(show) => panes::set_loading(show),
            Effect::SetControlsEnabled(enabled) => panes::set_controls_enabled(enabled),

            Effect::Upload { url } => {
                let Some(file) = self.pending_file.borrow_mut().take() else {
                    log::warn!("Upload requested without a selected file");
                    return Ok(());
                };
                let dispatch = self.dispatch.clone();
                spawn_local(async move {
                    let result = client::upload(&url, &file).await;
                    dispatch.emit(UploadMessage::Finished(result).into());
                });
            }
            Effect::ShowOriginal { url } => panes::show_original(&url)?,
            Effect::ClearOriginal => panes::clear_original()?,
            Effect::ShowResult { url } => panes::show_result(&url)?,
            Effect::ClearResult => panes::clear_result()?,

            Effect::Readout(readout) => panes::show_readout(&readout, false)?,
            Effect::SetActive { filter, active } => panes::set_active(&filter, active)?,
            Effect::ScheduleApply => {
                let dispatch = self.dispatch.clone();
                self.apply
                    .call(move || dispatch.emit(ControlMessage::Apply.into()));
            }
            Effect::CancelApply => self.apply.cancel(),
            Effect::SendFilters { url, body } => {
                let dispatch = self.dispatch.clone();
                spawn_local(async move {
                    let result = client::update_filters(&url, &body).await;
                    dispatch.emit(ControlMessage::Applied(result).into());
                });
            }

            Effect::MarkDragging { filter, dragging } => {
                if dragging {
                    let placeholder = filter_list::begin_drag(&self.list, &filter)?;
                    *self.placeholder.borrow_mut() = Some(placeholder);
                } else {
                    filter_list::end_drag(&self.list, &filter);
                    if let Some(placeholder) = self.placeholder.borrow_mut().take() {
                        placeholder.remove();
                    }
                }
            }
            Effect::MoveItem { filter, before } => {
                filter_list::move_item(&self.list, &filter, before.as_deref())?
            }
            Effect::AutoScroll(direction) => self.set_auto_scroll(direction),
            Effect::SendOrder { url, body } => {
                let dispatch = self.dispatch.clone();
                spawn_local(async move {
                    let result = client::update_order(&url, &body).await;
                    dispatch.emit(DragMessage::OrderSaved(result).into());
                });
            }

            Effect::Restage {
                filter,
                readouts,
                delay_ms,
            } => {
                let key = filter.clone();
                self.restage.schedule(key, delay_ms, move || {
                    if let Err(e) = panes::restage(&filter, &readouts) {
                        log::warn!("Failed to reset {}: {}", filter, e);
                    }
                });
            }
            Effect::CancelRestage(Some(filter)) => self.restage.cancel(&filter),
            Effect::CancelRestage(None) => self.restage.cancel_all(),
            Effect::SendReset { url, file_name } => {
                let dispatch = self.dispatch.clone();
                spawn_local(async move {
                    let result = client::reset_filters(&url, &file_name).await;
                    dispatch.emit(ActionMessage::ResetFinished(result).into());
                });
            }
            Effect::SendDiscard { url } => {
                let dispatch = self.dispatch.clone();
                spawn_local(async move {
                    let result = client::discard(&url).await;
                    dispatch.emit(ActionMessage::Discarded(result).into());
                });
            }
            Effect::Navigate { url } => wasm_file::trigger_download(&url)?,
        }
        Ok(())
    }

    /// Stop edge scrolling and restart it in `direction`.
    fn set_auto_scroll(&self, direction: Option<ScrollDirection>) {
        self.auto_scroll.stop();
        let (Some(direction), Some(section)) = (direction, panes::controls_section()) else {
            return;
        };
        self.auto_scroll.start(AUTO_SCROLL.period_ms, move || {
            let top = AUTO_SCROLL.step(
                direction,
                f64::from(section.scroll_top()),
                f64::from(section.scroll_height()),
                f64::from(section.client_height()),
            );
            section.set_scroll_top(top as i32);
        });
    }
}
