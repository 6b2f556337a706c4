//! Message handlers for the filter studio.
//!
//! Each handler processes one category of messages and returns the effects
//! the browser shell should carry out, keeping `StudioApp::update` small.

use studio_ui::{insertion_anchor, AutoScroll, DragState, ItemBounds};

use crate::api::{cache_buster, ApiError, ApiRoutes, FilterUpdate, OrderUpdate, ServerReply};
use crate::constants::notification::{APPLYING_MS, DRAG_HINT_MS, ORDER_DONE_MS};
use crate::constants::RESET_STAGGER_MS;
use crate::keybindings::{KeyBindings, ShortcutAction};
use crate::message::{
    ActionMessage, ControlMessage, DragMessage, Effect, SliderReadout, UploadMessage,
};
use crate::model::{FilterBoard, FilterEntry, Session};
use crate::notification::{Notification, NotificationKind};
use crate::upload;

const NO_IMAGE: &str = "Please upload an image first.";

/// Read-only settings shared by the handlers.
pub struct Env<'a> {
    pub routes: &'a ApiRoutes,
    pub notification_ms: u32,
    pub auto_scroll: AutoScroll,
}

impl Env<'_> {
    /// Notification with the configured default duration.
    fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> Effect {
        Effect::Notify(Notification::new(kind, message).duration(self.notification_ms))
    }

    /// Notification with a flow-specific duration.
    fn notify_for(&self, kind: NotificationKind, message: impl Into<String>, ms: u32) -> Effect {
        Effect::Notify(Notification::new(kind, message).duration(ms))
    }

    fn show_result(&self, file_name: &str) -> Effect {
        Effect::ShowResult {
            url: self.routes.result_image(file_name, cache_buster()),
        }
    }
}

/// Handle upload messages.
pub fn handle_upload(msg: UploadMessage, session: &mut Session, env: &Env<'_>) -> Vec<Effect> {
    match msg {
        UploadMessage::FileChosen(candidate) => match upload::validate(&candidate) {
            Ok(format) => {
                log::info!("📤 Uploading image: {} ({:?})", candidate.name, format);
                vec![
                    Effect::SetLoading(true),
                    env.notify(NotificationKind::Info, "Uploading image..."),
                    Effect::Upload {
                        url: env.routes.upload(),
                    },
                ]
            }
            Err(e) => {
                log::warn!("Rejected upload of {}: {}", candidate.name, e);
                vec![env.notify(NotificationKind::Error, e.to_string())]
            }
        },
        UploadMessage::Finished(result) => {
            let mut effects = vec![Effect::SetLoading(false)];
            match result.and_then(|reply| reply.into_result()) {
                Ok((file_name, message)) => {
                    if session.is_active() {
                        log::info!("🖼️ Replacing the current image");
                    }
                    log::info!("✅ Image uploaded successfully: {}", file_name);
                    effects.extend([
                        env.notify(NotificationKind::Success, message),
                        Effect::ShowOriginal {
                            url: env.routes.original_image(&file_name),
                        },
                        Effect::ClearResult,
                        Effect::SetControlsEnabled(true),
                    ]);
                    session.begin(file_name);
                }
                Err(ApiError::Rejected(message)) => {
                    log::error!("❌ Upload failed: {}", message);
                    effects.push(env.notify(NotificationKind::Error, message));
                }
                Err(e) => {
                    log::error!("❌ Upload error: {}", e);
                    effects.push(env.notify(
                        NotificationKind::Error,
                        format!("An error occurred during upload: {e}"),
                    ));
                }
            }
            effects
        }
    }
}

/// Handle checkbox and slider messages.
pub fn handle_control(
    msg: ControlMessage,
    board: &mut FilterBoard,
    session: &Session,
    env: &Env<'_>,
) -> Vec<Effect> {
    match msg {
        ControlMessage::SliderInput { filter, param, raw } => {
            let Some(spec) = board.entry(&filter).and_then(|e| e.def.param(param)).copied()
            else {
                log::warn!("Slider input for unknown control {}/{:?}", filter, param);
                return Vec::new();
            };
            let Some(value) = spec
                .range
                .parse(&raw)
                .and_then(|v| board.set_value(&filter, param, v))
            else {
                log::warn!("Ignoring unparsable slider value {:?} for {}", raw, filter);
                return Vec::new();
            };
            log::debug!("🎚️ {} {:?} = {}", filter, param, value);
            vec![
                Effect::CancelRestage(Some(filter.clone())),
                Effect::Readout(SliderReadout::new(&filter, param, &spec, value)),
                Effect::ScheduleApply,
            ]
        }
        ControlMessage::Toggled { filter, enabled } => {
            if !board.set_enabled(&filter, enabled) {
                log::warn!("Toggle for unknown filter {}", filter);
                return Vec::new();
            }
            log::debug!("☑️ {} {}", filter, if enabled { "on" } else { "off" });
            // A user change outranks a restage still pending from a reset.
            vec![
                Effect::CancelRestage(Some(filter.clone())),
                Effect::SetActive {
                    filter,
                    active: enabled,
                },
                Effect::ScheduleApply,
            ]
        }
        ControlMessage::Apply => {
            let Some(file_name) = session.current_file_name() else {
                log::debug!("No image uploaded, skipping filter update");
                return Vec::new();
            };
            let labels = board.active_labels();
            log::info!("🎛️ Updating filters: {:?}", labels);

            let mut effects = Vec::new();
            if !labels.is_empty() {
                effects.push(env.notify_for(
                    NotificationKind::Info,
                    format!("Applying: {}", labels.join(", ")),
                    APPLYING_MS,
                ));
            }
            effects.push(Effect::SendFilters {
                url: env.routes.filter_update(file_name),
                body: FilterUpdate::from_board(board),
            });
            effects
        }
        ControlMessage::Applied(result) => match result.and_then(ServerReply::into_result) {
            Ok(_) => {
                log::info!("✅ Filters applied successfully");
                session
                    .current_file_name()
                    .map(|file_name| vec![env.show_result(file_name)])
                    .unwrap_or_default()
            }
            Err(ApiError::Rejected(message)) => {
                log::error!("❌ Filter application failed: {}", message);
                vec![env.notify(NotificationKind::Error, message)]
            }
            Err(e) => {
                log::error!("❌ Filter update error: {}", e);
                vec![env.notify(NotificationKind::Error, "Failed to apply filters")]
            }
        },
    }
}

/// Handle drag-and-drop reorder messages.
pub fn handle_drag(
    msg: DragMessage,
    drag: &mut DragState<String>,
    board: &mut FilterBoard,
    session: &Session,
    env: &Env<'_>,
) -> Vec<Effect> {
    match msg {
        DragMessage::Started(filter) => {
            if board.entry(&filter).is_none() {
                return Vec::new();
            }
            log::debug!("✊ Drag started: {}", filter);
            drag.start(filter.clone());
            vec![
                Effect::MarkDragging {
                    filter,
                    dragging: true,
                },
                env.notify_for(
                    NotificationKind::Info,
                    "Reordering filters...",
                    DRAG_HINT_MS,
                ),
            ]
        }
        DragMessage::Over {
            pointer_y,
            items,
            viewport,
        } => {
            let Some(source) = drag.source().cloned() else {
                return Vec::new();
            };

            let others: Vec<&(String, ItemBounds)> =
                items.iter().filter(|(name, _)| *name != source).collect();
            let bounds: Vec<ItemBounds> = others.iter().map(|(_, b)| *b).collect();
            let anchor = insertion_anchor(&bounds, pointer_y).map(|i| others[i].0.clone());

            let mut effects = Vec::new();
            if board.move_before(&source, anchor.as_deref()) {
                effects.push(Effect::MoveItem {
                    filter: source,
                    before: anchor,
                });
            }
            effects.push(Effect::AutoScroll(
                env.auto_scroll.direction(viewport, pointer_y),
            ));
            effects
        }
        DragMessage::Ended { order } => {
            let Some(source) = drag.end() else {
                return Vec::new();
            };
            let mut effects = vec![
                Effect::MarkDragging {
                    filter: source,
                    dragging: false,
                },
                Effect::AutoScroll(None),
            ];

            if let Err(e) = board.set_order(&order) {
                log::warn!("Page order rejected, keeping {:?}: {}", board.order(), e);
            }

            if let Some(file_name) = session.current_file_name() {
                let order = board.order();
                log::info!("🔄 Updating filter order: {:?}", order);
                effects.push(Effect::SendOrder {
                    url: env.routes.filter_order(file_name),
                    body: OrderUpdate { order },
                });
            }

            effects.push(env.notify_for(
                NotificationKind::Success,
                "Filter order updated",
                ORDER_DONE_MS,
            ));
            effects
        }
        DragMessage::OrderSaved(result) => match result.and_then(ServerReply::into_result) {
            Ok(_) => {
                log::info!("✅ Filter order updated successfully");
                session
                    .current_file_name()
                    .map(|file_name| vec![env.show_result(file_name)])
                    .unwrap_or_default()
            }
            Err(e) => {
                log::error!("❌ Failed to update filter order: {}", e);
                Vec::new()
            }
        },
    }
}

/// Handle reset, download, discard and shortcut messages.
pub fn handle_action(
    msg: ActionMessage,
    board: &mut FilterBoard,
    session: &mut Session,
    keybindings: &KeyBindings,
    env: &Env<'_>,
) -> Vec<Effect> {
    match msg {
        ActionMessage::Reset => {
            let Some(file_name) = session.current_file_name() else {
                return vec![env.notify(NotificationKind::Error, NO_IMAGE)];
            };
            log::info!("🔄 Resetting all filters...");
            board.reset_to_defaults();

            let mut effects = vec![Effect::CancelApply, Effect::CancelRestage(None)];
            effects.extend(
                board
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| restage(entry, index as u32 * RESET_STAGGER_MS)),
            );
            effects.extend([
                Effect::SetLoading(true),
                Effect::SendReset {
                    url: env.routes.filter_reset(),
                    file_name: file_name.to_string(),
                },
            ]);
            effects
        }
        ActionMessage::ResetFinished(result) => {
            let mut effects = vec![Effect::SetLoading(false)];
            match result.and_then(ServerReply::into_result) {
                Ok(message) => {
                    log::info!("✅ Filters reset successfully");
                    if let Some(file_name) = session.current_file_name() {
                        effects.push(env.show_result(file_name));
                    }
                    effects.push(env.notify(NotificationKind::Success, message));
                }
                Err(ApiError::Rejected(message)) => {
                    log::error!("❌ Reset failed: {}", message);
                    effects.push(env.notify(NotificationKind::Error, message));
                }
                Err(e) => {
                    log::error!("❌ Reset error: {}", e);
                    effects.push(env.notify(
                        NotificationKind::Error,
                        format!("An error occurred while processing: {e}"),
                    ));
                }
            }
            effects
        }
        ActionMessage::Download => {
            let Some(file_name) = session.current_file_name() else {
                return vec![env.notify(NotificationKind::Error, NO_IMAGE)];
            };
            log::info!("💾 Downloading image...");
            vec![
                env.notify(NotificationKind::Info, "Downloading image..."),
                Effect::Navigate {
                    url: env.routes.download(file_name),
                },
                env.notify(NotificationKind::Success, "Download started."),
            ]
        }
        ActionMessage::Discard => {
            let Some(file_name) = session.current_file_name() else {
                return vec![env.notify(NotificationKind::Error, NO_IMAGE)];
            };
            log::info!("🗑️ Discarding image {}", file_name);
            vec![Effect::SendDiscard {
                url: env.routes.discard(file_name),
            }]
        }
        ActionMessage::Discarded(result) => match result.and_then(ServerReply::into_result) {
            Ok(message) => {
                log::info!("✅ Image discarded");
                session.clear();
                let message = if message.is_empty() {
                    "Image discarded.".to_string()
                } else {
                    message
                };
                vec![
                    Effect::CancelApply,
                    Effect::ClearOriginal,
                    Effect::ClearResult,
                    Effect::SetControlsEnabled(false),
                    env.notify(NotificationKind::Success, message),
                ]
            }
            Err(ApiError::Rejected(message)) => {
                log::error!("❌ Discard failed: {}", message);
                vec![env.notify(NotificationKind::Error, message)]
            }
            Err(e) => {
                log::error!("❌ Discard error: {}", e);
                vec![env.notify(
                    NotificationKind::Error,
                    format!("Failed to discard image: {e}"),
                )]
            }
        },
        ActionMessage::Key(press) => match keybindings.action_for(&press) {
            Some(ShortcutAction::Download) => {
                handle_action(ActionMessage::Download, board, session, keybindings, env)
            }
            Some(ShortcutAction::Reset) => {
                handle_action(ActionMessage::Reset, board, session, keybindings, env)
            }
            None => Vec::new(),
        },
    }
}

/// Effect putting one filter item back to its defaults after `delay_ms`.
fn restage(entry: &FilterEntry, delay_ms: u32) -> Effect {
    let readouts = entry
        .def
        .params()
        .into_iter()
        .filter_map(|(param, spec)| {
            let value = entry.value.get(param)?;
            Some(SliderReadout::new(entry.name(), param, spec, value))
        })
        .collect();
    Effect::Restage {
        filter: entry.name().to_string(),
        readouts,
        delay_ms,
    }
}
