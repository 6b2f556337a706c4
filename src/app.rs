//! Main application state.

use studio_ui::{DragState, KeyPress};

use crate::api::ApiRoutes;
use crate::config::StudioConfig;
use crate::constants::AUTO_SCROLL;
use crate::handlers::{self, Env};
use crate::keybindings::KeyBindings;
use crate::message::{Effect, Message};
use crate::model::{catalog, FilterBoard, Session};

/// The filter studio.
///
/// Owns every piece of client state. [`StudioApp::update`] is the only place
/// it changes; the browser shell renders from it and executes the returned
/// effects.
pub struct StudioApp {
    board: FilterBoard,
    session: Session,
    drag: DragState<String>,
    routes: ApiRoutes,
    keybindings: KeyBindings,
    notification_ms: u32,
}

impl StudioApp {
    /// Create the app with the built-in filter catalog.
    pub fn new(config: &StudioConfig) -> Self {
        log::info!(
            "🎨 {} starting with {} filters",
            config.app_name,
            catalog::all().len()
        );
        Self {
            board: FilterBoard::new(catalog::all()),
            session: Session::new(),
            drag: DragState::default(),
            routes: ApiRoutes::new(config.preferences.api_base.clone()),
            keybindings: config.keybindings.clone(),
            notification_ms: config.preferences.notification_ms,
        }
    }

    pub fn board(&self) -> &FilterBoard {
        &self.board
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether `press` is bound to a shortcut (its default should be prevented).
    pub fn handles_key(&self, press: &KeyPress) -> bool {
        self.keybindings.action_for(press).is_some()
    }

    /// Apply a message and return the effects to carry out.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let env = Env {
            routes: &self.routes,
            notification_ms: self.notification_ms,
            auto_scroll: AUTO_SCROLL,
        };

        match message {
            Message::Upload(msg) => handlers::handle_upload(msg, &mut self.session, &env),
            Message::Control(msg) => {
                handlers::handle_control(msg, &mut self.board, &self.session, &env)
            }
            Message::Drag(msg) => handlers::handle_drag(
                msg,
                &mut self.drag,
                &mut self.board,
                &self.session,
                &env,
            ),
            Message::Action(msg) => handlers::handle_action(
                msg,
                &mut self.board,
                &mut self.session,
                &self.keybindings,
                &env,
            ),
        }
    }
}

impl Default for StudioApp {
    fn default() -> Self {
        Self::new(&StudioConfig::default())
    }
}
