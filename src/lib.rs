//! Filter Studio - browser front end for a server-side image filter pipeline
//!
//! Renders the filter controls, handles drag-and-drop reordering, debounces
//! slider input and talks to the processing server. Everything except the
//! DOM shell is platform independent and tested natively.

pub mod api;
mod app;
pub mod config;
mod constants;
mod handlers;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod notification;
mod ui_constants;
pub mod upload;
pub mod views;

pub use app::StudioApp;
pub use config::StudioConfig;
pub use message::{Effect, Message};

#[cfg(target_arch = "wasm32")]
mod runtime;
#[cfg(target_arch = "wasm32")]
mod wasm_file;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(test)]
mod tests;
