//! Views of the filter studio.
//!
//! - layout: what the filter list contains (ids, texts, slider attributes)
//! - filter_list: DOM rendering and event wiring of the list (browser only)
//! - panes: image panes, loading indicator, control state (browser only)
//! - notification_view: toast elements (browser only)

mod layout;

#[cfg(target_arch = "wasm32")]
pub mod filter_list;
#[cfg(target_arch = "wasm32")]
mod notification_view;
#[cfg(target_arch = "wasm32")]
pub mod panes;

pub use layout::{board_layout, item_layout, ItemLayout, SliderLayout};

#[cfg(target_arch = "wasm32")]
pub use notification_view::DomNotificationView;
