//! studio_ui - Small building blocks for DOM-driven browser interfaces
//!
//! The crate keeps the arithmetic and timing logic of interactive controls
//! (sliders, drag reordering, debounced dispatch) free of any browser types so
//! it can be exercised natively. The [`dom`] module and the browser scheduler
//! are only compiled for `wasm32`.

mod callback;
mod drag;
mod error;
mod event;
mod slider;
mod timer;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use callback::SideEffect;
pub use drag::{
    insertion_anchor, AutoScroll, DragState, ItemBounds, ScrollDirection, ScrollViewport,
};
pub use error::DomError;
pub use event::{Key, KeyPress, Modifiers};
pub use slider::SliderRange;
pub use timer::{Debouncer, KeyedTimers, Repeater, Scheduler};

#[cfg(target_arch = "wasm32")]
pub use timer::BrowserScheduler;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::SideEffect;
    pub use crate::drag::{DragState, ItemBounds, ScrollDirection, ScrollViewport};
    pub use crate::event::{Key, KeyPress, Modifiers};
    pub use crate::slider::SliderRange;
    pub use crate::timer::{Debouncer, KeyedTimers, Repeater, Scheduler};
}
