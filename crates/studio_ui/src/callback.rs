//! Message sink for event handlers
//!
//! Event listeners turn raw DOM values into application messages and hand
//! them to a [`SideEffect`]. The sink is reference counted so one dispatcher
//! can be cloned into every listener of a view.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use studio_ui::SideEffect;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let log = seen.clone();
//! let dispatch = SideEffect::new(move |msg: &str| log.borrow_mut().push(msg));
//!
//! dispatch.clone().emit("changed");
//! assert_eq!(*seen.borrow(), vec!["changed"]);
//! ```

use std::fmt;
use std::rc::Rc;

/// A side-effect callback that doesn't return a message.
pub struct SideEffect<T> {
    f: Rc<dyn Fn(T)>,
}

impl<T> SideEffect<T> {
    /// Create a new side-effect callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Call the side-effect callback.
    pub fn emit(&self, value: T) {
        (self.f)(value);
    }
}

impl<T> Clone for SideEffect<T> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<T> fmt::Debug for SideEffect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideEffect")
            .field("handlers", &Rc::strong_count(&self.f))
            .finish()
    }
}
