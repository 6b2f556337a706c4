//! Error types for DOM access.

use thiserror::Error;

/// Errors that can occur while looking up or building DOM nodes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// `window` or `document` is not available (e.g. in a worker)
    #[error("No {0} object available")]
    NoGlobal(&'static str),

    /// No element with the given id exists
    #[error("Element not found: #{id}")]
    MissingElement {
        /// The id that was looked up
        id: String,
    },

    /// An element exists but is not of the expected type
    #[error("Element #{id} is not a {expected}")]
    WrongType {
        /// The id that was looked up
        id: String,
        /// The expected element interface
        expected: &'static str,
    },

    /// A DOM call threw a JavaScript exception
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl DomError {
    /// Create a missing element error.
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Create a wrong type error.
    pub fn wrong_type(id: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            id: id.into(),
            expected,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}
