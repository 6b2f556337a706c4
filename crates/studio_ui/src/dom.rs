//! Thin helpers over `web_sys` for building and wiring DOM nodes.
//!
//! Lookups return [`DomError`] instead of panicking so a page with a missing
//! mount point degrades to a logged error.

use std::borrow::Cow;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::DomError;

/// The global `window`.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoGlobal("window"))
}

/// The global `document`.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoGlobal("document"))
}

/// Look up an element by id and cast it to `T`.
pub fn by_id<T: JsCast>(id: &str) -> Result<T, DomError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::missing(id))?;
    element
        .dyn_into::<T>()
        .map_err(|_| DomError::wrong_type(id, std::any::type_name::<T>()))
}

/// Look up an optional element by id.
pub fn try_by_id<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).ok()
}

/// First element in the document matching `selector`, cast to `T`.
pub fn query<T: JsCast>(selector: &str) -> Option<T> {
    document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

/// Every element in the document matching `selector` that casts to `T`.
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    document()
        .and_then(|doc| Ok(doc.query_selector_all(selector)?))
        .map(|nodes| cast_nodes(&nodes))
        .unwrap_or_default()
}

/// Every descendant of `root` matching `selector` that casts to `T`.
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    root.query_selector_all(selector)
        .map(|nodes| cast_nodes(&nodes))
        .unwrap_or_default()
}

fn cast_nodes<T: JsCast>(nodes: &NodeList) -> Vec<T> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Create an element and cast it to `T`.
pub fn create<T: JsCast>(tag: &str) -> Result<T, DomError> {
    document()?
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| DomError::wrong_type(tag, std::any::type_name::<T>()))
}

/// Add or remove a class on an element.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle class '{}': {:?}", class, e);
    }
}

/// Set an inline style property, logging failures.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Failed to set style {}={}: {:?}", property, value, e);
    }
}

/// Builder for small element trees.
pub struct El {
    element: Element,
}

impl El {
    /// Start building an element with the given tag.
    pub fn new(tag: &str) -> Result<Self, DomError> {
        Ok(Self {
            element: document()?.create_element(tag)?,
        })
    }

    /// Set the `class` attribute.
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Set the `id` attribute.
    pub fn id(self, id: &str) -> Self {
        self.element.set_id(id);
        self
    }

    /// Set an arbitrary attribute.
    pub fn attr(self, name: &str, value: &str) -> Result<Self, DomError> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    /// Set the text content.
    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// Append a child element.
    pub fn child(self, child: &Element) -> Result<Self, DomError> {
        self.element.append_child(child)?;
        Ok(self)
    }

    /// Finish and return the raw element.
    pub fn build(self) -> Element {
        self.element
    }

    /// Finish and cast to a concrete element type.
    pub fn build_as<T: JsCast>(self) -> Result<T, DomError> {
        let tag = self.element.tag_name();
        self.element
            .dyn_into::<T>()
            .map_err(|_| DomError::wrong_type(tag, std::any::type_name::<T>()))
    }
}

/// Owner of registered event listeners.
///
/// Listeners are removed from their targets when the set is dropped, so
/// replacing a view's set never stacks duplicate handlers.
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<EventListener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a passive listener.
    pub fn on<F>(&mut self, target: &EventTarget, event: impl Into<Cow<'static, str>>, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners
            .push(EventListener::new(target, event, callback));
    }

    /// Register a listener that is allowed to call `prevent_default`.
    pub fn on_active<F>(
        &mut self,
        target: &EventTarget,
        event: impl Into<Cow<'static, str>>,
        callback: F,
    ) where
        F: FnMut(&Event) + 'static,
    {
        self.listeners.push(EventListener::new_with_options(
            target,
            event,
            EventListenerOptions::enable_prevent_default(),
            callback,
        ));
    }

    /// Number of registered listeners.
    pub fn count(&self) -> usize {
        self.listeners.len()
    }
}
