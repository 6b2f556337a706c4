//! Toast elements appended to the page body.

use studio_ui::dom::{self, El};
use web_sys::Element;

use crate::notification::{Notification, NotificationView};
use crate::ui_constants::class;

/// Renders notifications as `div.notification.{kind}` in `<body>`.
#[derive(Debug, Default)]
pub struct DomNotificationView;

impl NotificationView for DomNotificationView {
    type Node = Element;

    fn clear_all(&self) {
        for node in dom::query_all::<Element>(&format!(".{}", class::NOTIFICATION)) {
            node.remove();
        }
    }

    fn mount(&self, notification: &Notification) -> Option<Element> {
        let body = dom::document().ok()?.body()?;
        let node = El::new("div")
            .ok()?
            .class(&format!(
                "{} {}",
                class::NOTIFICATION,
                notification.kind.css_class()
            ))
            .text(&notification.text())
            .build();
        if let Err(e) = body.append_child(&node) {
            log::warn!("Failed to show notification: {:?}", e);
            return None;
        }
        Some(node)
    }

    fn reveal(&self, node: &Element) {
        dom::set_class(node, class::SHOW, true);
    }

    fn hide(&self, node: &Element) {
        dom::set_class(node, class::SHOW, false);
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }
}
