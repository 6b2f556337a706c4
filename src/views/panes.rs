//! Image panes, loading indicator and control state.
//!
//! The host page provides these elements; a missing optional element is
//! skipped rather than treated as an error.

use studio_ui::dom::{self, El};
use studio_ui::DomError;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Node};

use crate::message::SliderReadout;
use crate::ui_constants::{border, check_id, class, ids, progress_id, slider_id, value_id};

/// The scrollable section holding the filter list.
pub fn controls_section() -> Option<HtmlElement> {
    dom::query(&format!(".{}", class::CONTROLS_SECTION))
}

/// Show the uploaded image.
pub fn show_original(url: &str) -> Result<(), DomError> {
    let container = dom::by_id::<Element>(ids::ORIGINAL_CONTAINER)?;
    let image = image(url, "Original image")?;
    replace_content(&container, &image)?;
    dom::set_class(&container, class::HAS_IMAGE, true);
    Ok(())
}

/// Put the original pane back to its placeholder.
pub fn clear_original() -> Result<(), DomError> {
    let container = dom::by_id::<Element>(ids::ORIGINAL_CONTAINER)?;
    let text = placeholder("Upload an image to get started")?;
    replace_content(&container, &text)?;
    dom::set_class(&container, class::HAS_IMAGE, false);
    Ok(())
}

/// Show the processed image.
pub fn show_result(url: &str) -> Result<(), DomError> {
    let container = dom::by_id::<Element>(ids::RESULT_CONTAINER)?;
    let image = image(url, "Processed image")?;
    replace_content(&container, &image)?;
    dom::set_class(&container, class::HAS_IMAGE, true);
    Ok(())
}

/// Put the result pane back to its placeholder.
pub fn clear_result() -> Result<(), DomError> {
    let container = dom::by_id::<Element>(ids::RESULT_CONTAINER)?;
    let text = placeholder("Apply a filter to see the result")?;
    replace_content(&container, &text)?;
    dom::set_class(&container, class::HAS_IMAGE, false);
    Ok(())
}

fn image(url: &str, alt: &str) -> Result<Element, DomError> {
    Ok(El::new("img")?
        .class(class::RESULT_IMAGE)
        .attr("src", url)?
        .attr("alt", alt)?
        .build())
}

fn placeholder(text: &str) -> Result<Element, DomError> {
    Ok(El::new("div")?.class(class::PLACEHOLDER_TEXT).text(text).build())
}

/// Replace a pane's content, keeping the loading indicator if it lives there.
fn replace_content(container: &Element, content: &Element) -> Result<(), DomError> {
    let loading = dom::try_by_id::<Element>(ids::LOADING).filter(|loading| {
        let node: &Node = loading;
        container.contains(Some(node))
    });
    container.set_inner_html("");
    container.append_child(content)?;
    if let Some(loading) = loading {
        container.append_child(&loading)?;
    }
    Ok(())
}

/// Show or hide the loading indicator.
pub fn set_loading(show: bool) {
    if let Some(loading) = dom::try_by_id::<HtmlElement>(ids::LOADING) {
        dom::set_style(&loading, "display", if show { "block" } else { "none" });
    }
}

/// Enable or disable the action buttons and every filter control.
pub fn set_controls_enabled(enabled: bool) {
    let buttons = [ids::RESET_BUTTON, ids::DISCARD_BUTTON]
        .into_iter()
        .chain(ids::DOWNLOAD_BUTTONS.iter().copied());
    for id in buttons {
        if let Some(button) = dom::try_by_id::<HtmlButtonElement>(id) {
            button.set_disabled(!enabled);
        }
    }

    let selector = format!(".{}, .{}", class::FILTER_CHECKBOX, class::SLIDER);
    for input in dom::query_all::<HtmlInputElement>(&selector) {
        input.set_disabled(!enabled);
    }
}

/// Apply or remove the active styling of a filter item.
pub fn set_active(filter: &str, active: bool) -> Result<(), DomError> {
    let checkbox = dom::by_id::<Element>(&check_id(filter))?;
    let item = checkbox
        .closest(&format!(".{}", class::FILTER_ITEM))?
        .ok_or_else(|| DomError::missing(filter))?;
    dom::set_class(&item, class::ACTIVE, active);

    if let Some(item) = item.dyn_ref::<HtmlElement>() {
        let color = if active { border::ACTIVE } else { border::INACTIVE };
        dom::set_style(item, "border-color", color);
    }
    Ok(())
}

/// Update a slider's value text and progress bar, and optionally the input.
pub fn show_readout(readout: &SliderReadout, set_input: bool) -> Result<(), DomError> {
    let (filter, param) = (readout.filter.as_str(), readout.param);

    if set_input {
        dom::by_id::<HtmlInputElement>(&slider_id(filter, param))?.set_value(&readout.input);
    }
    dom::by_id::<Element>(&value_id(filter, param))?.set_text_content(Some(&readout.text));
    if let Some(bar) = dom::try_by_id::<HtmlElement>(&progress_id(filter, param)) {
        dom::set_style(&bar, "width", &format!("{}%", readout.percent));
    }
    Ok(())
}

/// Uncheck a filter and put its sliders back to the given readouts.
pub fn restage(filter: &str, readouts: &[SliderReadout]) -> Result<(), DomError> {
    dom::by_id::<HtmlInputElement>(&check_id(filter))?.set_checked(false);
    set_active(filter, false)?;
    for readout in readouts {
        show_readout(readout, true)?;
    }
    Ok(())
}
