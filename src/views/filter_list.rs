//! Filter list rendering and event wiring.

use studio_ui::dom::{self, El, Listeners};
use studio_ui::{DomError, ItemBounds, ScrollViewport, SideEffect};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, HtmlElement, HtmlInputElement};

use super::layout::{ItemLayout, SliderLayout};
use super::panes;
use crate::message::{ControlMessage, DragMessage, Message};
use crate::ui_constants::{class, PLACEHOLDER_OPACITY};

const NAME_ATTR: &str = "data-filter-name";

/// Replace the list's content with one item per layout.
pub fn render(list: &Element, layouts: &[ItemLayout]) -> Result<(), DomError> {
    list.set_inner_html("");
    for layout in layouts {
        list.append_child(&build_item(layout)?)?;
    }
    log::info!("📱 Created {} filter items", layouts.len());
    Ok(())
}

fn build_item(layout: &ItemLayout) -> Result<Element, DomError> {
    let item = El::new("div")?
        .class(class::FILTER_ITEM)
        .attr("draggable", "true")?
        .attr(NAME_ATTR, layout.name)?
        .attr("data-category", layout.category)?
        .build();

    let handle = El::new("div")?
        .class(class::DRAG_HANDLE)
        .attr("data-tooltip", "Drag to reorder")?
        .text("⋮⋮")
        .build();
    item.append_child(&handle)?;

    let checkbox = El::new("input")?
        .id(&layout.check_id)
        .class(class::FILTER_CHECKBOX)
        .attr("type", "checkbox")?
        .build_as::<HtmlInputElement>()?;
    checkbox.set_checked(layout.enabled);
    let label = El::new("label")?
        .class("tooltip")
        .attr("data-tooltip", layout.description)?
        .child(&checkbox)?
        .build();
    label.append_with_str_1(&format!(" {}", layout.label))?;
    item.append_child(&label)?;

    for slider in &layout.sliders {
        item.append_child(&build_slider(slider, layout.description)?)?;
    }

    let description = El::new("div")?
        .class(class::DESCRIPTION)
        .text(layout.description)
        .build();
    item.append_child(&description)?;

    dom::set_class(&item, class::ACTIVE, layout.enabled);
    Ok(item)
}

fn build_slider(slider: &SliderLayout, tooltip: &str) -> Result<Element, DomError> {
    let input = El::new("input")?
        .id(&slider.slider_id)
        .class(class::SLIDER)
        .attr("type", "range")?
        .attr("min", &slider.min)?
        .attr("max", &slider.max)?
        .attr("step", &slider.step)?
        .attr("value", &slider.readout.input)?
        .attr("data-tooltip", tooltip)?
        .build();
    let value = El::new("span")?
        .id(&slider.value_id)
        .class(class::SLIDER_VALUE)
        .text(&slider.readout.text)
        .build();
    let bar = El::new("div")?
        .id(&slider.progress_id)
        .class(class::PROGRESS_BAR)
        .build_as::<HtmlElement>()?;
    dom::set_style(&bar, "width", &format!("{}%", slider.readout.percent));
    let progress = El::new("div")?
        .class(class::PROGRESS_CONTAINER)
        .child(&bar)?
        .build();

    let group = El::new("div")?;
    let group = if slider.caption.is_empty() {
        group.child(&input)?.child(&value)?
    } else {
        let caption = El::new("label")?
            .text(&format!("{}: ", slider.caption))
            .child(&value)?
            .build();
        group.child(&caption)?.child(&input)?
    };
    Ok(group.child(&progress)?.build())
}

/// Register per-control listeners on a rendered list.
pub fn wire(list: &Element, layouts: &[ItemLayout], dispatch: &SideEffect<Message>) -> Listeners {
    let mut listeners = Listeners::new();

    for layout in layouts {
        let name = layout.name;

        if let Ok(checkbox) = dom::by_id::<HtmlInputElement>(&layout.check_id) {
            let (d, input) = (dispatch.clone(), checkbox.clone());
            listeners.on(&checkbox, "change", move |_| {
                d.emit(
                    ControlMessage::Toggled {
                        filter: name.to_string(),
                        enabled: input.checked(),
                    }
                    .into(),
                );
            });
        }

        for slider in &layout.sliders {
            let Ok(element) = dom::by_id::<HtmlInputElement>(&slider.slider_id) else {
                continue;
            };
            let (d, input, param) = (dispatch.clone(), element.clone(), slider.param);
            listeners.on(&element, "input", move |_| {
                d.emit(
                    ControlMessage::SliderInput {
                        filter: name.to_string(),
                        param,
                        raw: input.value(),
                    }
                    .into(),
                );
            });
        }

        let Some(item) = find_item(list, name) else {
            log::warn!("No rendered item for filter {}", name);
            continue;
        };

        let d = dispatch.clone();
        listeners.on(&item, "dragstart", move |event| {
            if let Some(transfer) = event
                .dyn_ref::<DragEvent>()
                .and_then(|e| e.data_transfer())
            {
                transfer.set_effect_allowed("move");
                // Firefox only starts a drag when data is set
                if let Err(e) = transfer.set_data("text/plain", name) {
                    log::debug!("Could not set drag data: {:?}", e);
                }
            }
            d.emit(DragMessage::Started(name.to_string()).into());
        });

        let (d, list_el) = (dispatch.clone(), list.clone());
        listeners.on(&item, "dragend", move |_| {
            d.emit(
                DragMessage::Ended {
                    order: read_order(&list_el),
                }
                .into(),
            );
        });
    }

    let (d, list_el) = (dispatch.clone(), list.clone());
    listeners.on_active(list, "dragover", move |event| {
        event.prevent_default();
        let Some(event) = event.dyn_ref::<DragEvent>() else {
            return;
        };
        d.emit(
            DragMessage::Over {
                pointer_y: f64::from(event.client_y()),
                items: item_bounds(&list_el),
                viewport: scroll_viewport(&list_el),
            }
            .into(),
        );
    });

    listeners
}

/// Filter names in page order.
pub fn read_order(list: &Element) -> Vec<String> {
    items(list)
        .iter()
        .filter_map(|item| item.get_attribute(NAME_ATTR))
        .collect()
}

fn items(list: &Element) -> Vec<Element> {
    dom::query_all_in::<Element>(
        list,
        &format!(".{}:not(.{})", class::FILTER_ITEM, class::PLACEHOLDER),
    )
}

fn item_bounds(list: &Element) -> Vec<(String, ItemBounds)> {
    items(list)
        .iter()
        .filter_map(|item| {
            let name = item.get_attribute(NAME_ATTR)?;
            let rect = item.get_bounding_client_rect();
            Some((name, ItemBounds::new(rect.top(), rect.height())))
        })
        .collect()
}

/// Bounds of the scrollable controls section, or of the list without one.
fn scroll_viewport(list: &Element) -> ScrollViewport {
    let rect = panes::controls_section()
        .map(|section| section.get_bounding_client_rect())
        .unwrap_or_else(|| list.get_bounding_client_rect());
    ScrollViewport {
        top: rect.top(),
        bottom: rect.bottom(),
    }
}

fn find_item(list: &Element, filter: &str) -> Option<Element> {
    items(list)
        .into_iter()
        .find(|item| item.get_attribute(NAME_ATTR).as_deref() == Some(filter))
}

/// Move an item in front of another, or to the end of the list.
pub fn move_item(list: &Element, filter: &str, before: Option<&str>) -> Result<(), DomError> {
    let item = find_item(list, filter).ok_or_else(|| DomError::missing(filter))?;
    match before.and_then(|anchor| find_item(list, anchor)) {
        Some(anchor) => list.insert_before(&item, Some(&anchor))?,
        None => list.append_child(&item)?,
    };
    Ok(())
}

/// Mark the dragged item and return a placeholder clone of it.
pub fn begin_drag(list: &Element, filter: &str) -> Result<Element, DomError> {
    let item = find_item(list, filter).ok_or_else(|| DomError::missing(filter))?;
    dom::set_class(&item, class::DRAGGING, true);

    let placeholder = item
        .clone_node_with_deep(true)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::wrong_type(filter, "HtmlElement"))?;
    dom::set_class(&placeholder, class::DRAGGING, false);
    dom::set_class(&placeholder, class::PLACEHOLDER, true);
    dom::set_style(&placeholder, "opacity", PLACEHOLDER_OPACITY);
    Ok(placeholder.into())
}

/// Unmark the dragged item.
pub fn end_drag(list: &Element, filter: &str) {
    if let Some(item) = find_item(list, filter) {
        dom::set_class(&item, class::DRAGGING, false);
    }
}
