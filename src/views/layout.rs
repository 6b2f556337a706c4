//! Platform-independent description of the filter list markup.
//!
//! The DOM renderer only turns these layouts into elements, so ids, texts and
//! slider attributes can be checked without a browser.

use crate::message::SliderReadout;
use crate::model::{FilterBoard, FilterEntry, Param};
use crate::ui_constants::{check_id, progress_id, slider_id, value_id};

/// One range input with its readout.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    pub param: Param,
    /// Caption above the slider, empty for single-parameter filters
    pub caption: &'static str,
    pub slider_id: String,
    pub value_id: String,
    pub progress_id: String,
    pub min: String,
    pub max: String,
    pub step: String,
    pub readout: SliderReadout,
}

/// One draggable filter item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    /// `data-filter-name`
    pub name: &'static str,
    /// `data-category`
    pub category: &'static str,
    pub check_id: String,
    /// Icon and label next to the checkbox
    pub label: String,
    pub description: &'static str,
    pub enabled: bool,
    pub sliders: Vec<SliderLayout>,
}

/// Layout of a single filter entry.
pub fn item_layout(entry: &FilterEntry) -> ItemLayout {
    let def = entry.def;
    let sliders = def
        .params()
        .into_iter()
        .map(|(param, spec)| {
            let value = entry.value.get(param).unwrap_or(spec.default);
            SliderLayout {
                param,
                caption: spec.caption,
                slider_id: slider_id(def.name, param),
                value_id: value_id(def.name, param),
                progress_id: progress_id(def.name, param),
                min: spec.range.min.to_string(),
                max: spec.range.max.to_string(),
                step: spec.range.step.to_string(),
                readout: SliderReadout::new(def.name, param, spec, value),
            }
        })
        .collect();

    ItemLayout {
        name: def.name,
        category: def.category.as_str(),
        check_id: check_id(def.name),
        label: format!("{} {}", def.icon, def.label),
        description: def.description,
        enabled: entry.enabled,
        sliders,
    }
}

/// Layouts of every filter in visual order.
pub fn board_layout(board: &FilterBoard) -> Vec<ItemLayout> {
    board.entries().iter().map(item_layout).collect()
}
