//! DOM constants for consistent markup across the application.
//!
//! This module centralizes element ids, class names and inline colours the
//! views and the host page agree on, plus the id scheme for filter controls.

use crate::model::Param;

/// Ids of elements the host page provides.
pub mod ids {
    /// Container the filter items are rendered into
    pub const FILTER_LIST: &str = "filterOrderList";
    /// File input for uploads
    pub const IMAGE_INPUT: &str = "imageInput";
    /// Pane showing the uploaded image
    pub const ORIGINAL_CONTAINER: &str = "originalImageContainer";
    /// Pane showing the processed image
    pub const RESULT_CONTAINER: &str = "resultImageContainer";
    /// Spinner shown while a request is running
    pub const LOADING: &str = "loading";
    pub const RESET_BUTTON: &str = "resetBtn";
    pub const DOWNLOAD_BUTTONS: &[&str] = &["downloadBtn", "downloadBtn2"];
    /// Optional button discarding the uploaded image
    pub const DISCARD_BUTTON: &str = "clearBtn";
}

/// Class names.
pub mod class {
    pub const FILTER_ITEM: &str = "filter-item";
    pub const CONTROLS_SECTION: &str = "controls-section";
    pub const DRAG_HANDLE: &str = "drag-handle tooltip";
    pub const FILTER_CHECKBOX: &str = "filter-checkbox";
    pub const SLIDER: &str = "slider";
    pub const SLIDER_VALUE: &str = "slider-value";
    pub const PROGRESS_CONTAINER: &str = "progress-container";
    pub const PROGRESS_BAR: &str = "progress-bar";
    pub const DESCRIPTION: &str = "filter-description";
    pub const DRAGGING: &str = "dragging";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const ACTIVE: &str = "active";
    pub const HAS_IMAGE: &str = "has-image";
    pub const RESULT_IMAGE: &str = "result-image fade-in";
    pub const PLACEHOLDER_TEXT: &str = "placeholder-text";
    pub const NOTIFICATION: &str = "notification";
    pub const SHOW: &str = "show";
}

/// Inline border colours of filter items.
pub mod border {
    pub const ACTIVE: &str = "rgba(102, 126, 234, 0.5)";
    pub const INACTIVE: &str = "rgba(255, 255, 255, 0.1)";
}

/// Opacity of the drag placeholder clone.
pub const PLACEHOLDER_OPACITY: &str = "0.3";

/// Id of a filter's enable checkbox, e.g. `blurCheck`.
pub fn check_id(filter: &str) -> String {
    format!("{filter}Check")
}

/// Id of a slider, e.g. `blurSlider` or `brightnessAlphaSlider`.
pub fn slider_id(filter: &str, param: Param) -> String {
    format!("{filter}{}Slider", param.id_infix())
}

/// Id of a slider's value text, e.g. `blurValue`.
pub fn value_id(filter: &str, param: Param) -> String {
    format!("{filter}{}Value", param.id_infix())
}

/// Id of a slider's progress bar, e.g. `blurProgress`.
pub fn progress_id(filter: &str, param: Param) -> String {
    format!("{filter}{}Progress", param.id_infix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog;
    use std::collections::HashSet;

    #[test]
    fn test_id_scheme() {
        assert_eq!(check_id("blur"), "blurCheck");
        assert_eq!(slider_id("blur", Param::Value), "blurSlider");
        assert_eq!(value_id("brightness", Param::Alpha), "brightnessAlphaValue");
        assert_eq!(progress_id("brightness", Param::Beta), "brightnessBetaProgress");
    }

    #[test]
    fn test_control_ids_unique_across_catalog() {
        let mut seen = HashSet::new();
        for def in catalog::all() {
            assert!(seen.insert(check_id(def.name)));
            for (param, _) in def.params() {
                assert!(seen.insert(slider_id(def.name, param)));
                assert!(seen.insert(value_id(def.name, param)));
                assert!(seen.insert(progress_id(def.name, param)));
            }
        }
    }
}
