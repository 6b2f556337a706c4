//! The built-in filter catalog.
//!
//! Names must match the filter keys the server understands.

use studio_ui::SliderRange;

use super::filter::{FilterCategory, FilterDefinition, FilterParams, ParamSpec, ValueKind};

const INTENSITY: SliderRange = SliderRange::new(0.1, 2.0, 0.1);

static CATALOG: [FilterDefinition; 10] = [
    FilterDefinition {
        name: "grayscale",
        label: "Grayscale",
        icon: "⚫",
        description: "Converts the image to black and white with adjustable strength",
        category: FilterCategory::Color,
        params: FilterParams::Single(ParamSpec::new(INTENSITY, 1.0, ValueKind::Double)),
    },
    FilterDefinition {
        name: "blur",
        label: "Blur",
        icon: "🌫️",
        description: "Softens the image with a blur",
        category: FilterCategory::Effect,
        params: FilterParams::Single(ParamSpec::new(
            SliderRange::new(1.0, 15.0, 2.0),
            5.0,
            ValueKind::Int,
        )),
    },
    FilterDefinition {
        name: "edges",
        label: "Edge Detection",
        icon: "🔍",
        description: "Detects and highlights edges in the image",
        category: FilterCategory::Effect,
        params: FilterParams::Single(ParamSpec::new(
            SliderRange::new(10.0, 200.0, 10.0),
            100.0,
            ValueKind::Int,
        )),
    },
    FilterDefinition {
        name: "brightness",
        label: "Brightness/Contrast",
        icon: "💡",
        description: "Adjusts image brightness and contrast",
        category: FilterCategory::Adjust,
        params: FilterParams::Special {
            alpha: ParamSpec::new(SliderRange::new(0.1, 3.0, 0.1), 1.0, ValueKind::Double)
                .with_caption("Contrast"),
            beta: ParamSpec::new(SliderRange::new(-100.0, 100.0, 10.0), 0.0, ValueKind::Double)
                .with_caption("Brightness"),
        },
    },
    FilterDefinition {
        name: "histogram",
        label: "Histogram Equalization",
        icon: "📊",
        description: "Improves contrast for a sharper looking image",
        category: FilterCategory::Adjust,
        params: FilterParams::Single(ParamSpec::new(INTENSITY, 1.0, ValueKind::Double)),
    },
    FilterDefinition {
        name: "sepia",
        label: "Sepia",
        icon: "🟤",
        description: "Applies a vintage brown sepia tone",
        category: FilterCategory::Color,
        params: FilterParams::Single(ParamSpec::new(INTENSITY, 1.0, ValueKind::Double)),
    },
    FilterDefinition {
        name: "sharpen",
        label: "Sharpen",
        icon: "🔪",
        description: "Increases image sharpness",
        category: FilterCategory::Adjust,
        params: FilterParams::Single(ParamSpec::new(
            SliderRange::new(0.1, 3.0, 0.1),
            1.0,
            ValueKind::Double,
        )),
    },
    FilterDefinition {
        name: "saturation",
        label: "Saturation",
        icon: "🌈",
        description: "Adjusts colour saturation",
        category: FilterCategory::Color,
        params: FilterParams::Single(ParamSpec::new(
            SliderRange::new(0.0, 3.0, 0.1),
            1.0,
            ValueKind::Double,
        )),
    },
    FilterDefinition {
        name: "noise",
        label: "Noise",
        icon: "📺",
        description: "Adds a noise effect to the image",
        category: FilterCategory::Effect,
        params: FilterParams::Single(ParamSpec::new(
            SliderRange::new(0.0, 50.0, 5.0),
            10.0,
            ValueKind::Int,
        )),
    },
    FilterDefinition {
        name: "invert",
        label: "Invert",
        icon: "🔄",
        description: "Inverts the image colours",
        category: FilterCategory::Color,
        params: FilterParams::Single(ParamSpec::new(
            SliderRange::new(0.0, 1.0, 0.1),
            1.0,
            ValueKind::Double,
        )),
    },
];

/// Every filter, in default display order.
pub fn all() -> &'static [FilterDefinition] {
    &CATALOG
}
