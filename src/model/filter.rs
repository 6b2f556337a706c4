//! Filter definition data model.

use studio_ui::SliderRange;

/// Grouping shown on each filter item (`data-category`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    /// Colour transforms (grayscale, sepia, ...)
    Color,
    /// Spatial effects (blur, edges, noise)
    Effect,
    /// Tone adjustments (brightness, histogram, sharpen)
    Adjust,
}

impl FilterCategory {
    /// Get the identifier used in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::Color => "color",
            FilterCategory::Effect => "effect",
            FilterCategory::Adjust => "adjust",
        }
    }
}

/// How the server interprets a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Double,
}

/// Identifies one slider of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// The only parameter of a regular filter
    Value,
    /// Contrast of the brightness/contrast filter
    Alpha,
    /// Brightness of the brightness/contrast filter
    Beta,
}

impl Param {
    /// Infix used in element ids (`blurSlider`, `brightnessAlphaSlider`).
    pub fn id_infix(&self) -> &'static str {
        match self {
            Param::Value => "",
            Param::Alpha => "Alpha",
            Param::Beta => "Beta",
        }
    }
}

/// Range and default of one numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Caption shown above the slider (special filters only)
    pub caption: &'static str,
    pub range: SliderRange,
    pub default: f64,
    pub kind: ValueKind,
}

impl ParamSpec {
    pub const fn new(range: SliderRange, default: f64, kind: ValueKind) -> Self {
        Self {
            caption: "",
            range,
            default,
            kind,
        }
    }

    pub const fn with_caption(mut self, caption: &'static str) -> Self {
        self.caption = caption;
        self
    }
}

/// Parameters of a filter: one slider, or the two-slider "special" layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterParams {
    Single(ParamSpec),
    Special { alpha: ParamSpec, beta: ParamSpec },
}

/// Static descriptor of one adjustable image operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDefinition {
    /// Unique key, also used as the request field name
    pub name: &'static str,
    /// Display label
    pub label: &'static str,
    /// Emoji shown before the label
    pub icon: &'static str,
    /// Tooltip and description text
    pub description: &'static str,
    pub category: FilterCategory,
    pub params: FilterParams,
}

impl FilterDefinition {
    /// Whether this is a two-parameter filter.
    pub fn is_special(&self) -> bool {
        matches!(self.params, FilterParams::Special { .. })
    }

    /// Spec of a parameter, if this filter has it.
    pub fn param(&self, param: Param) -> Option<&ParamSpec> {
        match (&self.params, param) {
            (FilterParams::Single(spec), Param::Value) => Some(spec),
            (FilterParams::Special { alpha, .. }, Param::Alpha) => Some(alpha),
            (FilterParams::Special { beta, .. }, Param::Beta) => Some(beta),
            _ => None,
        }
    }

    /// All parameters of this filter in display order.
    pub fn params(&self) -> Vec<(Param, &ParamSpec)> {
        match &self.params {
            FilterParams::Single(spec) => vec![(Param::Value, spec)],
            FilterParams::Special { alpha, beta } => {
                vec![(Param::Alpha, alpha), (Param::Beta, beta)]
            }
        }
    }

    /// Default value(s) of this filter.
    pub fn default_value(&self) -> FilterValue {
        match &self.params {
            FilterParams::Single(spec) => FilterValue::Single(spec.default),
            FilterParams::Special { alpha, beta } => FilterValue::Pair {
                alpha: alpha.default,
                beta: beta.default,
            },
        }
    }
}

/// Current value(s) of a filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Single(f64),
    Pair { alpha: f64, beta: f64 },
}

impl FilterValue {
    /// Read one parameter.
    pub fn get(&self, param: Param) -> Option<f64> {
        match (self, param) {
            (FilterValue::Single(v), Param::Value) => Some(*v),
            (FilterValue::Pair { alpha, .. }, Param::Alpha) => Some(*alpha),
            (FilterValue::Pair { beta, .. }, Param::Beta) => Some(*beta),
            _ => None,
        }
    }

    /// Write one parameter. Returns `false` if the shape doesn't have it.
    pub fn set(&mut self, param: Param, value: f64) -> bool {
        match (self, param) {
            (FilterValue::Single(v), Param::Value) => *v = value,
            (FilterValue::Pair { alpha, .. }, Param::Alpha) => *alpha = value,
            (FilterValue::Pair { beta, .. }, Param::Beta) => *beta = value,
            _ => return false,
        }
        true
    }
}
