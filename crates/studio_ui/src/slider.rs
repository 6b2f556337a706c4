//! Value arithmetic for range inputs.
//!
//! A `SliderRange` mirrors the `min`/`max`/`step` attributes of an
//! `<input type="range">` and provides the conversions a slider needs around
//! it: snapping, the progress-bar ratio, and the texts shown to the user and
//! sent over the wire.

/// Numeric range of a slider control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Step size (0 for continuous)
    pub step: f64,
}

impl SliderRange {
    /// Create a new slider range.
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Number of decimal places implied by the step (0 for integral steps).
    pub fn decimals(&self) -> usize {
        let text = self.step.to_string();
        text.split_once('.').map_or(0, |(_, frac)| frac.len())
    }

    /// Snap a value to the nearest step within the range.
    ///
    /// The result is rounded to the step's precision so that accumulated
    /// floating point error never leaks into displayed or transmitted text.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        let snapped = if self.step > 0.0 {
            let steps = ((clamped - self.min) / self.step).round();
            (self.min + steps * self.step).clamp(self.min, self.max)
        } else {
            clamped
        };
        let scale = 10f64.powi(self.decimals() as i32);
        (snapped * scale).round() / scale
    }

    /// Position of a value within the range as a percentage (0-100).
    pub fn progress_percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            0.0
        } else {
            ((value - self.min) / span * 100.0).clamp(0.0, 100.0)
        }
    }

    /// Text shown next to the slider.
    ///
    /// Integral values are shown without a decimal point, everything else with
    /// exactly one decimal digit.
    pub fn format_value(value: f64) -> String {
        if value.fract() == 0.0 {
            normalize_zero(format!("{value:.0}"))
        } else {
            normalize_zero(format!("{value:.1}"))
        }
    }

    /// Text an `<input type="range">` reports as its value for `value`.
    ///
    /// Uses the shortest decimal form at the step's precision, e.g. `"1"`,
    /// `"0.3"`, `"-100"`.
    pub fn input_value(&self, value: f64) -> String {
        let snapped = self.snap(value);
        let mut text = format!("{:.*}", self.decimals(), snapped);
        if text.contains('.') {
            while text.ends_with('0') {
                text.pop();
            }
            if text.ends_with('.') {
                text.pop();
            }
        }
        normalize_zero(text)
    }

    /// Parse the text of a range input back into a snapped value.
    pub fn parse(&self, text: &str) -> Option<f64> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| self.snap(v))
    }
}

fn normalize_zero(text: String) -> String {
    match text.as_str() {
        "-0" => "0".to_string(),
        "-0.0" => "0.0".to_string(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_integer_and_decimal() {
        assert_eq!(SliderRange::format_value(5.0), "5");
        assert_eq!(SliderRange::format_value(-100.0), "-100");
        assert_eq!(SliderRange::format_value(1.0), "1");
        assert_eq!(SliderRange::format_value(0.0), "0");
        assert_eq!(SliderRange::format_value(0.3), "0.3");
        assert_eq!(SliderRange::format_value(2.96), "3.0");
    }

    #[test]
    fn test_format_value_never_shows_two_decimals() {
        let range = SliderRange::new(0.1, 3.0, 0.1);
        let mut value = range.min;
        while value <= range.max {
            let text = SliderRange::format_value(range.snap(value));
            match text.split_once('.') {
                Some((_, frac)) => assert_eq!(frac.len(), 1, "{text}"),
                None => assert!(!text.contains('.')),
            }
            value += 0.1;
        }
    }

    #[test]
    fn test_snap_to_step() {
        let blur = SliderRange::new(1.0, 15.0, 2.0);
        assert_eq!(blur.snap(4.2), 5.0);
        assert_eq!(blur.snap(100.0), 15.0);
        assert_eq!(blur.snap(-3.0), 1.0);

        let intensity = SliderRange::new(0.1, 2.0, 0.1);
        assert_eq!(intensity.snap(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(SliderRange::new(0.0, 10.0, 1.0).decimals(), 0);
        assert_eq!(SliderRange::new(0.0, 10.0, 0.1).decimals(), 1);
        assert_eq!(SliderRange::new(0.0, 10.0, 0.25).decimals(), 2);
    }

    #[test]
    fn test_progress_percent() {
        let beta = SliderRange::new(-100.0, 100.0, 10.0);
        assert_eq!(beta.progress_percent(0.0), 50.0);
        assert_eq!(beta.progress_percent(-100.0), 0.0);
        assert_eq!(beta.progress_percent(100.0), 100.0);

        let degenerate = SliderRange::new(1.0, 1.0, 0.0);
        assert_eq!(degenerate.progress_percent(1.0), 0.0);
    }

    #[test]
    fn test_input_value_text() {
        let intensity = SliderRange::new(0.1, 2.0, 0.1);
        assert_eq!(intensity.input_value(1.0), "1");
        assert_eq!(intensity.input_value(0.30000000000000004), "0.3");

        let beta = SliderRange::new(-100.0, 100.0, 10.0);
        assert_eq!(beta.input_value(-40.0), "-40");
        assert_eq!(beta.input_value(-0.0), "0");
    }

    #[test]
    fn test_parse() {
        let noise = SliderRange::new(0.0, 50.0, 5.0);
        assert_eq!(noise.parse("15"), Some(15.0));
        assert_eq!(noise.parse(" 17 "), Some(15.0));
        assert_eq!(noise.parse("abc"), None);
        assert_eq!(noise.parse("NaN"), None);
    }
}
