// Bar Entity
// One named value-range-driven fill indicator within a progress widget

use ratatui::style::Color;

use super::Theme;

/// Nudge applied to keep `min_value < max_value` strictly
pub const RANGE_EPSILON: f64 = 0.0001;

/// One named progress bar
///
/// Invariants maintained by the mutation methods:
/// - `min_value < max_value` (degenerate ranges are nudged by epsilon,
///   never rejected)
/// - `min_value <= value <= max_value`
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Title of the bar; unique key within a registry
    pub title: String,
    /// Values at or below this leave the bar empty
    pub min_value: f64,
    /// Values at or above this fill the bar fully
    pub max_value: f64,
    /// Current value
    pub value: f64,
    /// Fill from the high end of the axis instead of the low end
    pub reverse: bool,
    /// Foreground (fill) color
    pub fg: Color,
    /// Color of the unfilled region
    pub fg_off: Color,
    /// Background color (border padding, tick gaps)
    pub bg: Color,
    /// Border color
    pub bordercolor: Color,
    /// Gradient stop at half fill; absent means solid fill
    pub fg_center: Option<Color>,
    /// Gradient stop at full fill; absent means solid fill
    pub fg_end: Option<Color>,
}

impl Bar {
    /// Create a bar with default range 0..100 and theme colors
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            min_value: 0.0,
            max_value: 100.0,
            value: 0.0,
            reverse: false,
            fg: theme.fg,
            fg_off: theme.bg,
            bg: theme.bg,
            bordercolor: theme.fg,
            fg_center: None,
            fg_end: None,
        }
    }

    /// Apply new range bounds, reconciling in two phases
    ///
    /// The new minimum is validated against the *old* maximum before the
    /// new maximum is applied; each phase nudges the opposing bound by
    /// epsilon when the range would collapse and clamps `value` back into
    /// range.
    pub fn apply_range(&mut self, new_min: Option<f64>, new_max: Option<f64>) {
        if let Some(min) = new_min {
            self.min_value = min;
        }
        if self.max_value <= self.min_value {
            self.max_value += RANGE_EPSILON;
        }
        if self.value < self.min_value {
            self.value = self.min_value;
        }

        if let Some(max) = new_max {
            self.max_value = max;
        }
        if self.min_value >= self.max_value {
            self.min_value = self.max_value - RANGE_EPSILON;
        }
        if self.value > self.max_value {
            self.value = self.max_value;
        }
    }

    /// Store a value, clamped into the current range
    pub fn set_value(&mut self, raw: f64) {
        self.value = raw.clamp(self.min_value, self.max_value);
    }

    /// Fraction of the range currently filled, in 0..=1
    pub fn fill_fraction(&self) -> f64 {
        (self.value - self.min_value) / (self.max_value - self.min_value)
    }

    /// Whether this bar has gradient stops configured
    pub fn has_gradient(&self) -> bool {
        self.fg_center.is_some() || self.fg_end.is_some()
    }
}
