// Widget Configuration
// Shared layout parameters, partial property sets, and YAML preset loading

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Shared layout parameters, one set per widget instance
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Nominal total extent along the primary axis
    pub width: i32,
    /// Pixels between adjacent bars
    pub gap: i32,
    /// Border width in pixels
    pub border_width: i32,
    /// Padding between border and fill area
    pub border_padding: i32,
    /// Gap between individual ticks
    pub ticks_gap: i32,
    /// Total number of ticks; 0 = continuous fill, no quantization
    pub ticks_count: i32,
    /// Bars laid out side by side, each filling bottom-to-top
    pub vertical: bool,
    /// Fraction of canvas extent used along the secondary axis, in (0, 1]
    pub height: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: 80,
            gap: 2,
            border_width: 1,
            border_padding: 0,
            ticks_gap: 1,
            ticks_count: 0,
            vertical: false,
            height: 0.80,
        }
    }
}

/// Partial widget property table; unspecified keys retain prior values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WidgetProps {
    pub gap: Option<i32>,
    pub ticks_count: Option<i32>,
    pub ticks_gap: Option<i32>,
    pub border_padding: Option<i32>,
    pub border_width: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<f64>,
    pub vertical: Option<bool>,
}

impl WidgetProps {
    /// Apply the present keys onto a config
    ///
    /// `height` is normalized rather than rejected: values above 1 clamp
    /// to 1.0, values at or below 0 are ignored.
    pub fn apply(&self, config: &mut WidgetConfig) {
        if let Some(gap) = self.gap {
            config.gap = gap;
        }
        if let Some(ticks_count) = self.ticks_count {
            config.ticks_count = ticks_count;
        }
        if let Some(ticks_gap) = self.ticks_gap {
            config.ticks_gap = ticks_gap;
        }
        if let Some(border_padding) = self.border_padding {
            config.border_padding = border_padding;
        }
        if let Some(border_width) = self.border_width {
            config.border_width = border_width;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            if height > 0.0 {
                config.height = height.min(1.0);
            }
        }
        if let Some(vertical) = self.vertical {
            config.vertical = vertical;
        }
    }
}

/// Partial bar property table
///
/// Color fields carry unresolved specification strings; resolution
/// happens at the widget boundary and failures keep the previous color.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BarProps {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub fg_off: Option<String>,
    pub border_color: Option<String>,
    pub fg_center: Option<String>,
    pub fg_end: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub reverse: Option<bool>,
}

/// One named bar entry inside a preset file
#[derive(Debug, Clone, Deserialize)]
pub struct BarPreset {
    pub title: String,
    #[serde(flatten)]
    pub props: BarProps,
}

/// A widget preset: widget properties plus an ordered list of bars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub widget: WidgetProps,
    pub bars: Vec<BarPreset>,
}

/// Errors from preset file loading
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse preset file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load a preset from a YAML file
pub fn load_preset(path: impl AsRef<Path>) -> Result<Preset, PresetError> {
    let contents = fs::read_to_string(path)?;
    let preset: Preset = serde_yaml::from_str(&contents)?;
    Ok(preset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_retain_unspecified_keys() {
        let mut config = WidgetConfig::default();
        let props = WidgetProps {
            width: Some(50),
            vertical: Some(true),
            ..Default::default()
        };
        props.apply(&mut config);
        assert_eq!(config.width, 50);
        assert!(config.vertical);
        assert_eq!(config.gap, 2); // untouched default
        assert_eq!(config.border_width, 1); // untouched default
    }

    #[test]
    fn test_height_normalization() {
        let mut config = WidgetConfig::default();

        WidgetProps { height: Some(1.5), ..Default::default() }.apply(&mut config);
        assert_eq!(config.height, 1.0); // clamped down

        WidgetProps { height: Some(-0.2), ..Default::default() }.apply(&mut config);
        assert_eq!(config.height, 1.0); // non-positive value ignored

        WidgetProps { height: Some(0.5), ..Default::default() }.apply(&mut config);
        assert_eq!(config.height, 0.5);
    }

    #[test]
    fn test_preset_parses_ordered_bars() {
        let yaml = r##"
widget:
  width: 60
  ticks_count: 10
  ticks_gap: 1
bars:
  - title: cpu
    fg: "#ff8800"
    fg_end: "#ff0000"
    max_value: 100
  - title: mem
    reverse: true
    min_value: 10
"##;
        let preset: Preset = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(preset.widget.width, Some(60));
        assert_eq!(preset.bars.len(), 2);
        assert_eq!(preset.bars[0].title, "cpu");
        assert_eq!(preset.bars[0].props.fg.as_deref(), Some("#ff8800"));
        assert_eq!(preset.bars[1].title, "mem");
        assert_eq!(preset.bars[1].props.reverse, Some(true));
        assert_eq!(preset.bars[1].props.min_value, Some(10.0));
    }

    #[test]
    fn test_empty_preset_is_valid() {
        let preset: Preset = serde_yaml::from_str("{}").unwrap();
        assert!(preset.bars.is_empty());
        assert!(preset.widget.width.is_none());
    }
}
