// Progress Bar Widget
// Typed capability interface over config + registry: configure, configure_bar,
// add_value, draw

use crate::config::{BarProps, Preset, WidgetConfig, WidgetProps};
use crate::core::{Bar, BarRegistry, Theme};
use crate::draw::{ColorResolver, DrawContext};
use crate::layout::{Alignment, CanvasSize};
use crate::render;

/// Multi-bar progress indicator widget
///
/// Owns the shared layout config and the bar registry; layout and
/// rendering are recomputed from scratch on every `draw` call. All
/// mutation is normalizing and infallible; each mutation raises the
/// `needs_redraw` flag so the host can schedule an invalidation.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    config: WidgetConfig,
    bars: BarRegistry,
    theme: Theme,
    align: Alignment,
    needs_redraw: bool,
}

impl ProgressBar {
    /// Create a widget with default config and the given color context
    pub fn new(theme: Theme) -> Self {
        Self {
            config: WidgetConfig::default(),
            bars: BarRegistry::new(),
            theme,
            align: Alignment::Left,
            needs_redraw: false,
        }
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Apply a partial widget property table; unspecified keys keep
    /// their prior values
    pub fn configure(&mut self, props: &WidgetProps) {
        props.apply(&mut self.config);
        self.needs_redraw = true;
    }

    /// Apply a partial bar property table, creating the bar on first
    /// reference
    ///
    /// Color specs that fail to resolve leave the existing color
    /// unchanged; range updates reconcile min against the old max before
    /// the new max applies.
    pub fn configure_bar(&mut self, title: &str, props: &BarProps, colors: &dyn ColorResolver) {
        let bar = self.bars.upsert(title, self.theme);

        if let Some(c) = props.fg.as_deref().and_then(|s| colors.resolve(s)) {
            bar.fg = c;
        }
        if let Some(c) = props.bg.as_deref().and_then(|s| colors.resolve(s)) {
            bar.bg = c;
        }
        if let Some(c) = props.fg_off.as_deref().and_then(|s| colors.resolve(s)) {
            bar.fg_off = c;
        }
        if let Some(c) = props.border_color.as_deref().and_then(|s| colors.resolve(s)) {
            bar.bordercolor = c;
        }
        if let Some(c) = props.fg_center.as_deref().and_then(|s| colors.resolve(s)) {
            bar.fg_center = Some(c);
        }
        if let Some(c) = props.fg_end.as_deref().and_then(|s| colors.resolve(s)) {
            bar.fg_end = Some(c);
        }

        bar.apply_range(props.min_value, props.max_value);
        if let Some(reverse) = props.reverse {
            bar.reverse = reverse;
        }

        self.needs_redraw = true;
    }

    /// Set a bar's value, clamped into range, creating the bar on first
    /// reference
    pub fn add_value(&mut self, title: &str, value: f64) {
        self.bars.upsert(title, self.theme).set_value(value);
        self.needs_redraw = true;
    }

    /// Apply a loaded preset: widget properties plus bars in file order
    pub fn apply_preset(&mut self, preset: &Preset, colors: &dyn ColorResolver) {
        self.configure(&preset.widget);
        for entry in &preset.bars {
            self.configure_bar(&entry.title, &entry.props, colors);
        }
    }

    /// Emit draw commands for the current state and clear the redraw flag
    ///
    /// Returns the total canvas width consumed; an empty widget emits
    /// nothing and returns 0.
    pub fn draw(&mut self, canvas: CanvasSize, offset: i32, ctx: &mut dyn DrawContext) -> i32 {
        self.needs_redraw = false;
        render::render(&self.config, &self.bars, canvas, offset, self.align, ctx)
    }

    /// Whether a mutation happened since the last draw
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Current layout config
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Look up a bar by title
    pub fn bar(&self, title: &str) -> Option<&Bar> {
        self.bars.get(title)
    }

    /// Bars in draw order
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Release all bars (widget teardown)
    pub fn wipe(&mut self) {
        self.bars.wipe();
        self.needs_redraw = true;
    }
}
