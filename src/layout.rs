// Layout Engine
// Pure geometry: orientation split, space division, tick quantization

use crate::config::WidgetConfig;

/// Horizontal placement of the widget within the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Canvas size handed in by the host for one draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Computed geometry shared by every bar of one draw call
///
/// "Primary" is the axis along which multiple bars are arranged,
/// "secondary" the axis along which each bar's own fill progresses.
/// Vertical mode: primary = horizontal, secondary = vertical.
/// Horizontal mode: primary = vertical, secondary = horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Per-bar extent along the primary axis
    pub thickness: i32,
    /// Fill extent along the secondary axis (tick-rounded when quantized)
    pub length: i32,
    /// Tick cell length (tick + gap); 0 when continuous
    pub unit: i32,
    /// Total canvas width consumed by the widget
    pub extent: i32,
    /// Top-left corner of the first bar's fill box
    pub fill_x: i32,
    pub fill_y: i32,
    /// Primary-axis advance between consecutive bars
    pub stride: i32,
}

/// Round half away from zero toward positive (C-style `(int)(v + 0.5)`)
///
/// All rounded layout quantities are non-negative by construction.
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5) as i32
}

/// Snap a fill length down to a whole number of tick cells
///
/// Returns `(effective_length, unit)`; a unit includes one tick plus one
/// gap. Quantization is off when either count or gap is zero.
fn quantize(length: i32, ticks_count: i32, ticks_gap: i32) -> (i32, i32) {
    if ticks_count > 0 && ticks_gap > 0 {
        let unit = (length + ticks_gap) / ticks_count;
        (unit * ticks_count - ticks_gap, unit)
    } else {
        (length, 0)
    }
}

/// Horizontal position of the widget for the given alignment
pub fn align_offset(canvas_width: i32, extent: i32, offset: i32, align: Alignment) -> i32 {
    match align {
        Alignment::Left => offset,
        Alignment::Center => (canvas_width - extent) / 2,
        Alignment::Right => canvas_width - extent - offset,
    }
}

/// Compute geometry for one draw call
///
/// Stateless: the tick unit is recomputed here for the active
/// orientation on every call. Returns `None` for an empty bar set, which
/// callers treat as a no-op draw.
pub fn compute(
    config: &WidgetConfig,
    bar_count: usize,
    canvas: CanvasSize,
    offset: i32,
    align: Alignment,
) -> Option<Layout> {
    if bar_count == 0 {
        return None;
    }
    let n = bar_count as i32;
    // border + padding, one side
    let frame = config.border_width + config.border_padding;

    let (thickness, length, unit, extent) = if config.vertical {
        // primary axis horizontal: divide the configured width across bars
        let thickness = (config.width - 2 * frame * n - config.gap * (n - 1)) / n;
        let extent = n * (thickness + 2 * frame + config.gap) - config.gap;
        let raw = round_half_up(canvas.height as f64 * config.height) - 2 * frame;
        let (length, unit) = quantize(raw, config.ticks_count, config.ticks_gap);
        (thickness, length, unit, extent)
    } else {
        // primary axis vertical: all bars share the configured width
        let raw = config.width - 2 * frame;
        let (length, unit) = quantize(raw, config.ticks_count, config.ticks_gap);
        let extent = length + 2 * frame;
        let thickness = round_half_up(
            (canvas.height as f64 * config.height
                - (n * 2 * frame) as f64
                - (config.gap * (n - 1)) as f64)
                / n as f64,
        );
        (thickness, length, unit, extent)
    };

    let area_x = align_offset(canvas.width, extent, offset, align);
    let fill_x = area_x + frame;
    let fill_y = (canvas.height as f64 * (1.0 - config.height)) as i32 / 2 + frame;
    let stride = thickness + config.gap + 2 * frame;

    Some(Layout {
        thickness,
        length,
        unit,
        extent,
        fill_x,
        fill_y,
        stride,
    })
}
