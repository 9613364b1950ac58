// Draw Boundary
// Pixel rectangles, fill descriptions, and the external draw context seam

use ratatui::style::Color;

/// Axis-aligned rectangle in pixel coordinates
///
/// Signed components: intermediate layout math can go negative when the
/// canvas is smaller than the configured geometry, and emission guards
/// check for that rather than the rectangle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether this rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Gradient anchor: origin plus a signed extent along each axis
///
/// The gradient runs from `(x, y)` to `(x + dx, y + dy)`; a negative
/// extent flips the direction (used for reversed bars and for
/// bottom-to-top vertical fills).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientAxis {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

/// Fill interpolating through up to three color stops along an axis
///
/// `center` and `end` are optional; with both absent the fill is
/// equivalent to solid `from`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientFill {
    pub axis: GradientAxis,
    pub from: Color,
    pub center: Option<Color>,
    pub end: Option<Color>,
}

/// One primitive drawing operation decided by the render pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid-fill a rectangle
    FillRect { rect: PixelRect, color: Color },
    /// Stroke a rectangle outline at the given line width
    StrokeRect {
        rect: PixelRect,
        line_width: i32,
        color: Color,
    },
    /// Gradient-fill a rectangle
    FillGradient {
        rect: PixelRect,
        gradient: GradientFill,
    },
}

/// External drawing context executing primitive operations
///
/// The core decides which rectangles to draw and with which fill; how
/// pixels are blitted is entirely the implementor's concern.
pub trait DrawContext {
    fn fill_rect(&mut self, rect: PixelRect, color: Color);
    fn stroke_rect(&mut self, rect: PixelRect, line_width: i32, color: Color);
    fn fill_gradient(&mut self, rect: PixelRect, gradient: GradientFill);
}

/// Draw context that records commands for inspection or deferred execution
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles of all solid fills with the given color
    pub fn fills_with(&self, color: Color) -> Vec<PixelRect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Rectangles of all gradient fills
    pub fn gradient_fills(&self) -> Vec<PixelRect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillGradient { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl DrawContext for CommandRecorder {
    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: PixelRect, line_width: i32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            line_width,
            color,
        });
    }

    fn fill_gradient(&mut self, rect: PixelRect, gradient: GradientFill) {
        self.commands.push(DrawCommand::FillGradient { rect, gradient });
    }
}

/// External color specification resolver
///
/// Turning a spec string ("red", "#ff8800", ...) into a concrete color
/// is host territory; `None` means the spec did not resolve and the
/// caller keeps its previous color.
pub trait ColorResolver {
    fn resolve(&self, spec: &str) -> Option<Color>;
}
