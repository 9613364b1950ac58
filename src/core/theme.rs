// Theme Context
// Default foreground/background colors handed to newly created bars

use ratatui::style::Color;

/// Default color context for bar creation
///
/// Replaces ambient global theme state: callers pass a theme explicitly
/// wherever a bar may be created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Default foreground (bar fill, border)
    pub fg: Color,
    /// Default background (unfilled region, border padding, tick gaps)
    pub bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
        }
    }
}

impl Theme {
    /// Create a theme with explicit colors
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}
