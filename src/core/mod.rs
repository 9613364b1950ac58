// Core infrastructure module
// Bar state, ordered registry, and default color context

pub mod bar;
pub mod registry;
pub mod theme;

pub use bar::{Bar, RANGE_EPSILON};
pub use registry::BarRegistry;
pub use theme::Theme;
