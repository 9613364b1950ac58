// Multibar
// Multi-bar progress indicator widget core: layout, rendering, and bar registry

// Core infrastructure - bar state and defaults
pub mod core;

// Configuration - layout parameters, property sets, presets
pub mod config;

// Draw boundary - rectangles, fill descriptions, context traits
pub mod draw;

// Layout engine - pure geometry computation
pub mod layout;

// Render pipeline - per-bar draw command emission
pub mod render;

// Widget facade - typed capability interface
pub mod widget;

// Re-export commonly used items for convenience
pub use config::{load_preset, BarProps, Preset, PresetError, WidgetConfig, WidgetProps};
pub use core::{Bar, BarRegistry, Theme};
pub use draw::{ColorResolver, CommandRecorder, DrawCommand, DrawContext, GradientFill, PixelRect};
pub use layout::{Alignment, CanvasSize};
pub use widget::ProgressBar;
