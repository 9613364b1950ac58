// Multibar Demo
// Terminal preview: maps pixel draw commands onto terminal cells

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    style::Color,
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use multibar::{
    load_preset, BarProps, CanvasSize, ColorResolver, DrawContext, GradientFill, PixelRect,
    ProgressBar, Theme, WidgetProps,
};

// ┌──────────────────────────────────────────────────────────────────────────┐
// │                       COLOR RESOLUTION (demo-side)                       │
// └──────────────────────────────────────────────────────────────────────────┘

/// Demo resolver: named colors and "#rrggbb" hex specs, as RGB so the
/// gradient lerp has channels to work with
struct DemoColors;

impl ColorResolver for DemoColors {
    fn resolve(&self, spec: &str) -> Option<Color> {
        if let Some(hex) = spec.strip_prefix('#') {
            if hex.len() == 6 {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                return Some(Color::Rgb(r, g, b));
            }
            return None;
        }
        match spec {
            "red" => Some(Color::Rgb(0xd0, 0x30, 0x30)),
            "green" => Some(Color::Rgb(0x30, 0xc0, 0x40)),
            "blue" => Some(Color::Rgb(0x30, 0x60, 0xd0)),
            "yellow" => Some(Color::Rgb(0xd0, 0xc0, 0x30)),
            "orange" => Some(Color::Rgb(0xe0, 0x80, 0x20)),
            "cyan" => Some(Color::Rgb(0x30, 0xb0, 0xb0)),
            "white" => Some(Color::Rgb(0xe8, 0xe8, 0xe8)),
            "gray" => Some(Color::Rgb(0x60, 0x60, 0x60)),
            "black" => Some(Color::Rgb(0x10, 0x10, 0x10)),
            _ => None,
        }
    }
}

// ┌──────────────────────────────────────────────────────────────────────────┐
// │                    CELL CANVAS (external draw context)                   │
// └──────────────────────────────────────────────────────────────────────────┘

/// Draw context mapping one pixel to one terminal cell, painting with
/// cell background colors
struct CellCanvas<'a> {
    buf: &'a mut Buffer,
    /// Rows above the canvas (title line)
    y_origin: i32,
}

impl CellCanvas<'_> {
    fn paint(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let pos = (x as u16, (y + self.y_origin) as u16);
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(' ').set_bg(color);
        }
    }
}

impl DrawContext for CellCanvas<'_> {
    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                self.paint(x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: PixelRect, line_width: i32, color: Color) {
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                let edge = x < rect.x + line_width
                    || x >= rect.x + rect.width - line_width
                    || y < rect.y + line_width
                    || y >= rect.y + rect.height - line_width;
                if edge {
                    self.paint(x, y, color);
                }
            }
        }
    }

    fn fill_gradient(&mut self, rect: PixelRect, gradient: GradientFill) {
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                self.paint(x, y, gradient_color(&gradient, x, y));
            }
        }
    }
}

/// Color of the gradient at one pixel: project onto the axis, then
/// interpolate through the configured stops
fn gradient_color(gradient: &GradientFill, x: i32, y: i32) -> Color {
    let axis = gradient.axis;
    let t = if axis.dx != 0 {
        (x - axis.x) as f64 / axis.dx as f64
    } else if axis.dy != 0 {
        (y - axis.y) as f64 / axis.dy as f64
    } else {
        0.0
    };
    let t = t.clamp(0.0, 1.0);

    match (gradient.center, gradient.end) {
        (None, None) => gradient.from,
        (Some(mid), None) | (None, Some(mid)) => lerp(gradient.from, mid, t),
        (Some(center), Some(end)) => {
            if t < 0.5 {
                lerp(gradient.from, center, t * 2.0)
            } else {
                lerp(center, end, (t - 0.5) * 2.0)
            }
        }
    }
}

fn lerp(a: Color, b: Color, t: f64) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        // non-RGB stops cannot interpolate; snap to the nearer one
        _ => {
            if t < 0.5 {
                a
            } else {
                b
            }
        }
    }
}

// ┌──────────────────────────────────────────────────────────────────────────┐
// │                             MAIN ENTRY POINT                             │
// └──────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let mut widget = build_widget()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut widget);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Build the demo widget: a preset file path may be passed as the first
/// argument, otherwise three built-in bars are configured
fn build_widget() -> Result<ProgressBar> {
    let mut widget = ProgressBar::new(Theme::new(
        Color::Rgb(0xe8, 0xe8, 0xe8),
        Color::Rgb(0x20, 0x20, 0x20),
    ));

    if let Some(path) = std::env::args().nth(1) {
        let preset = load_preset(&path).with_context(|| format!("loading preset {path}"))?;
        widget.apply_preset(&preset, &DemoColors);
        return Ok(widget);
    }

    widget.configure(&WidgetProps {
        width: Some(20),
        vertical: Some(true),
        border_width: Some(1),
        border_padding: Some(1),
        gap: Some(2),
        ..Default::default()
    });
    widget.configure_bar(
        "cpu",
        &BarProps {
            fg: Some("green".into()),
            fg_center: Some("yellow".into()),
            fg_end: Some("red".into()),
            border_color: Some("gray".into()),
            ..Default::default()
        },
        &DemoColors,
    );
    widget.configure_bar(
        "mem",
        &BarProps {
            fg: Some("cyan".into()),
            border_color: Some("gray".into()),
            ..Default::default()
        },
        &DemoColors,
    );
    widget.configure_bar(
        "swap",
        &BarProps {
            fg: Some("orange".into()),
            border_color: Some("gray".into()),
            reverse: Some(true),
            ..Default::default()
        },
        &DemoColors,
    );
    Ok(widget)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    widget: &mut ProgressBar,
) -> Result<()> {
    let start = Instant::now();
    let mut ticks_on = false;

    loop {
        // animate bar values
        let t = start.elapsed().as_secs_f64();
        widget.add_value("cpu", 50.0 + 50.0 * (t * 0.9).sin());
        widget.add_value("mem", 50.0 + 50.0 * (t * 0.4 + 1.0).sin());
        widget.add_value("swap", 50.0 + 50.0 * (t * 0.2).cos());

        terminal.draw(|frame| {
            let area = frame.area();
            let canvas = CanvasSize::new(area.width as i32, area.height.saturating_sub(2) as i32);
            let mut cells = CellCanvas {
                buf: frame.buffer_mut(),
                y_origin: 2,
            };
            widget.draw(canvas, 1, &mut cells);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('v') => {
                        let vertical = !widget.config().vertical;
                        widget.configure(&WidgetProps {
                            vertical: Some(vertical),
                            width: Some(if vertical { 20 } else { 60 }),
                            ..Default::default()
                        });
                    }
                    KeyCode::Char('t') => {
                        ticks_on = !ticks_on;
                        widget.configure(&WidgetProps {
                            ticks_count: Some(if ticks_on { 10 } else { 0 }),
                            ticks_gap: Some(1),
                            ..Default::default()
                        });
                    }
                    KeyCode::Char('r') => {
                        let reversed = widget.bar("cpu").is_some_and(|b| b.reverse);
                        widget.configure_bar(
                            "cpu",
                            &BarProps {
                                reverse: Some(!reversed),
                                ..Default::default()
                            },
                            &DemoColors,
                        );
                    }
                    _ => {}
                }
            }
        }
    }
}
