// Render Pipeline
// Turns bar values plus computed geometry into ordered draw commands

use crate::config::WidgetConfig;
use crate::core::{Bar, BarRegistry};
use crate::draw::{DrawContext, GradientAxis, GradientFill, PixelRect};
use crate::layout::{self, round_half_up, Alignment, CanvasSize, Layout};

/// Emit draw commands for every bar in registry order
///
/// Returns the total canvas width consumed. Stateless: everything is
/// recomputed from `(config, bars, canvas)` on each call. An empty
/// registry emits nothing and returns 0.
pub fn render(
    config: &WidgetConfig,
    bars: &BarRegistry,
    canvas: CanvasSize,
    offset: i32,
    align: Alignment,
    ctx: &mut dyn DrawContext,
) -> i32 {
    let Some(lay) = layout::compute(config, bars.len(), canvas, offset, align) else {
        return 0;
    };

    if config.vertical {
        render_vertical(config, bars, &lay, ctx);
    } else {
        render_horizontal(config, bars, &lay, ctx);
    }

    lay.extent
}

/// Filled length in pixels for one bar
///
/// Quantized mode snaps to whole tick cells, turning a tick on once half
/// of it is reached; continuous mode rounds to the nearest pixel.
fn progress_px(bar: &Bar, config: &WidgetConfig, lay: &Layout) -> i32 {
    let fraction = bar.fill_fraction();
    if config.ticks_count > 0 && config.ticks_gap > 0 {
        let ticks = round_half_up(config.ticks_count as f64 * fraction);
        if ticks > 0 {
            ticks * lay.unit - config.ticks_gap
        } else {
            0
        }
    } else {
        round_half_up(lay.length as f64 * fraction)
    }
}

fn gradient_for(bar: &Bar, axis: GradientAxis) -> GradientFill {
    GradientFill {
        axis,
        from: bar.fg,
        center: bar.fg_center,
        end: bar.fg_end,
    }
}

/// Border box around one bar's fill area: background fill under the
/// padding, then the stroked outline
fn emit_border(bar: &Bar, config: &WidgetConfig, fill: PixelRect, ctx: &mut dyn DrawContext) {
    if config.border_width <= 0 {
        return;
    }
    let frame = config.border_width + config.border_padding;
    let rect = PixelRect::new(
        fill.x - frame,
        fill.y - frame,
        fill.width + 2 * frame,
        fill.height + 2 * frame,
    );
    if config.border_padding > 0 {
        ctx.fill_rect(rect, bar.bg);
    }
    ctx.stroke_rect(rect, config.border_width, bar.bordercolor);
}

/// Vertical mode: bars side by side, each filling bottom-to-top
fn render_vertical(
    config: &WidgetConfig,
    bars: &BarRegistry,
    lay: &Layout,
    ctx: &mut dyn DrawContext,
) {
    let mut bar_x = lay.fill_x;

    for bar in bars.iter() {
        let mut progress = progress_px(bar, config, lay);

        emit_border(
            bar,
            config,
            PixelRect::new(bar_x, lay.fill_y, lay.thickness, lay.length),
            ctx,
        );

        // gradient spans the whole fill box; reversal flips its direction
        let axis = if bar.reverse {
            progress = lay.length - progress;
            GradientAxis { x: bar_x, y: lay.fill_y, dx: 0, dy: lay.length }
        } else {
            GradientAxis { x: bar_x, y: lay.fill_y + lay.length, dx: 0, dy: -lay.length }
        };

        // bottom segment: the geometrically filled side
        if progress > 0 {
            let rect = PixelRect::new(
                bar_x,
                lay.fill_y + lay.length - progress,
                lay.thickness,
                progress,
            );
            if bar.reverse {
                ctx.fill_rect(rect, bar.fg_off);
            } else {
                ctx.fill_gradient(rect, gradient_for(bar, axis));
            }
        }

        // top segment: the remainder
        if lay.length - progress > 0 {
            let rect = PixelRect::new(bar_x, lay.fill_y, lay.thickness, lay.length - progress);
            if bar.reverse {
                ctx.fill_gradient(rect, gradient_for(bar, axis));
            } else {
                ctx.fill_rect(rect, bar.fg_off);
            }
        }

        // tick separators overlay the fill so they always show through
        if config.ticks_count > 0 && config.ticks_gap > 0 {
            let mut y = lay.fill_y + lay.unit - config.ticks_gap;
            while y <= lay.fill_y + lay.length - config.ticks_gap {
                ctx.fill_rect(
                    PixelRect::new(bar_x, y, lay.thickness, config.ticks_gap),
                    bar.bg,
                );
                y += lay.unit;
            }
        }

        bar_x += lay.stride;
    }
}

/// Horizontal mode: bars stacked top-to-bottom, each filling left-to-right
fn render_horizontal(
    config: &WidgetConfig,
    bars: &BarRegistry,
    lay: &Layout,
    ctx: &mut dyn DrawContext,
) {
    let mut bar_y = lay.fill_y;

    for bar in bars.iter() {
        let mut progress = progress_px(bar, config, lay);

        emit_border(
            bar,
            config,
            PixelRect::new(lay.fill_x, bar_y, lay.length, lay.thickness),
            ctx,
        );

        let axis = if bar.reverse {
            progress = lay.length - progress;
            GradientAxis { x: lay.fill_x + lay.length, y: bar_y, dx: -lay.length, dy: 0 }
        } else {
            GradientAxis { x: lay.fill_x, y: bar_y, dx: lay.length, dy: 0 }
        };

        // left segment: the geometrically filled side
        if progress > 0 {
            let rect = PixelRect::new(lay.fill_x, bar_y, progress, lay.thickness);
            if bar.reverse {
                ctx.fill_rect(rect, bar.fg_off);
            } else {
                ctx.fill_gradient(rect, gradient_for(bar, axis));
            }
        }

        // right segment: the remainder
        if lay.length - progress > 0 {
            let rect = PixelRect::new(
                lay.fill_x + progress,
                bar_y,
                lay.length - progress,
                lay.thickness,
            );
            if bar.reverse {
                ctx.fill_gradient(rect, gradient_for(bar, axis));
            } else {
                ctx.fill_rect(rect, bar.fg_off);
            }
        }

        if config.ticks_count > 0 && config.ticks_gap > 0 {
            let mut x = lay.fill_x + lay.unit - config.ticks_gap;
            while x <= lay.fill_x + lay.length - config.ticks_gap {
                ctx.fill_rect(
                    PixelRect::new(x, bar_y, config.ticks_gap, lay.thickness),
                    bar.bg,
                );
                x += lay.unit;
            }
        }

        bar_y += lay.stride;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Theme;
    use crate::draw::CommandRecorder;
    use ratatui::style::Color;

    // height = 1.0 keeps the vertical centering math out of the way
    fn config() -> WidgetConfig {
        WidgetConfig {
            height: 1.0,
            ..WidgetConfig::default()
        }
    }

    fn one_bar(value: f64) -> BarRegistry {
        let mut bars = BarRegistry::new();
        bars.upsert("cpu", Theme::default()).set_value(value);
        bars
    }

    fn canvas() -> CanvasSize {
        CanvasSize::new(100, 20)
    }

    #[test]
    fn test_empty_registry_draws_nothing() {
        let mut rec = CommandRecorder::new();
        let extent = render(
            &config(),
            &BarRegistry::new(),
            canvas(),
            0,
            Alignment::Left,
            &mut rec,
        );
        assert_eq!(extent, 0);
        assert!(rec.commands.is_empty());
    }

    #[test]
    fn test_horizontal_half_fill_is_39_of_78() {
        // width=80, border_width=1, border_padding=0: 78 usable px,
        // value 50/100 -> (78 * 0.5 + 0.5) truncated = 39
        let mut rec = CommandRecorder::new();
        let extent = render(&config(), &one_bar(50.0), canvas(), 0, Alignment::Left, &mut rec);
        assert_eq!(extent, 80);

        let filled = rec.gradient_fills();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0], PixelRect::new(1, 1, 39, 18));

        let off = rec.fills_with(Theme::default().bg);
        assert_eq!(off.len(), 1);
        assert_eq!(off[0], PixelRect::new(40, 1, 39, 18));
    }

    #[test]
    fn test_segments_are_complementary_both_reverse_states() {
        for reverse in [false, true] {
            let mut bars = one_bar(37.0);
            bars.upsert("cpu", Theme::default()).reverse = reverse;
            let mut rec = CommandRecorder::new();
            render(&config(), &bars, canvas(), 0, Alignment::Left, &mut rec);

            let total: i32 = rec
                .gradient_fills()
                .iter()
                .chain(rec.fills_with(Theme::default().bg).iter())
                .map(|r| r.width)
                .sum();
            assert_eq!(total, 78);
        }
    }

    #[test]
    fn test_reverse_mirrors_fill_and_swaps_colors() {
        let mut bars = one_bar(50.0);
        bars.upsert("cpu", Theme::default()).reverse = true;
        let mut rec = CommandRecorder::new();
        render(&config(), &bars, canvas(), 0, Alignment::Left, &mut rec);

        // the low end becomes the off-colored side, the high end the gradient side
        let off = rec.fills_with(Theme::default().bg);
        assert_eq!(off, vec![PixelRect::new(1, 1, 39, 18)]);
        let filled = rec.gradient_fills();
        assert_eq!(filled, vec![PixelRect::new(40, 1, 39, 18)]);
    }

    #[test]
    fn test_reverse_flips_gradient_axis() {
        let mut bars = one_bar(50.0);
        bars.upsert("cpu", Theme::default()).reverse = true;
        let mut rec = CommandRecorder::new();
        render(&config(), &bars, canvas(), 0, Alignment::Left, &mut rec);

        let axis = rec
            .commands
            .iter()
            .find_map(|c| match c {
                crate::draw::DrawCommand::FillGradient { gradient, .. } => Some(gradient.axis),
                _ => None,
            })
            .unwrap();
        assert_eq!(axis.x, 79); // anchored at the high end
        assert_eq!(axis.dx, -78); // running backwards
    }

    #[test]
    fn test_full_value_fills_whole_length_in_both_directions() {
        for reverse in [false, true] {
            let mut bars = one_bar(100.0);
            bars.upsert("cpu", Theme::default()).reverse = reverse;
            let mut rec = CommandRecorder::new();
            render(&config(), &bars, canvas(), 0, Alignment::Left, &mut rec);

            // full fill leaves no off-colored remainder either way
            assert!(rec.fills_with(Theme::default().bg).is_empty());
            assert_eq!(rec.gradient_fills(), vec![PixelRect::new(1, 1, 78, 18)]);
        }
    }

    #[test]
    fn test_progress_monotonic_in_value() {
        let mut last = -1;
        for v in 0..=100 {
            let mut rec = CommandRecorder::new();
            render(&config(), &one_bar(v as f64), canvas(), 0, Alignment::Left, &mut rec);
            let filled = rec.gradient_fills().first().map_or(0, |r| r.width);
            assert!(filled >= last, "fill shrank at value {v}");
            last = filled;
        }
        assert_eq!(last, 78);
    }

    #[test]
    fn test_tick_quantization_snaps_fill() {
        let mut c = config();
        c.ticks_count = 10;
        c.ticks_gap = 1;
        // unit = (78+1)/10 = 7, length = 69; value 34/100 -> 3 ticks
        let mut rec = CommandRecorder::new();
        render(&c, &one_bar(34.0), canvas(), 0, Alignment::Left, &mut rec);
        let filled = rec.gradient_fills();
        assert_eq!(filled[0].width, 20); // 3 * 7 - 1

        // interior separators: one per cell boundary
        let gaps = rec.fills_with(Theme::default().bg);
        let separators: Vec<_> = gaps.iter().filter(|r| r.width == 1).collect();
        assert_eq!(separators.len(), 9); // ticks_count - 1
        assert_eq!(separators[0].x, 7); // fill_x + unit - ticks_gap
    }

    #[test]
    fn test_zero_ticks_reached_draws_no_fill() {
        let mut c = config();
        c.ticks_count = 10;
        c.ticks_gap = 1;
        let mut rec = CommandRecorder::new();
        render(&c, &one_bar(2.0), canvas(), 0, Alignment::Left, &mut rec);
        assert!(rec.gradient_fills().is_empty()); // 0 ticks -> no filled segment
    }

    #[test]
    fn test_border_and_padding_commands() {
        let mut c = config();
        c.border_padding = 2;
        let mut bars = one_bar(0.0);
        {
            let bar = bars.upsert("cpu", Theme::default());
            bar.bg = Color::Blue;
            bar.bordercolor = Color::Red;
        }
        let mut rec = CommandRecorder::new();
        render(&c, &bars, canvas(), 0, Alignment::Left, &mut rec);

        // padded background first, then the stroked outline on top of it
        match &rec.commands[0] {
            crate::draw::DrawCommand::FillRect { rect, color } => {
                assert_eq!(*color, Color::Blue);
                assert_eq!(rect.x, 0);
                assert_eq!(rect.width, 74 + 2 * 3); // fill + border/padding frame
            }
            other => panic!("expected padded background, got {other:?}"),
        }
        match &rec.commands[1] {
            crate::draw::DrawCommand::StrokeRect { line_width, color, .. } => {
                assert_eq!(*line_width, 1);
                assert_eq!(*color, Color::Red);
            }
            other => panic!("expected border stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_vertical_two_bars_positions() {
        let mut c = config();
        c.vertical = true;
        c.width = 50;
        c.border_padding = 1;
        let mut bars = BarRegistry::new();
        bars.upsert("a", Theme::default()).set_value(100.0);
        bars.upsert("b", Theme::default()).set_value(100.0);

        let mut rec = CommandRecorder::new();
        let extent = render(&c, &bars, CanvasSize::new(100, 40), 0, Alignment::Left, &mut rec);
        assert_eq!(extent, 50);

        let filled = rec.gradient_fills();
        assert_eq!(filled.len(), 2);
        assert_eq!(filled[0].x, 2); // first bar after border + padding
        assert_eq!(filled[1].x, 2 + 26); // advanced by one stride
        assert_eq!(filled[0].width, 20);
        // both bars full height: fill box spans length px upward
        assert_eq!(filled[0].height, filled[1].height);
    }

    #[test]
    fn test_vertical_fill_grows_upward() {
        let mut c = config();
        c.vertical = true;
        c.border_width = 0;
        let bars = one_bar(25.0);

        let mut rec = CommandRecorder::new();
        render(&c, &bars, CanvasSize::new(100, 40), 0, Alignment::Left, &mut rec);

        let filled = rec.gradient_fills()[0];
        let off = rec.fills_with(Theme::default().bg)[0];
        // filled segment sits at the bottom, remainder above it
        assert_eq!(filled.height, 10); // 40 * 25% = 10
        assert_eq!(off.height, 30);
        assert_eq!(off.y + off.height, filled.y);
    }
}
