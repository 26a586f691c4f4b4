// File: crates/pricechart-render-skia/src/draw.rs
// Summary: Canvas drawing for bar and line layouts (axes, bars, polylines, leader lines, labels).

use pricechart_core::geometry::{is_finite_point, Rect};
use pricechart_core::layout::{AxisTitle, BarChartLayout, LineChartLayout, Tick};
use pricechart_core::ChartModel;
use skia_safe as skia;

use crate::text::{Anchor, Baseline, TextShaper};
use crate::Theme;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
const TICK_FONT: f32 = 10.0;
const BAR_TICK_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 14.0;
const SERIES_LABEL_FONT: f32 = 10.0;

/// Everything the draw helpers share for one frame.
pub(crate) struct Frame<'a> {
    pub canvas: &'a skia::Canvas,
    pub theme: &'a Theme,
    pub text: Option<&'a TextShaper>,
}

pub(crate) fn draw_model(frame: &Frame<'_>, model: &ChartModel) {
    frame.canvas.clear(frame.theme.background);
    match model {
        ChartModel::Bar(layout) => draw_bar_chart(frame, layout),
        ChartModel::Line(layout) => draw_line_chart(frame, layout),
    }
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_bar_chart(frame: &Frame<'_>, layout: &BarChartLayout) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(frame.theme.bar_fill);

    for bar in layout.bars.iter().filter(|b| b.is_drawable()) {
        let rect = skia::Rect::from_xywh(bar.x, bar.y, bar.width, bar.height.max(0.0));
        frame.canvas.draw_rect(rect, &fill);
    }

    draw_value_axis(frame, &layout.plot, &layout.y_ticks);
    draw_category_axis(frame, &layout.plot, &layout.x_ticks, layout.x_tick_rotation_deg, BAR_TICK_FONT);
    draw_title(frame, &layout.x_title);
    draw_title(frame, &layout.y_title);
}

fn draw_line_chart(frame: &Frame<'_>, layout: &LineChartLayout) {
    draw_value_axis(frame, &layout.plot, &layout.y_ticks);
    draw_category_axis(frame, &layout.plot, &layout.x_ticks, 0.0, TICK_FONT);

    let mut leader = stroke(frame.theme.leader, 1.0);
    leader.set_path_effect(skia::PathEffect::dash(&[2.0, 2.0], 0.0));

    for series in &layout.series {
        let color = frame.theme.series_color(series.color_index);
        let line = stroke(color, 2.0);
        // a NaN mean breaks the line; segments touching it are skipped
        for pair in series.points.windows(2) {
            if is_finite_point(pair[0]) && is_finite_point(pair[1]) {
                frame.canvas.draw_line(pair[0], pair[1], &line);
            }
        }

        let Some(label) = &series.label else { continue };
        if !is_finite_point(label.anchor) || !label.y.is_finite() {
            continue;
        }
        frame.canvas.draw_line(label.anchor, label.leader_end, &leader);
        if let Some(text) = frame.text {
            text.draw(
                frame.canvas,
                &label.text,
                label.x,
                label.y,
                SERIES_LABEL_FONT,
                color,
                Anchor::Start,
                Baseline::Middle,
            );
        }
    }

    draw_title(frame, &layout.x_title);
    draw_title(frame, &layout.y_title);
}

fn draw_value_axis(frame: &Frame<'_>, plot: &Rect, ticks: &[Tick]) {
    let axis = stroke(frame.theme.axis_line, 1.0);
    let tick_paint = stroke(frame.theme.tick, 1.0);
    frame.canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis);
    for tick in ticks.iter().filter(|t| t.px.is_finite()) {
        frame.canvas.draw_line((plot.left - TICK_SIZE, tick.px), (plot.left, tick.px), &tick_paint);
        if let Some(text) = frame.text {
            text.draw(
                frame.canvas,
                &tick.label,
                plot.left - TICK_SIZE - TICK_PADDING,
                tick.px,
                TICK_FONT,
                frame.theme.axis_label,
                Anchor::End,
                Baseline::Middle,
            );
        }
    }
}

fn draw_category_axis(frame: &Frame<'_>, plot: &Rect, ticks: &[Tick], rotation_deg: f32, font: f32) {
    let axis = stroke(frame.theme.axis_line, 1.0);
    let tick_paint = stroke(frame.theme.tick, 1.0);
    frame.canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis);
    let label_y = plot.bottom + TICK_SIZE + TICK_PADDING;
    for tick in ticks.iter().filter(|t| t.px.is_finite()) {
        frame.canvas.draw_line((tick.px, plot.bottom), (tick.px, plot.bottom + TICK_SIZE), &tick_paint);
        let Some(text) = frame.text else { continue };
        if rotation_deg == 0.0 {
            text.draw(frame.canvas, &tick.label, tick.px, label_y, font, frame.theme.axis_label, Anchor::Middle, Baseline::Hanging);
        } else {
            frame.canvas.save();
            frame.canvas.translate((tick.px, label_y));
            frame.canvas.rotate(rotation_deg, None);
            text.draw(frame.canvas, &tick.label, 0.0, 0.0, font, frame.theme.axis_label, Anchor::End, Baseline::Hanging);
            frame.canvas.restore();
        }
    }
}

fn draw_title(frame: &Frame<'_>, title: &AxisTitle) {
    let Some(text) = frame.text else { return };
    if title.vertical {
        frame.canvas.save();
        frame.canvas.translate((title.x, title.y));
        frame.canvas.rotate(-90.0, None);
        text.draw(frame.canvas, &title.text, 0.0, 0.0, TITLE_FONT, frame.theme.axis_label, Anchor::Middle, Baseline::Middle);
        frame.canvas.restore();
    } else {
        text.draw(frame.canvas, &title.text, title.x, title.y, TITLE_FONT, frame.theme.axis_label, Anchor::Middle, Baseline::Alphabetic);
    }
}
