// File: crates/pricechart-core/src/layout.rs
// Summary: Bar and line chart layouts: scales, ticks, bar rects, polylines and end labels.

use tracing::{debug, warn};

use crate::aggregate::{max_price, AggregatedPoint, SeriesPoint};
use crate::geometry::Rect;
use crate::labels::{place_labels, LABEL_SEPARATION_PX};
use crate::scale::{BandScale, LinearScale, PointScale};
use crate::ticks::{nice_ticks, DEFAULT_TICK_COUNT};
use crate::types::{Insets, Size};

/// Fraction of a band step left empty between and around bars.
pub const BAR_PADDING: f32 = 0.2;
/// Horizontal distance from a series' last point to its label.
pub const LABEL_OFFSET_X_PX: f32 = 40.0;
/// The leader line stops this far before the label text.
pub const LEADER_GAP_PX: f32 = 5.0;
/// Company names under the bar chart are rotated by this many degrees.
pub const BAR_TICK_ROTATION_DEG: f32 = -40.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Screen coordinate along the axis (x for the horizontal axis, y for the vertical).
    pub px: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Rotated -90° (reads bottom to top).
    pub vertical: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub company: String,
    pub avg_price: f64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tooltip: String,
}

impl Bar {
    /// Bars over a `NaN` mean or a degenerate scale have no geometry.
    pub fn is_drawable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChartLayout {
    pub size: Size,
    pub plot: Rect,
    pub x_scale: BandScale,
    pub y_scale: LinearScale,
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub x_tick_rotation_deg: f32,
    pub x_title: AxisTitle,
    pub y_title: AxisTitle,
}

/// End-of-series label and the leader line that ties it to the data point.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLabel {
    pub text: String,
    /// The series' true last point.
    pub anchor: (f32, f32),
    /// Where the text sits (left edge, vertical middle).
    pub x: f32,
    pub y: f32,
    pub leader_end: (f32, f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub company: String,
    /// Position in first-seen order; picks the series colour.
    pub color_index: usize,
    pub points: Vec<(f32, f32)>,
    pub label: Option<SeriesLabel>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChartLayout {
    pub size: Size,
    pub plot: Rect,
    pub x_scale: PointScale,
    pub y_scale: LinearScale,
    pub series: Vec<SeriesPath>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub x_title: AxisTitle,
    pub y_title: AxisTitle,
}

fn value_ticks(scale: &LinearScale) -> Vec<Tick> {
    nice_ticks(scale.vmin, scale.vmax, DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|v| Tick { px: scale.to_px(v), label: value_label(v) })
        .collect()
}

/// Shortest decimal form with comma-grouped thousands: `1000` -> `1,000`, `2.5` -> `2.5`.
pub fn value_label(v: f64) -> String {
    let text = format!("{v}");
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };
    if !int.bytes().all(|b| b.is_ascii_digit()) {
        return text;
    }

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn y_title(text: &str, plot: &Rect) -> AxisTitle {
    AxisTitle { text: text.to_string(), x: 15.0, y: plot.center_y(), vertical: true }
}

pub fn layout_bar_chart(points: &[AggregatedPoint], size: Size) -> BarChartLayout {
    let plot = Rect::plot_area(size, Insets::bar());
    let x_scale = BandScale::new(
        points.iter().map(|p| p.company.clone()).collect(),
        plot.left,
        plot.right,
        BAR_PADDING,
    );
    let y_max = max_price(points.iter().map(|p| p.avg_price));
    let y_scale = LinearScale::from_zero(plot.top, plot.bottom, y_max);

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let y = y_scale.to_px(p.avg_price);
            Bar {
                company: p.company.clone(),
                avg_price: p.avg_price,
                x: x_scale.band_start(i),
                y,
                width: x_scale.bandwidth(),
                height: plot.bottom - y,
                tooltip: p.tooltip(),
            }
        })
        .collect::<Vec<_>>();

    let x_ticks = points
        .iter()
        .map(|p| Tick { px: x_scale.center(&p.company).unwrap_or(f32::NAN), label: p.company.clone() })
        .collect();

    debug!(bars = bars.len(), y_max, "bar layout");
    BarChartLayout {
        size,
        plot,
        y_ticks: value_ticks(&y_scale),
        x_scale,
        y_scale,
        bars,
        x_ticks,
        x_tick_rotation_deg: BAR_TICK_ROTATION_DEG,
        x_title: AxisTitle { text: "Company".into(), x: plot.center_x(), y: plot.bottom + 60.0, vertical: false },
        y_title: y_title("Average Launch Price (USD)", &plot),
    }
}

pub fn layout_line_chart(series: &[SeriesPoint], size: Size) -> LineChartLayout {
    let plot = Rect::plot_area(size, Insets::line());

    let mut years: Vec<i32> = series.iter().flat_map(|s| s.points.iter().map(|p| p.year)).collect();
    years.sort_unstable();
    years.dedup();
    let x_scale = PointScale::new(years, plot.left, plot.right);

    let y_max = max_price(series.iter().flat_map(|s| s.points.iter().map(|p| p.avg_price)));
    let y_scale = LinearScale::from_zero(plot.top, plot.bottom, y_max);

    let to_screen = |year: i32, price: f64| -> (f32, f32) {
        (x_scale.position(year).unwrap_or(f32::NAN), y_scale.to_px(price))
    };

    let anchors: Vec<Option<(f32, f32)>> = series
        .iter()
        .map(|s| s.last().map(|p| to_screen(p.year, p.avg_price)))
        .collect();
    let candidates: Vec<f32> = anchors.iter().flatten().map(|&(_, y)| y).collect();
    let mut placed = place_labels(&candidates, LABEL_SEPARATION_PX).into_iter();

    let mut paths = Vec::with_capacity(series.len());
    for (i, (s, anchor)) in series.iter().zip(&anchors).enumerate() {
        let label = anchor.and_then(|anchor| {
            let y = placed.next()?;
            if y > plot.bottom {
                warn!(company = %s.company, y, bottom = plot.bottom, "series label pushed below plot area");
            }
            let x = anchor.0 + LABEL_OFFSET_X_PX;
            Some(SeriesLabel {
                text: s.company.clone(),
                anchor,
                x,
                y,
                leader_end: (x - LEADER_GAP_PX, y),
            })
        });
        paths.push(SeriesPath {
            company: s.company.clone(),
            color_index: i,
            points: s.points.iter().map(|p| to_screen(p.year, p.avg_price)).collect(),
            label,
        });
    }

    let x_ticks = x_scale
        .domain()
        .iter()
        .map(|&year| Tick { px: x_scale.position(year).unwrap_or(f32::NAN), label: year.to_string() })
        .collect();

    debug!(series = paths.len(), years = x_scale.domain().len(), y_max, "line layout");
    LineChartLayout {
        size,
        plot,
        y_ticks: value_ticks(&y_scale),
        x_ticks,
        x_scale,
        y_scale,
        series: paths,
        x_title: AxisTitle { text: "Year".into(), x: plot.center_x(), y: plot.bottom + 40.0, vertical: false },
        y_title: y_title("Avg. Launch Price (USD)", &plot),
    }
}
