// File: crates/pricechart-core/tests/layout.rs
// Purpose: Bar layout geometry and degenerate domains.

use pricechart_core::layout::value_label;
use pricechart_core::{layout_bar_chart, layout_line_chart, AggregatedPoint, Size};

fn point(company: &str, avg_price: f64) -> AggregatedPoint {
    AggregatedPoint { company: company.into(), avg_price }
}

#[test]
fn bars_share_band_width_and_baseline() {
    let pts = vec![point("A", 100.0), point("B", 400.0), point("C", 250.0)];
    let layout = layout_bar_chart(&pts, Size::new(960, 600));
    // bar margins: left 60, right 120, top 30, bottom 80
    assert_eq!(layout.plot.left, 60.0);
    assert_eq!(layout.plot.bottom, 520.0);
    let w = layout.bars[0].width;
    for (bar, next) in layout.bars.iter().zip(layout.bars.iter().skip(1)) {
        assert!(next.x > bar.x + w);
        assert!((bar.y + bar.height - layout.plot.bottom).abs() < 1e-3);
    }
    assert_eq!(layout.bars[1].y, layout.plot.top);
    assert_eq!(layout.x_ticks[1].label, "B");
    assert_eq!(layout.x_tick_rotation_deg, -40.0);
    assert_eq!(layout.y_ticks.first().map(|t| t.label.as_str()), Some("0"));
}

#[test]
fn nan_mean_bar_is_not_drawable_but_others_are() {
    let pts = vec![point("Ghost", f64::NAN), point("Real", 300.0)];
    let layout = layout_bar_chart(&pts, Size::default());
    assert!(!layout.bars[0].is_drawable());
    assert!(layout.bars[1].is_drawable());
    assert_eq!(layout.y_scale.vmax, 300.0);
}

#[test]
fn all_nan_domain_is_degenerate() {
    let layout = layout_bar_chart(&[point("Ghost", f64::NAN)], Size::default());
    assert!(layout.y_scale.is_degenerate());
    assert!(layout.bars.iter().all(|b| !b.is_drawable()));
}

#[test]
fn empty_line_layout_does_not_fail() {
    let layout = layout_line_chart(&[], Size::default());
    assert!(layout.series.is_empty());
    assert!(layout.x_ticks.is_empty());
    assert!(layout.y_ticks.is_empty());
}

#[test]
fn tiny_surface_collapses_plot() {
    let layout = layout_bar_chart(&[point("A", 1.0)], Size::new(50, 50));
    assert_eq!(layout.plot.width(), 0.0);
    assert_eq!(layout.plot.height(), 0.0);
}

#[test]
fn price_ticks_group_thousands() {
    let layout = layout_bar_chart(&[point("A", 2000.0)], Size::default());
    assert_eq!(layout.y_ticks.last().map(|t| t.label.as_str()), Some("2,000"));
    assert_eq!(layout.y_ticks[1].label, "200");

    let bar = &layout.bars[0];
    assert_eq!(layout.x_ticks[0].px, bar.x + bar.width * 0.5);

    assert_eq!(value_label(1_234_567.0), "1,234,567");
    assert_eq!(value_label(2.5), "2.5");
    assert_eq!(value_label(-1500.0), "-1,500");
    assert_eq!(value_label(999.0), "999");
}
