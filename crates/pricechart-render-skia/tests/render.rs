// File: crates/pricechart-render-skia/tests/render.rs
// Purpose: End-to-end renders of bar and line models to SVG and PNG.

use pricechart_core::{
    layout_bar_chart, layout_line_chart, AggregatedPoint, ChartModel, ChartRenderer, SeriesPoint, Size, YearPoint,
};
use pricechart_render_skia::{OutputFormat, RenderOptions, SkiaRenderer, Theme};

fn bar_model() -> ChartModel {
    let points = vec![
        AggregatedPoint { company: "Apple".into(), avg_price: 900.0 },
        AggregatedPoint { company: "Nokia".into(), avg_price: 150.0 },
    ];
    ChartModel::Bar(layout_bar_chart(&points, Size::new(480, 320)))
}

fn line_model() -> ChartModel {
    let series = vec![
        SeriesPoint {
            company: "Apple".into(),
            points: vec![YearPoint { year: 2020, avg_price: 700.0 }, YearPoint { year: 2021, avg_price: 900.0 }],
        },
        SeriesPoint {
            company: "Nokia".into(),
            points: vec![YearPoint { year: 2020, avg_price: 120.0 }, YearPoint { year: 2021, avg_price: f64::NAN }],
        },
    ];
    ChartModel::Line(layout_line_chart(&series, Size::new(480, 320)))
}

fn quiet(format: OutputFormat) -> RenderOptions {
    RenderOptions { theme: Theme::light(), draw_labels: false, format }
}

#[test]
fn svg_document_is_produced() {
    let renderer = SkiaRenderer::new(RenderOptions::default());
    for model in [bar_model(), line_model()] {
        let bytes = renderer.render_to_svg_bytes(&model).expect("svg render");
        let text = String::from_utf8(bytes).expect("svg is utf-8");
        assert!(text.contains("<svg"), "missing svg root");
    }
}

#[test]
fn png_matches_surface_size_and_colors() {
    let renderer = SkiaRenderer::new(quiet(OutputFormat::Png));
    let model = bar_model();
    let bytes = renderer.render_to_png_bytes(&model).expect("png render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (480, 320));

    // top-left corner is background
    assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);

    // middle of the tallest bar carries the bar fill
    let ChartModel::Bar(layout) = &model else { unreachable!() };
    let bar = &layout.bars[0];
    let (cx, cy) = ((bar.x + bar.width / 2.0) as u32, (bar.y + bar.height / 2.0) as u32);
    assert_eq!(img.get_pixel(cx, cy).0, [0x69, 0xb3, 0xa2, 255]);
}

#[test]
fn empty_models_render_axes_only() {
    let renderer = SkiaRenderer::new(quiet(OutputFormat::Png));
    let empty_bar = ChartModel::Bar(layout_bar_chart(&[], Size::new(300, 200)));
    let empty_line = ChartModel::Line(layout_line_chart(&[], Size::new(300, 200)));
    for model in [empty_bar, empty_line] {
        assert!(model.is_empty());
        let bytes = renderer.render_to_png_bytes(&model).expect("render empty");
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!((img.width(), img.height()), (300, 200));
    }
}

#[test]
fn renderer_trait_and_file_output() {
    let mut renderer = SkiaRenderer::new(quiet(OutputFormat::Svg));
    assert_eq!(renderer.id(), "skia");
    let bytes = renderer.render(&line_model()).expect("trait render");
    assert!(!bytes.is_empty());

    let out = std::path::PathBuf::from("target/test_out/line.svg");
    renderer.render_to_file(&line_model(), &out).expect("write svg");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(pricechart_render_skia::theme::find("DARK").name, "dark");
    assert_eq!(pricechart_render_skia::theme::find("neon").name, "light");
    let t = Theme::light();
    assert_eq!(t.series_color(0), t.series_color(10));
}
