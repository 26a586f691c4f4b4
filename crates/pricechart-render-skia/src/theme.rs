// File: crates/pricechart-render-skia/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

/// Tableau-10 series colours, assigned by series position.
const TABLEAU10: [(u8, u8, u8); 10] = [
    (0x4e, 0x79, 0xa7),
    (0xf2, 0x8e, 0x2c),
    (0xe1, 0x57, 0x59),
    (0x76, 0xb7, 0xb2),
    (0x59, 0xa1, 0x4f),
    (0xed, 0xc9, 0x49),
    (0xaf, 0x7a, 0xa1),
    (0xff, 0x9d, 0xa7),
    (0x9c, 0x75, 0x5f),
    (0xba, 0xb0, 0xab),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub bar_fill: skia::Color,
    pub leader: skia::Color,
}

impl Theme {
    /// White page, teal bars: the look of the original dashboard.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            bar_fill: skia::Color::from_argb(255, 0x69, 0xb3, 0xa2),
            leader: skia::Color::from_argb(255, 0x99, 0x99, 0x99),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar_fill: skia::Color::from_argb(255, 0x69, 0xb3, 0xa2),
            leader: skia::Color::from_argb(255, 110, 110, 120),
        }
    }

    /// Colour of the `index`-th series; the palette repeats after ten.
    pub fn series_color(&self, index: usize) -> skia::Color {
        let (r, g, b) = TABLEAU10[index % TABLEAU10.len()];
        skia::Color::from_argb(255, r, g, b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
