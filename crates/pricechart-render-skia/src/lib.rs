// File: crates/pricechart-render-skia/src/lib.rs
// Summary: Skia renderer; draws chart-core models to SVG documents or PNG images using CPU canvases.

mod draw;
pub mod text;
pub mod theme;

use std::path::Path;

use anyhow::{Context, Result};
use pricechart_core::{ChartModel, ChartRenderer};
use skia_safe as skia;
use tracing::debug;

use crate::draw::{draw_model, Frame};
pub use crate::text::TextShaper;
pub use crate::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Text depends on installed fonts; tests turn it off for stable pixels.
    pub draw_labels: bool,
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true, format: OutputFormat::Svg }
    }
}

/// Skia-backed chart renderer. Holds the font collection across frames.
pub struct SkiaRenderer {
    opts: RenderOptions,
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, text: TextShaper::new() }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    fn frame<'a>(&'a self, canvas: &'a skia::Canvas) -> Frame<'a> {
        Frame {
            canvas,
            theme: &self.opts.theme,
            text: self.opts.draw_labels.then_some(&self.text),
        }
    }

    /// Render to an in-memory SVG document sized to the model's surface.
    pub fn render_to_svg_bytes(&self, model: &ChartModel) -> Result<Vec<u8>> {
        let size = model.size();
        let bounds = skia::Rect::from_wh(size.width as f32, size.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        draw_model(&self.frame(&canvas), model);
        let data = canvas.end();
        Ok(data.as_bytes().to_vec())
    }

    /// Render to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, model: &ChartModel) -> Result<Vec<u8>> {
        let size = model.size();
        let mut surface = skia::surfaces::raster_n32_premul((size.width.max(1) as i32, size.height.max(1) as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        draw_model(&self.frame(surface.canvas()), model);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_bytes(&self, model: &ChartModel) -> Result<Vec<u8>> {
        match self.opts.format {
            OutputFormat::Svg => self.render_to_svg_bytes(model),
            OutputFormat::Png => self.render_to_png_bytes(model),
        }
    }

    /// Render in the configured format and write to `path`, creating parent directories.
    pub fn render_to_file(&self, model: &ChartModel, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_bytes(model)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "chart written");
        Ok(())
    }
}

impl ChartRenderer for SkiaRenderer {
    type Output = Vec<u8>;
    type Error = anyhow::Error;

    fn id(&self) -> &'static str {
        "skia"
    }

    fn render(&mut self, model: &ChartModel) -> Result<Vec<u8>> {
        self.render_bytes(model)
    }
}
