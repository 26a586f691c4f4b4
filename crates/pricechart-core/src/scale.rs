// File: crates/pricechart-core/src/scale.rs
// Summary: Linear value scale and categorical band/point scales mapping data to pixels.

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]` (inverted).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmin, vmax }
    }

    /// Domain `[0, max]`. A `NaN` max yields a scale that maps everything to `NaN`.
    pub fn from_zero(top_px: f32, bottom_px: f32, max: f64) -> Self {
        Self::new(top_px, bottom_px, 0.0, max)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.vmin.is_finite() && self.vmax.is_finite())
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            // collapsed domain sits mid-range
            0.5
        } else {
            (v - self.vmin) / span
        };
        self.bottom_px - (t as f32) * (self.bottom_px - self.top_px)
    }
}

/// Categorical scale of equal-width bands with inner and outer padding, centered in the range.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f32,
    step: f32,
    bandwidth: f32,
}

impl BandScale {
    /// `padding` is used both between bands and at the two ends, as a fraction of one step.
    pub fn new(domain: Vec<String>, range_start: f32, range_end: f32, padding: f32) -> Self {
        let n = domain.len() as f32;
        let width = range_end - range_start;
        let step = width / (n - padding + 2.0 * padding).max(1.0);
        let start = range_start + (width - step * (n - padding)) * 0.5;
        Self { domain, start, step, bandwidth: step * (1.0 - padding) }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Left edge of the `i`-th band.
    pub fn band_start(&self, i: usize) -> f32 {
        self.start + self.step * i as f32
    }

    pub fn position(&self, key: &str) -> Option<f32> {
        self.domain.iter().position(|k| k == key).map(|i| self.band_start(i))
    }

    /// Center of the band for `key`, where its tick sits.
    pub fn center(&self, key: &str) -> Option<f32> {
        self.position(key).map(|x| x + self.bandwidth * 0.5)
    }
}

/// Evenly spaced points over a sorted set of years, no outer padding.
/// A single year sits at the middle of the range.
#[derive(Clone, Debug, PartialEq)]
pub struct PointScale {
    domain: Vec<i32>,
    start: f32,
    step: f32,
}

impl PointScale {
    /// `domain` must be sorted ascending and distinct.
    pub fn new(domain: Vec<i32>, range_start: f32, range_end: f32) -> Self {
        let n = domain.len() as f32;
        let width = range_end - range_start;
        let step = width / (n - 1.0).max(1.0);
        let start = range_start + (width - step * (n - 1.0).max(0.0)) * 0.5;
        Self { domain, start, step }
    }

    pub fn domain(&self) -> &[i32] {
        &self.domain
    }

    pub fn position(&self, year: i32) -> Option<f32> {
        self.domain
            .binary_search(&year)
            .ok()
            .map(|i| self.start + self.step * i as f32)
    }
}
