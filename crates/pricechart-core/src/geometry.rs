// File: crates/pricechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::{Insets, Size};

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area left after subtracting `insets` from `size`. Never inverted:
    /// an undersized surface collapses to a zero-width or zero-height area.
    pub fn plot_area(size: Size, insets: Insets) -> Self {
        let w = size.width.saturating_sub(insets.hsum()) as f32;
        let h = size.height.saturating_sub(insets.vsum()) as f32;
        let left = insets.left as f32;
        let top = insets.top as f32;
        Self::from_ltrb(left, top, left + w, top + h)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
}

#[inline]
pub fn is_finite_point((x, y): (f32, f32)) -> bool {
    x.is_finite() && y.is_finite()
}
