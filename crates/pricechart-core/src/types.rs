// File: crates/pricechart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, chart margins).

/// Default surface width in pixels.
pub const WIDTH: u32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 600;

/// Drawing surface size, re-read on every redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Bar chart: room for rotated company names below the axis.
    pub const fn bar() -> Self {
        Self::new(60, 120, 30, 80)
    }

    /// Line chart: room on the right for series labels.
    pub const fn line() -> Self {
        Self::new(60, 200, 30, 150)
    }

    pub const fn hsum(&self) -> u32 { self.left + self.right }
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}
