// File: crates/pricechart-core/src/chart.rs
// Summary: Renderer-facing chart model and the trait drawing backends implement.

use crate::layout::{BarChartLayout, LineChartLayout};
use crate::types::Size;

/// Everything a backend needs to draw one frame. Pure data; no drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartModel {
    Bar(BarChartLayout),
    Line(LineChartLayout),
}

impl ChartModel {
    pub fn size(&self) -> Size {
        match self {
            ChartModel::Bar(b) => b.size,
            ChartModel::Line(l) => l.size,
        }
    }

    /// No bars or no series: axes only.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartModel::Bar(b) => b.bars.is_empty(),
            ChartModel::Line(l) => l.series.is_empty(),
        }
    }
}

/// A drawing backend. Receives finished layouts and owns all side effects.
pub trait ChartRenderer {
    type Output;
    type Error;

    fn id(&self) -> &'static str;
    fn render(&mut self, model: &ChartModel) -> Result<Self::Output, Self::Error>;
}
