// File: crates/pricechart-core/src/dashboard.rs
// Summary: Session state (the loaded dataset) and the per-event filter → aggregate → layout pass.

use tracing::debug;

use crate::aggregate::{aggregate_by_company, aggregate_by_company_and_year, AggregatedPoint, SeriesPoint};
use crate::chart::ChartModel;
use crate::dataset::Dataset;
use crate::filter::{matches, matches_series, FilterState, View};
use crate::layout::{layout_bar_chart, layout_line_chart};
use crate::normalize::BatteryCategory;
use crate::types::Size;

/// Option lists for the four controls, derived once from the loaded dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlOptions {
    pub years: Vec<i32>,
    pub battery: Vec<BatteryCategory>,
    pub ram: Vec<u64>,
    pub views: Vec<View>,
}

/// Owns the dataset after load. Every update takes the filter explicitly and
/// leaves the dataset untouched.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    options: ControlOptions,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        let options = ControlOptions {
            years: dataset.years(),
            battery: BatteryCategory::ALL.to_vec(),
            ram: dataset.ram_sizes(),
            views: vec![View::Bar, View::Line],
        };
        Self { dataset, options }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Bars for the bar view: all three filters apply.
    pub fn bar_points(&self, filter: &FilterState) -> Vec<AggregatedPoint> {
        aggregate_by_company(self.dataset.records().iter().filter(|r| matches(r, filter)))
    }

    /// Series for the line view: the year filter is ignored.
    pub fn line_series(&self, filter: &FilterState) -> Vec<SeriesPoint> {
        aggregate_by_company_and_year(self.dataset.records().iter().filter(|r| matches_series(r, filter)))
    }

    /// One full recomputation for a change event.
    pub fn update(&self, filter: &FilterState, size: Size) -> ChartModel {
        debug!(?filter, width = size.width, height = size.height, "recomputing chart");
        match filter.view {
            View::Bar => ChartModel::Bar(layout_bar_chart(&self.bar_points(filter), size)),
            View::Line => ChartModel::Line(layout_line_chart(&self.line_series(filter), size)),
        }
    }
}
