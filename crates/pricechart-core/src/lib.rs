// File: crates/pricechart-core/src/lib.rs
// Summary: Core library entry point; phone dataset normalization, filtering, aggregation and chart layout.

pub mod aggregate;
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod labels;
pub mod layout;
pub mod normalize;
pub mod scale;
pub mod ticks;
pub mod types;

pub use aggregate::{aggregate_by_company, aggregate_by_company_and_year, AggregatedPoint, SeriesPoint, YearPoint};
pub use chart::{ChartModel, ChartRenderer};
pub use dashboard::{ControlOptions, Dashboard};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use filter::{matches, matches_series, ChangeEvent, FilterState, Selection, View};
pub use labels::{place_labels, LABEL_SEPARATION_PX};
pub use layout::{layout_bar_chart, layout_line_chart, BarChartLayout, LineChartLayout};
pub use normalize::{normalize, BatteryCategory, RawRecord, Record};
pub use types::{Insets, Size};
