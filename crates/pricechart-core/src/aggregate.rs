// File: crates/pricechart-core/src/aggregate.rs
// Summary: Per-company and per-company-per-year mean launch price.

use std::collections::{BTreeMap, HashMap};

use crate::normalize::Record;

/// One bar: a company and its mean launch price (`NaN` when no record had a price).
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedPoint {
    pub company: String,
    pub avg_price: f64,
}

impl AggregatedPoint {
    /// Hover text for this bar, price rounded to whole dollars.
    pub fn tooltip(&self) -> String {
        if self.avg_price.is_finite() {
            format!("{}: Avg. Price: ${:.0}", self.company, self.avg_price.round())
        } else {
            format!("{}: Avg. Price: n/a", self.company)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearPoint {
    pub year: i32,
    pub avg_price: f64,
}

/// One line: a company's yearly means, ascending by year.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub company: String,
    pub points: Vec<YearPoint>,
}

impl SeriesPoint {
    pub fn last(&self) -> Option<&YearPoint> {
        self.points.last()
    }
}

/// Running mean that ignores missing prices entirely.
#[derive(Clone, Copy, Debug, Default)]
struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    fn push(&mut self, price: Option<f64>) {
        if let Some(p) = price {
            self.sum += p;
            self.count += 1;
        }
    }

    fn mean(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.sum / self.count as f64 }
    }
}

/// Group by company in first-seen order and average the prices.
pub fn aggregate_by_company<'a, I>(records: I) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, MeanAcc)> = Vec::new();
    for r in records {
        let slot = *index.entry(r.company.as_str()).or_insert_with(|| {
            groups.push((r.company.as_str(), MeanAcc::default()));
            groups.len() - 1
        });
        groups[slot].1.push(r.avg_price_usd);
    }
    groups
        .into_iter()
        .map(|(company, acc)| AggregatedPoint { company: company.to_string(), avg_price: acc.mean() })
        .collect()
}

/// Group by company (first-seen order), then by launch year ascending.
/// Records without a year have no place on the year axis and are skipped.
pub fn aggregate_by_company_and_year<'a, I>(records: I) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, BTreeMap<i32, MeanAcc>)> = Vec::new();
    for r in records {
        let Some(year) = r.launched_year else { continue };
        let slot = *index.entry(r.company.as_str()).or_insert_with(|| {
            groups.push((r.company.as_str(), BTreeMap::new()));
            groups.len() - 1
        });
        groups[slot].1.entry(year).or_default().push(r.avg_price_usd);
    }
    groups
        .into_iter()
        .map(|(company, years)| SeriesPoint {
            company: company.to_string(),
            points: years
                .into_iter()
                .map(|(year, acc)| YearPoint { year, avg_price: acc.mean() })
                .collect(),
        })
        .collect()
}

/// Largest finite-or-infinite price, skipping `NaN`. `NaN` when nothing remains.
pub fn max_price<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, |acc, v| if acc.is_nan() || v > acc { v } else { acc })
}
