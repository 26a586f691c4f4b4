// File: crates/pricechart-core/src/filter.rs
// Summary: Filter selections, record predicates, and change-event parsing.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::normalize::{BatteryCategory, Record};

/// One filter component: either unconstrained or an exact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(want) => want == value,
        }
    }

    /// Missing values only pass an unconstrained selection.
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(want), Some(v)) => want == v,
            (Selection::Only(_), None) => false,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

/// Numeric controls treat anything that is not a number as "All".
fn numeric_selection<T: FromStr>(raw: &str) -> Selection<T> {
    match raw.trim().parse::<T>() {
        Ok(v) => Selection::Only(v),
        Err(_) => Selection::All,
    }
}

pub fn parse_year_selection(raw: &str) -> Selection<i32> {
    numeric_selection(raw)
}

pub fn parse_ram_selection(raw: &str) -> Selection<u64> {
    numeric_selection(raw)
}

pub fn parse_battery_selection(raw: &str) -> Result<Selection<BatteryCategory>> {
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return Ok(Selection::All);
    }
    BatteryCategory::ALL
        .into_iter()
        .find(|c| c.as_str().eq_ignore_ascii_case(value))
        .map(Selection::Only)
        .ok_or_else(|| Error::InvalidSelection { control: "battery", value: raw.to_string() })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Bar,
    Line,
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(View::Bar),
            "line" => Ok(View::Line),
            _ => Err(Error::InvalidSelection { control: "view", value: s.to_string() }),
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            View::Bar => "bar",
            View::Line => "line",
        })
    }
}

/// Current control selections. Rebuilt from scratch on every change event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub year: Selection<i32>,
    pub battery: Selection<BatteryCategory>,
    pub ram: Selection<u64>,
    pub view: View,
}

impl FilterState {
    /// Return a copy with one control changed, keyed by its control name.
    pub fn with(mut self, key: &str, value: &str) -> Result<Self> {
        match key {
            "year" => self.year = parse_year_selection(value),
            "battery" => self.battery = parse_battery_selection(value)?,
            "ram" => self.ram = parse_ram_selection(value),
            "view" => self.view = value.parse()?,
            _ => return Err(Error::InvalidEvent(format!("{key}={value}"))),
        }
        Ok(self)
    }
}

/// Bar-view predicate: year AND battery AND RAM.
pub fn matches(record: &Record, filter: &FilterState) -> bool {
    filter.year.admits_opt(record.launched_year.as_ref()) && matches_series(record, filter)
}

/// Line-view predicate. Year is the x-axis there, so the year control does not apply.
pub fn matches_series(record: &Record, filter: &FilterState) -> bool {
    filter.battery.admits(&record.battery_category) && filter.ram.admits(&record.ram_mb)
}

/// A control change read from the event stream: fresh filter selections plus
/// optional surface size overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    pub filter: FilterState,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ChangeEvent {
    /// Parse whitespace-separated `key=value` pairs, e.g. `year=2023 battery=Low view=line`.
    /// Controls not mentioned keep their defaults.
    pub fn parse(line: &str) -> Result<Self> {
        let mut event = ChangeEvent::default();
        for pair in line.split_whitespace() {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::InvalidEvent(line.to_string()))?;
            match key {
                "width" => event.width = Some(parse_dimension(line, value)?),
                "height" => event.height = Some(parse_dimension(line, value)?),
                _ => event.filter = event.filter.with(key, value)?,
            }
        }
        Ok(event)
    }
}

fn parse_dimension(line: &str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| Error::InvalidEvent(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_sentinels_mean_all() {
        assert_eq!(parse_year_selection("All"), Selection::All);
        assert_eq!(parse_year_selection(""), Selection::All);
        assert_eq!(parse_year_selection("2021"), Selection::Only(2021));
        assert_eq!(parse_ram_selection("x"), Selection::All);
        assert_eq!(parse_ram_selection("12"), Selection::Only(12));
    }

    #[test]
    fn battery_names_are_case_insensitive() {
        assert_eq!(parse_battery_selection("low").unwrap(), Selection::Only(BatteryCategory::Low));
        assert_eq!(parse_battery_selection("ALL").unwrap(), Selection::All);
        assert!(parse_battery_selection("Huge").is_err());
    }

    #[test]
    fn change_event_starts_from_defaults() {
        let ev = ChangeEvent::parse("battery=High view=line width=800").unwrap();
        assert_eq!(ev.filter.year, Selection::All);
        assert_eq!(ev.filter.battery, Selection::Only(BatteryCategory::High));
        assert_eq!(ev.filter.view, View::Line);
        assert_eq!(ev.width, Some(800));
        assert_eq!(ev.height, None);
        assert!(ChangeEvent::parse("year").is_err());
        assert!(ChangeEvent::parse("colour=red").is_err());
    }
}
