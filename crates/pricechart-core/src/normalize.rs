// File: crates/pricechart-core/src/normalize.rs
// Summary: Raw CSV row model and the total conversion into typed phone records.

use serde::Deserialize;

pub const COL_COMPANY: &str = "Company Name";
pub const COL_YEAR: &str = "Launched Year";
pub const COL_BATTERY: &str = "Battery Capacity";
pub const COL_PRICE: &str = "Launched Price (USA)";
pub const COL_RAM: &str = "RAM";

/// Columns the loader insists on, in header order of the original export.
pub const REQUIRED_COLUMNS: [&str; 5] = [COL_COMPANY, COL_YEAR, COL_BATTERY, COL_PRICE, COL_RAM];

/// Capacities below this are `Low`.
pub const LOW_BATTERY_BELOW_MAH: f64 = 3000.0;
/// Capacities up to and including this are `Medium`.
pub const MEDIUM_BATTERY_MAX_MAH: f64 = 5000.0;

/// One dataset row exactly as it appears in the file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(rename = "Company Name", default)]
    pub company: String,
    #[serde(rename = "Launched Year", default)]
    pub launched_year: String,
    #[serde(rename = "Battery Capacity", default)]
    pub battery_capacity: String,
    #[serde(rename = "Launched Price (USA)", default)]
    pub launched_price_usa: String,
    #[serde(rename = "RAM", default)]
    pub ram: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BatteryCategory {
    Low,
    Medium,
    High,
}

impl BatteryCategory {
    pub const ALL: [BatteryCategory; 3] = [Self::Low, Self::Medium, Self::High];

    /// Bucket a capacity in mAh. `NaN` fails both lower comparisons and lands in `High`.
    pub fn from_capacity(mah: f64) -> Self {
        if mah < LOW_BATTERY_BELOW_MAH {
            Self::Low
        } else if mah <= MEDIUM_BATTERY_MAX_MAH {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for BatteryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized phone entry. Built once at load time and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub company: String,
    pub launched_year: Option<i32>,
    pub battery_capacity_mah: f64,
    pub battery_category: BatteryCategory,
    pub avg_price_usd: Option<f64>,
    pub ram_mb: u64,
}

/// Keep only ASCII decimal digits.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digit-stripping numeric extraction. Returns `NaN` when no digits remain or the
/// digit run does not fit a finite `f64`.
pub fn extract_number(raw: &str) -> f64 {
    let digits = strip_non_digits(raw);
    if digits.is_empty() {
        return f64::NAN;
    }
    match digits.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => f64::NAN,
    }
}

/// Price policy: unparseable becomes `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let v = extract_number(raw);
    if v.is_nan() { None } else { Some(v) }
}

/// RAM policy: unparseable (or too large for `u64`) becomes `0`.
pub fn parse_ram(raw: &str) -> u64 {
    strip_non_digits(raw).parse::<u64>().unwrap_or(0)
}

/// Year is a plain integer conversion of the trimmed field, no digit-stripping.
pub fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Total conversion of a raw row. Never fails.
pub fn normalize(raw: &RawRecord) -> Record {
    let battery_capacity_mah = extract_number(&raw.battery_capacity);
    Record {
        company: raw.company.clone(),
        launched_year: parse_year(&raw.launched_year),
        battery_capacity_mah,
        battery_category: BatteryCategory::from_capacity(battery_capacity_mah),
        avg_price_usd: parse_price(&raw.launched_price_usa),
        ram_mb: parse_ram(&raw.ram),
    }
}
