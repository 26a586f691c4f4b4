// File: crates/pricechart-core/tests/filter.rs
// Purpose: Record predicates for both views, and loader details that feed the controls.

use pricechart_core::{
    matches, matches_series, BatteryCategory, Dashboard, Dataset, FilterState, Record, Selection, View,
};

fn record(year: Option<i32>, battery: BatteryCategory, ram: u64) -> Record {
    Record {
        company: "Acme".into(),
        launched_year: year,
        battery_capacity_mah: 4000.0,
        battery_category: battery,
        avg_price_usd: Some(300.0),
        ram_mb: ram,
    }
}

#[test]
fn all_selections_admit_everything() {
    let f = FilterState::default();
    for r in [record(Some(2021), BatteryCategory::Low, 8), record(None, BatteryCategory::High, 0)] {
        assert!(matches(&r, &f));
        assert!(matches_series(&r, &f));
    }
}

#[test]
fn concrete_selections_need_exact_values() {
    let r = record(Some(2021), BatteryCategory::Medium, 8);
    let f = FilterState {
        year: Selection::Only(2021),
        battery: Selection::Only(BatteryCategory::Medium),
        ram: Selection::Only(8),
        view: View::Bar,
    };
    assert!(matches(&r, &f));
    assert!(!matches(&r, &FilterState { year: Selection::Only(2022), ..f }));
    assert!(!matches(&r, &FilterState { battery: Selection::Only(BatteryCategory::High), ..f }));
    assert!(!matches(&r, &FilterState { ram: Selection::Only(12), ..f }));
}

#[test]
fn yearless_record_fails_a_concrete_year() {
    let r = record(None, BatteryCategory::Low, 4);
    assert!(!matches(&r, &FilterState { year: Selection::Only(2021), ..FilterState::default() }));
    // the line view never looks at the year
    assert!(matches_series(&r, &FilterState { year: Selection::Only(2021), ..FilterState::default() }));
}

#[test]
fn series_predicate_still_applies_battery_and_ram() {
    let r = record(Some(2020), BatteryCategory::Low, 4);
    let f = FilterState { battery: Selection::Only(BatteryCategory::High), ..FilterState::default() };
    assert!(!matches_series(&r, &f));
    let f = FilterState { ram: Selection::Only(6), ..FilterState::default() };
    assert!(!matches_series(&r, &f));
}

const YEARLESS_CSV: &str = "\
Company Name,Launched Year,Battery Capacity,Launched Price (USA),RAM
Alpha,2020,4000mAh,$200,4GB
Alpha,TBA,4000mAh,$400,4GB
";

#[test]
fn yearless_record_counts_only_under_all() {
    let dash = Dashboard::new(Dataset::from_reader(YEARLESS_CSV.as_bytes()).unwrap());

    let all = dash.bar_points(&FilterState::default());
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].avg_price, 300.0);

    let y2020 = dash.bar_points(&FilterState { year: Selection::Only(2020), ..FilterState::default() });
    assert_eq!(y2020[0].avg_price, 200.0);

    // no x position for it in the line view
    let series = dash.line_series(&FilterState::default());
    assert_eq!(series[0].points.len(), 1);
    assert_eq!(series[0].points[0].avg_price, 200.0);
}

#[test]
fn header_names_are_trimmed() {
    let csv = " Company Name , Launched Year ,Battery Capacity, Launched Price (USA),RAM \nAlpha,2021,5000,$10,8GB\n";
    let ds = Dataset::from_reader(csv.as_bytes()).expect("padded headers resolve");
    let r = &ds.records()[0];
    assert_eq!(r.company, "Alpha");
    assert_eq!(r.launched_year, Some(2021));
    assert_eq!(r.avg_price_usd, Some(10.0));
    assert_eq!(r.ram_mb, 8);
}

#[test]
fn ram_options_skip_unparseable_sizes() {
    let csv = "\
Company Name,Launched Year,Battery Capacity,Launched Price (USA),RAM
A,2020,4000,$1,12GB
B,2020,4000,$1,unknown
C,2020,4000,$1,4GB
D,2020,4000,$1,12GB
";
    let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(ds.ram_sizes(), [4, 12]);
}
