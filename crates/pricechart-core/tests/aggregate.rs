// File: crates/pricechart-core/tests/aggregate.rs
// Purpose: Mean-with-null-exclusion grouping by company and by company/year.

use pricechart_core::{aggregate_by_company, aggregate_by_company_and_year, BatteryCategory, Record};

fn rec(company: &str, year: Option<i32>, price: Option<f64>) -> Record {
    Record {
        company: company.into(),
        launched_year: year,
        battery_capacity_mah: 4000.0,
        battery_category: BatteryCategory::Medium,
        avg_price_usd: price,
        ram_mb: 8,
    }
}

#[test]
fn null_prices_are_excluded_not_zeroed() {
    let data = vec![rec("X", Some(2020), Some(100.0)), rec("X", Some(2020), None), rec("X", Some(2021), Some(300.0))];
    let out = aggregate_by_company(&data);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].company, "X");
    assert_eq!(out[0].avg_price, 200.0);
}

#[test]
fn companies_keep_first_seen_order() {
    let data = vec![
        rec("Samsung", Some(2020), Some(500.0)),
        rec("Apple", Some(2020), Some(900.0)),
        rec("Samsung", Some(2021), Some(700.0)),
        rec("Nokia", Some(2021), Some(100.0)),
    ];
    let names: Vec<_> = aggregate_by_company(&data).into_iter().map(|p| p.company).collect();
    assert_eq!(names, ["Samsung", "Apple", "Nokia"]);
}

#[test]
fn all_null_company_passes_nan_through() {
    let data = vec![rec("Ghost", Some(2020), None), rec("Real", Some(2020), Some(10.0))];
    let out = aggregate_by_company(&data);
    assert!(out[0].avg_price.is_nan());
    assert_eq!(out[1].avg_price, 10.0);
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(aggregate_by_company(&[]).is_empty());
    assert!(aggregate_by_company_and_year(&[]).is_empty());
}

#[test]
fn yearly_series_are_sorted_and_averaged() {
    let data = vec![
        rec("Apple", Some(2023), Some(1000.0)),
        rec("Apple", Some(2021), Some(800.0)),
        rec("Google", Some(2022), Some(600.0)),
        rec("Apple", Some(2023), Some(1200.0)),
        rec("Apple", Some(2021), None),
    ];
    let out = aggregate_by_company_and_year(&data);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].company, "Apple");
    let years: Vec<_> = out[0].points.iter().map(|p| p.year).collect();
    assert_eq!(years, [2021, 2023]);
    assert_eq!(out[0].points[0].avg_price, 800.0);
    assert_eq!(out[0].points[1].avg_price, 1100.0);
    assert_eq!(out[1].company, "Google");
    for s in &out {
        assert!(!s.points.is_empty());
        assert!(s.points.windows(2).all(|w| w[0].year < w[1].year));
    }
}

#[test]
fn yearless_records_do_not_create_series() {
    let data = vec![rec("NoYear", None, Some(100.0)), rec("Dated", Some(2020), Some(50.0))];
    let out = aggregate_by_company_and_year(&data);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].company, "Dated");
}
