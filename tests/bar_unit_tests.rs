use candle_plot::ChartError;
use candle_plot::core::{BarUnit, TimeUnit, unit_abbreviation};
use chrono::{TimeZone, Utc};

#[test]
fn every_time_unit_has_its_abbreviation() {
    let abbreviations: Vec<&str> = TimeUnit::ALL
        .into_iter()
        .map(TimeUnit::abbreviation)
        .collect();
    assert_eq!(abbreviations, vec!["sec", "min", "hrs", "day", "mon", "yr"]);
}

#[test]
fn unit_strings_resolve_by_name_abbreviation_or_layout() {
    assert_eq!(unit_abbreviation("minute"), "min");
    assert_eq!(unit_abbreviation("Hour"), "hrs");
    assert_eq!(unit_abbreviation("yr"), "yr");
    assert_eq!(unit_abbreviation("%Y-%m-%d"), "day");
    assert_eq!(unit_abbreviation("%Y-%m"), "mon");
}

#[test]
fn unknown_unit_maps_to_empty_abbreviation() {
    assert_eq!(unit_abbreviation("fortnight"), "");
    assert_eq!(unit_abbreviation(""), "");
    assert_eq!(BarUnit::new(2, "week").axis_label(), "Time [2 ]");
}

#[test]
fn axis_label_combines_count_and_abbreviation() {
    assert_eq!(BarUnit::new(5, "minute").axis_label(), "Time [5 min]");
    assert_eq!(BarUnit::new(1, "day").axis_label(), "Time [1 day]");
}

#[test]
fn period_label_uses_unit_layout() {
    let time = Utc
        .with_ymd_and_hms(2024, 3, 1, 9, 30, 15)
        .single()
        .expect("valid timestamp");

    let cases = [
        ("second", "2024-03-01T09:30:15"),
        ("minute", "2024-03-01T09:30"),
        ("hour", "2024-03-01T09"),
        ("day", "2024-03-01"),
        ("month", "2024-03"),
        ("year", "2024"),
    ];
    for (unit, expected) in cases {
        let label = BarUnit::new(1, unit).period_label(time).expect("known unit");
        assert_eq!(label, expected, "unit {unit}");
    }
}

#[test]
fn period_label_rejects_unknown_unit() {
    let time = Utc.timestamp_opt(0, 0).single().expect("epoch");
    let err = BarUnit::new(1, "fortnight")
        .period_label(time)
        .expect_err("unknown unit");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn time_unit_parses_and_serializes_lowercase() {
    let unit: TimeUnit = "month".parse().expect("known unit");
    assert_eq!(unit, TimeUnit::Month);
    assert_eq!(unit.to_string(), "month");
    assert_eq!(
        serde_json::to_string(&TimeUnit::Second).expect("serialize"),
        "\"second\""
    );
    assert!("weekly".parse::<TimeUnit>().is_err());
}
