use candle_plot::api::{ConstantTicks, DefaultTicks, RawTicks, Tick, Ticker};

fn fixture_ticks(_min: f64, _max: f64) -> Vec<Tick> {
    vec![
        Tick::major(3.0, "3.0"),
        Tick::minor(3.5),
        Tick::major(4.0, "4"),
        Tick::major(1250.0, "1250.00"),
        Tick::major(-2.0, "-2.0"),
    ]
}

#[test]
fn raw_ticks_strip_decimal_formatting() {
    let ticks = RawTicks::new(fixture_ticks).ticks(0.0, 10.0);
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["3", "", "4", "1250", "-2"]);
}

#[test]
fn raw_ticks_keep_positions_and_minor_ticks() {
    let ticks = RawTicks::new(fixture_ticks).ticks(0.0, 10.0);
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![3.0, 3.5, 4.0, 1250.0, -2.0]);
    assert_eq!(ticks[1], Tick::minor(3.5));
}

#[test]
fn raw_ticks_round_to_nearest_integer() {
    let source = ConstantTicks(vec![Tick::major(12.75, "12.75"), Tick::major(0.2, "0.2")]);
    let ticks = RawTicks::new(source).ticks(0.0, 20.0);
    assert_eq!(ticks[0].label, "13");
    assert_eq!(ticks[1].label, "0");
}

#[test]
fn raw_ticks_are_idempotent_for_integer_labels() {
    let once = RawTicks::new(fixture_ticks).ticks(0.0, 10.0);
    let twice = RawTicks::new(ConstantTicks(once.clone())).ticks(0.0, 10.0);
    assert_eq!(once, twice);
}

#[test]
fn raw_ticks_pass_non_numeric_labels_through() {
    let source = |_min: f64, _max: f64| vec![Tick::major(1.0, "n/a"), Tick::major(2.0, "2.0")];
    let ticks = RawTicks::new(source).ticks(0.0, 3.0);
    assert_eq!(ticks[0].label, "n/a");
    assert_eq!(ticks[1].label, "2");
}

#[test]
fn raw_ticks_over_default_generator_yield_integer_labels() {
    let ticks = RawTicks::new(DefaultTicks).ticks(9.0, 13.0);
    let labels: Vec<&str> = ticks
        .iter()
        .filter(|tick| !tick.is_minor())
        .map(|tick| tick.label.as_str())
        .collect();
    assert_eq!(labels, vec!["9", "10", "11", "12", "13"]);
}

#[test]
fn default_ticks_label_fractional_steps_with_their_precision() {
    let ticks = DefaultTicks.ticks(0.0, 1.0);
    let majors: Vec<(f64, &str)> = ticks
        .iter()
        .filter(|tick| !tick.is_minor())
        .map(|tick| (tick.value, tick.label.as_str()))
        .collect();
    assert_eq!(
        majors,
        vec![(0.0, "0.0"), (0.3, "0.3"), (0.6, "0.6"), (0.9, "0.9")]
    );
    assert!(ticks.iter().all(|tick| (0.0..=1.0).contains(&tick.value)));
}

#[test]
fn default_ticks_accept_reversed_bounds() {
    assert_eq!(DefaultTicks.ticks(13.0, 9.0), DefaultTicks.ticks(9.0, 13.0));
}

#[test]
fn constant_ticks_ignore_requested_range() {
    let fixed = ConstantTicks(vec![Tick::major(0.0, "a"), Tick::major(1.0, "b")]);
    assert_eq!(fixed.ticks(-100.0, 100.0), fixed.ticks(5.0, 6.0));
}

#[test]
fn default_ticks_resolve_tiny_spans() {
    let (min, max) = (1e-17, 5e-17);
    let ticks = DefaultTicks.ticks(min, max);
    let majors: Vec<&Tick> = ticks.iter().filter(|tick| !tick.is_minor()).collect();

    assert_eq!(majors.len(), 5);
    let slack = (max - min) * 1e-6;
    assert!(
        ticks
            .iter()
            .all(|tick| tick.value >= min - slack && tick.value <= max + slack)
    );

    let mut labels: Vec<&str> = majors.iter().map(|tick| tick.label.as_str()).collect();
    labels.dedup();
    assert_eq!(labels.len(), 5);
}
