use std::cell::RefCell;
use std::rc::Rc;

use candle_plot::api::{
    CandlePlotConfig, CandleStylePreset, CoordinateTransform, DataRange, DataRanger, Plot,
    Plotter, build_candle_plot,
};
use candle_plot::core::{BarUnit, Point, Viewport};
use candle_plot::render::{Canvas, Color, DrawCommand, LineStyle, NullRenderer, TextHAlign};
use candle_plot::ChartError;

fn periods() -> Vec<Vec<f64>> {
    vec![
        vec![10.0, 12.0, 9.0, 11.0],
        vec![11.0, 10.0, 13.0, 9.0],
        vec![9.0, 9.5, 10.5, 10.0],
    ]
}

fn labels() -> Vec<String> {
    vec!["09:00".to_owned(), "09:05".to_owned(), "09:10".to_owned()]
}

struct MarkerPlotter {
    id: usize,
    range: Option<DataRange>,
    calls: Rc<RefCell<Vec<usize>>>,
}

impl DataRanger for MarkerPlotter {
    fn data_range(&self) -> DataRange {
        self.range.unwrap_or(DataRange::new(0.0, 1.0, 0.0, 1.0))
    }
}

impl Plotter for MarkerPlotter {
    fn plot(&self, canvas: &mut dyn Canvas, transform: &dyn CoordinateTransform) {
        self.calls.borrow_mut().push(self.id);
        let point = Point::new(transform.x(0.5), transform.y(0.5));
        canvas.stroke_lines(LineStyle::new(Color::BLACK, 1.0), &[vec![point, point]]);
    }

    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        self.range.map(|_| self as &dyn DataRanger)
    }
}

#[test]
fn candle_plot_applies_captions_and_axis_overrides() {
    let config = CandlePlotConfig::default().with_bar_unit(BarUnit::new(5, "minute"));
    let plot = build_candle_plot(&labels(), &periods(), &config).expect("candle plot");

    assert_eq!(plot.title, "Candle Chart");
    assert_eq!(plot.x.label, "Time [5 min]");
    assert_eq!(plot.y.label, "Price [yen]");
    assert_eq!(plot.x.min, -0.5);
    assert_eq!(plot.x.max, 3.0 * 1.1);
    assert_eq!(plot.y.min, 9.0);
    assert_eq!(plot.y.max, 13.0);
    assert_eq!(plot.plotter_count(), 1);
    assert!(!plot.x.show_tick_marks);
}

#[test]
fn candle_plot_frame_has_integer_price_labels_and_nominal_time_labels() {
    let config = CandlePlotConfig::default();
    let plot = build_candle_plot(&labels(), &periods(), &config).expect("candle plot");
    let frame = plot.draw(config.viewport).expect("draw");
    frame.validate().expect("valid frame");

    let price_labels: Vec<&str> = frame
        .texts()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(price_labels, vec!["9", "10", "11", "12", "13"]);

    let texts: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    for label in labels() {
        assert!(texts.contains(&label.as_str()), "missing {label}");
    }
    assert!(texts.contains(&"Candle Chart"));
    assert!(texts.contains(&"Price [yen]"));

    assert_eq!(frame.polygons().count(), 3);
}

#[test]
fn candle_plot_draws_plotters_after_axes() {
    let plot = build_candle_plot(&labels(), &periods(), &CandlePlotConfig::default())
        .expect("candle plot");
    let frame = plot.draw(Viewport::new(800, 480)).expect("draw");

    let first_fill = frame
        .commands
        .iter()
        .position(|command| matches!(command, DrawCommand::FillPolygon(_)))
        .expect("candle body");
    let last_text = frame
        .commands
        .iter()
        .rposition(|command| matches!(command, DrawCommand::Text(_)))
        .expect("axis text");
    assert!(last_text < first_fill);
}

#[test]
fn candle_plot_rejects_label_count_mismatch() {
    let err = build_candle_plot(&["only-one"], &periods(), &CandlePlotConfig::default())
        .expect_err("label mismatch");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn candle_plot_propagates_empty_period() {
    let periods = vec![vec![1.0], Vec::new()];
    let err = build_candle_plot(&["a", "b"], &periods, &CandlePlotConfig::default())
        .expect_err("empty period");
    assert!(matches!(err, ChartError::EmptyInput(_)));
}

#[test]
fn null_renderer_receives_plot_frame() {
    let plot = build_candle_plot(&labels(), &periods(), &CandlePlotConfig::default())
        .expect("candle plot");
    let mut renderer = NullRenderer::default();
    plot.render(Viewport::new(640, 400), &mut renderer)
        .expect("render");

    assert_eq!(renderer.last_polygon_count, 3);
    // Title, two axis captions, three period names and five price labels.
    assert_eq!(renderer.last_text_count, 11);
    assert!(renderer.last_polyline_count >= 3 * 5);
}

#[test]
fn plotters_run_in_registration_order_and_union_ranges() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut plot = Plot::new();
    plot.add(MarkerPlotter {
        id: 1,
        range: Some(DataRange::new(0.0, 4.0, 10.0, 20.0)),
        calls: Rc::clone(&calls),
    });
    plot.add(MarkerPlotter {
        id: 2,
        range: Some(DataRange::new(-1.0, 2.0, 5.0, 15.0)),
        calls: Rc::clone(&calls),
    });
    plot.add(MarkerPlotter {
        id: 3,
        range: None,
        calls: Rc::clone(&calls),
    });

    assert_eq!((plot.x.min, plot.x.max), (-1.0, 4.0));
    assert_eq!((plot.y.min, plot.y.max), (5.0, 20.0));

    plot.draw(Viewport::new(400, 300)).expect("draw");
    assert_eq!(*calls.borrow(), vec![1, 2, 3]);
}

#[test]
fn plot_without_ranges_cannot_draw() {
    let err = Plot::new()
        .draw(Viewport::new(400, 300))
        .expect_err("no axis range");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn plot_rejects_viewport_smaller_than_margins() {
    let plot = build_candle_plot(&labels(), &periods(), &CandlePlotConfig::default())
        .expect("candle plot");
    let err = plot.draw(Viewport::new(40, 40)).expect_err("too small");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn config_loads_partial_json_with_defaults() {
    let config = CandlePlotConfig::from_json_str(
        r#"{ "price_unit": "usd", "bar_unit": { "count": 15, "unit": "minute" }, "style": "monochrome_dark" }"#,
    )
    .expect("config");

    assert_eq!(config.price_unit, "usd");
    assert_eq!(config.price_label(), "Price [usd]");
    assert_eq!(config.bar_unit.axis_label(), "Time [15 min]");
    assert_eq!(config.style, CandleStylePreset::MonochromeDark);
    assert_eq!(config.title, "Candle Chart");
    assert_eq!(config.viewport, Viewport::new(960, 576));
    assert_eq!(config.x_min, -0.5);
}

#[test]
fn config_round_trips_through_json() {
    let config = CandlePlotConfig::default().with_price_unit("eur");
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(CandlePlotConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn config_rejects_invalid_values() {
    let zero_viewport =
        CandlePlotConfig::from_json_str(r#"{ "viewport": { "width": 0, "height": 400 } }"#);
    assert!(matches!(
        zero_viewport,
        Err(ChartError::InvalidViewport { width: 0, .. })
    ));

    let bad_factor = CandlePlotConfig::from_json_str(r#"{ "x_max_factor": -1.0 }"#);
    assert!(matches!(bad_factor, Err(ChartError::InvalidData(_))));

    let malformed = CandlePlotConfig::from_json_str("{ not json");
    assert!(matches!(malformed, Err(ChartError::InvalidData(_))));
}
