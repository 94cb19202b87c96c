use approx::assert_relative_eq;
use candle_plot::ChartError;
use candle_plot::api::{AxisTransform, CoordinateTransform};
use candle_plot::core::{LinearScale, Point, Rect};

#[test]
fn linear_scale_rejects_degenerate_domain() {
    let err = LinearScale::new(5.0, 5.0).expect_err("zero span");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(LinearScale::new(0.0, f64::NAN).is_err());
}

#[test]
fn linear_scale_maps_onto_reversed_range() {
    let scale = LinearScale::new(9.0, 13.0).expect("scale");
    assert_eq!(scale.domain(), (9.0, 13.0));
    assert_relative_eq!(scale.domain_to_range(9.0, (500.0, 100.0)), 500.0);
    assert_relative_eq!(scale.domain_to_range(13.0, (500.0, 100.0)), 100.0);
    assert_relative_eq!(scale.domain_to_range(11.0, (500.0, 100.0)), 300.0);
}

#[test]
fn linear_scale_round_trips_through_range() {
    let scale = LinearScale::new(-0.5, 3.3).expect("scale");
    let px = scale.domain_to_range(1.7, (64.0, 944.0));
    assert_relative_eq!(scale.range_to_domain(px, (64.0, 944.0)), 1.7, epsilon = 1e-12);
}

#[test]
fn axis_transform_puts_higher_prices_higher_on_screen() {
    let area = Rect::new(64.0, 40.0, 944.0, 524.0);
    let transform = AxisTransform::new((-0.5, 3.3), (9.0, 13.0), area).expect("transform");

    assert_relative_eq!(transform.y(13.0), 40.0);
    assert_relative_eq!(transform.y(9.0), 524.0);
    assert_relative_eq!(transform.x(-0.5), 64.0);
    assert!(transform.x(1.0) < transform.x(2.0));

    let (x, y) = transform.invert(Point::new(transform.x(2.0), transform.y(10.5)));
    assert_relative_eq!(x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(y, 10.5, epsilon = 1e-9);
}

#[test]
fn axis_transform_rejects_empty_area() {
    let flat = Rect::new(0.0, 10.0, 100.0, 10.0);
    assert!(AxisTransform::new((0.0, 1.0), (0.0, 1.0), flat).is_err());
}
