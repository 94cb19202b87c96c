//! Clipping of canvas paths against a horizontal band `[min_y, max_y]`.

use crate::core::Point;

/// Sutherland-Hodgman clip of a polygon against the band.
///
/// The result may be empty when the polygon lies fully outside.
#[must_use]
pub fn clip_polygon_y(points: &[Point], min_y: f64, max_y: f64) -> Vec<Point> {
    let above_min = clip_polygon_edge(points, |p| p.y >= min_y, min_y);
    clip_polygon_edge(&above_min, |p| p.y <= max_y, max_y)
}

fn clip_polygon_edge(points: &[Point], inside: impl Fn(Point) -> bool, edge_y: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len() + 2);
    let Some(&last) = points.last() else {
        return out;
    };

    let mut previous = last;
    for &current in points {
        match (inside(previous), inside(current)) {
            (true, true) => out.push(current),
            (true, false) => out.push(intersect_y(previous, current, edge_y)),
            (false, true) => {
                out.push(intersect_y(previous, current, edge_y));
                out.push(current);
            }
            (false, false) => {}
        }
        previous = current;
    }
    out
}

/// Clips each polyline to the band, splitting it where it leaves and
/// re-enters.
///
/// Degenerate single-point segments survive when the point is inside the
/// band, so zero-length caps are kept as two-point lines.
#[must_use]
pub fn clip_lines_y(lines: &[&[Point]], min_y: f64, max_y: f64) -> Vec<Vec<Point>> {
    let mut out = Vec::new();
    for line in lines {
        clip_line_y(line, min_y, max_y, &mut out);
    }
    out
}

fn clip_line_y(line: &[Point], min_y: f64, max_y: f64, out: &mut Vec<Vec<Point>>) {
    let mut run: Vec<Point> = Vec::new();
    for pair in line.windows(2) {
        match clip_segment_y(pair[0], pair[1], min_y, max_y) {
            Some((start, end)) => {
                let continues = run.last().is_some_and(|last| *last == start);
                if !continues {
                    flush_run(&mut run, out);
                    run.push(start);
                }
                run.push(end);
            }
            None => flush_run(&mut run, out),
        }
    }
    flush_run(&mut run, out);
}

fn flush_run(run: &mut Vec<Point>, out: &mut Vec<Vec<Point>>) {
    if run.len() >= 2 {
        out.push(std::mem::take(run));
    } else {
        run.clear();
    }
}

/// Parametric clip of one segment; `None` when nothing is inside.
fn clip_segment_y(a: Point, b: Point, min_y: f64, max_y: f64) -> Option<(Point, Point)> {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return (min_y..=max_y).contains(&a.y).then_some((a, b));
    }

    let t_min = (min_y - a.y) / dy;
    let t_max = (max_y - a.y) / dy;
    let t0 = t_min.min(t_max).max(0.0);
    let t1 = t_min.max(t_max).min(1.0);
    if t0 > t1 {
        return None;
    }

    Some((lerp(a, b, t0), lerp(a, b, t1)))
}

fn intersect_y(a: Point, b: Point, edge_y: f64) -> Point {
    let t = (edge_y - a.y) / (b.y - a.y);
    Point::new(a.x + (b.x - a.x) * t, edge_y)
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}
