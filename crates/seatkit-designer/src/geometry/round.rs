use std::f64::consts::PI;

use super::GeometryParams;
use crate::model::Point;

/// Seats on a circle around the table, seat 0 at the top, clockwise on screen.
pub(super) fn centers(count: usize, width: f64, height: f64, params: &GeometryParams) -> Vec<Point> {
    let center = Point::new(width / 2.0, height / 2.0);
    let radius = width / 2.0 + params.seat_size / 2.0 + params.seat_margin;
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * 2.0 * PI - PI / 2.0;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
