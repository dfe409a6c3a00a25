use super::GeometryParams;
use crate::model::Point;

/// Splits `count` seats over the edges of a `width` x `height` table.
///
/// Returns `[top, right, bottom, left]`. Horizontal edges get the same share, proportional
/// to their length; vertical edges take the rest with the right edge first.
pub fn edge_counts(count: usize, width: f64, height: f64) -> [usize; 4] {
    match count {
        0 => return [0; 4],
        1 => return [1, 0, 0, 0],
        _ => {}
    }

    let perimeter = 2.0 * (width + height);
    let share = if perimeter > 0.0 && perimeter.is_finite() {
        (count as f64 * width / perimeter).round()
    } else {
        0.0
    };
    let mut horizontal = (share.max(0.0) as usize).clamp(1, count / 2);
    if count >= 3 && horizontal * 2 == count {
        horizontal -= 1;
    }

    let vertical = count - horizontal * 2;
    let right = vertical.div_ceil(2);
    let left = vertical / 2;
    [horizontal, right, horizontal, left]
}

/// Seats along the four edges: top left-to-right, right top-to-bottom,
/// bottom right-to-left, left bottom-to-top.
pub(super) fn centers(count: usize, width: f64, height: f64, params: &GeometryParams) -> Vec<Point> {
    let [top, right, bottom, left] = edge_counts(count, width, height);
    let offset = params.seat_offset();
    let fraction = |j: usize, k: usize| (j + 1) as f64 / (k + 1) as f64;

    let mut points = Vec::with_capacity(count);
    points.extend((0..top).map(|j| Point::new(width * fraction(j, top), -offset)));
    points.extend((0..right).map(|j| Point::new(width + offset, height * fraction(j, right))));
    points.extend(
        (0..bottom).map(|j| Point::new(width * (1.0 - fraction(j, bottom)), height + offset)),
    );
    points.extend((0..left).map(|j| Point::new(-offset, height * (1.0 - fraction(j, left)))));
    points
}
