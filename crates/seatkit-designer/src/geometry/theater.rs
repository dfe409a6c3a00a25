use super::GeometryParams;
use crate::model::Point;

/// Rows of seats stacked below the stage header, filled row by row.
pub(super) fn centers(
    rows: usize,
    seats_per_row: usize,
    width: f64,
    height: f64,
    params: &GeometryParams,
) -> Vec<Point> {
    if rows == 0 || seats_per_row == 0 {
        return Vec::new();
    }

    let available = (height - params.header_height).max(0.0);
    let row_height = available / rows as f64;
    let column_width = width / seats_per_row as f64;

    (0..rows * seats_per_row)
        .map(|i| {
            let row = i / seats_per_row;
            let column = i % seats_per_row;
            Point::new(
                (column as f64 + 0.5) * column_width,
                params.header_height + (row as f64 + 0.5) * row_height,
            )
        })
        .collect()
}
