use super::GeometryParams;
use crate::model::Point;

/// Resolves a flat seat index to `(row, position in row, seats in row)`.
///
/// Rows are walked in order using their cumulative seat counts; empty rows are skipped.
pub fn locate_seat(row_configs: &[usize], index: usize) -> Option<(usize, usize, usize)> {
    let mut start: usize = 0;
    for (row, &count) in row_configs.iter().enumerate() {
        if index - start < count {
            return Some((row, index - start, count));
        }
        start = start.checked_add(count)?;
    }
    None
}

/// Concentric arcs opening downward from the stage at the table's top centre.
pub(super) fn centers(row_configs: &[usize], width: f64, params: &GeometryParams) -> Vec<Point> {
    let total = row_configs
        .iter()
        .fold(0usize, |total, &row| total.saturating_add(row));
    let span = params.amphitheater_span_degrees.to_radians();
    let stage = Point::new(width / 2.0, 0.0);

    (0..total)
        .filter_map(|i| locate_seat(row_configs, i))
        .map(|(row, position, count)| {
            let radius =
                params.amphitheater_base_radius + row as f64 * params.amphitheater_radius_step;
            let angle = if count > 1 {
                -span / 2.0 + span * position as f64 / (count - 1) as f64
            } else {
                0.0
            };
            Point::new(
                stage.x + radius * angle.sin(),
                stage.y
                    + params.header_height
                    + radius * angle.cos() * params.amphitheater_compression,
            )
        })
        .collect()
}
