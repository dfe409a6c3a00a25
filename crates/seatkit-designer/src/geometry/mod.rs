//! Seat layout geometry.
//!
//! Pure functions that place the seats of a table in the table's local coordinate space
//! (origin at the table's top-left corner). Positions are never stored; callers recompute
//! them from the current table parameters whenever they render or hit-test.

mod amphitheater;
mod perimeter;
mod round;
mod theater;

pub use amphitheater::locate_seat;
pub use perimeter::edge_counts;

use crate::model::{Point, Table, TableShape};

/// Constants used by the seat placement algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    /// Diameter of a seat marker.
    pub seat_size: f64,
    /// Gap between the table body and its seats.
    pub seat_margin: f64,
    /// Stage height reserved above theater and amphitheater rows.
    pub header_height: f64,
    pub amphitheater_base_radius: f64,
    pub amphitheater_radius_step: f64,
    /// Angular width of an amphitheater row, in degrees.
    pub amphitheater_span_degrees: f64,
    /// Vertical squash of amphitheater arcs.
    pub amphitheater_compression: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            seat_size: 30.0,
            seat_margin: 8.0,
            header_height: 40.0,
            amphitheater_base_radius: 60.0,
            amphitheater_radius_step: 40.0,
            amphitheater_span_degrees: 120.0,
            amphitheater_compression: 0.6,
        }
    }
}

impl GeometryParams {
    /// Distance from a table edge to the centre of a perimeter seat.
    pub fn seat_offset(&self) -> f64 {
        self.seat_margin + self.seat_size / 2.0
    }
}

/// A seat marker in local table coordinates, already multiplied by the render scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatPosition {
    /// Left edge of the marker.
    pub x: f64,
    /// Top edge of the marker.
    pub y: f64,
    /// Marker diameter.
    pub size: f64,
}

impl SeatPosition {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// True when `point` lies inside the round marker.
    pub fn contains(&self, point: Point) -> bool {
        self.center().distance_to(&point) <= self.size / 2.0
    }
}

/// Computes the seat markers of `table`, one per seat and in seat order.
pub fn seat_positions(table: &Table, params: &GeometryParams, scale: f64) -> Vec<SeatPosition> {
    seat_centers(table, params)
        .into_iter()
        .map(|c| SeatPosition {
            x: (c.x - params.seat_size / 2.0) * scale,
            y: (c.y - params.seat_size / 2.0) * scale,
            size: params.seat_size * scale,
        })
        .collect()
}

/// Seat centres of `table` in unscaled local coordinates.
///
/// A shape over the seat limit has no positions.
pub fn seat_centers(table: &Table, params: &GeometryParams) -> Vec<Point> {
    if table.shape.seat_count().is_err() {
        return Vec::new();
    }
    let (width, height) = (table.width, table.height);
    match &table.shape {
        TableShape::Round { seat_count } => round::centers(*seat_count, width, height, params),
        TableShape::Square { seat_count } | TableShape::Rectangle { seat_count } => {
            perimeter::centers(*seat_count, width, height, params)
        }
        TableShape::Theater {
            rows,
            seats_per_row,
        } => theater::centers(*rows, *seats_per_row, width, height, params),
        TableShape::Amphitheater { row_configs } => {
            amphitheater::centers(row_configs, width, params)
        }
    }
}
