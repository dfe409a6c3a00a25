use serde::{Deserialize, Serialize};

use seatkit_core::{GuestId, SeatId, TableId, ValidationError};

use super::{Seat, TableType};

/// Upper bound on the seats of a single table.
pub const MAX_SEATS_PER_TABLE: usize = 10_000;

/// Shape of a table together with the parameters that decide its seat count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum TableShape {
    Round { seat_count: usize },
    Square { seat_count: usize },
    Rectangle { seat_count: usize },
    Theater { rows: usize, seats_per_row: usize },
    Amphitheater { row_configs: Vec<usize> },
}

impl TableShape {
    pub fn table_type(&self) -> TableType {
        match self {
            TableShape::Round { .. } => TableType::Round,
            TableShape::Square { .. } => TableType::Square,
            TableShape::Rectangle { .. } => TableType::Rectangle,
            TableShape::Theater { .. } => TableType::Theater,
            TableShape::Amphitheater { .. } => TableType::Amphitheater,
        }
    }

    /// Number of seats implied by the layout parameters.
    ///
    /// Fails when the parameters imply more than [`MAX_SEATS_PER_TABLE`] seats, including
    /// counts that do not fit in a `usize`.
    pub fn seat_count(&self) -> Result<usize, ValidationError> {
        let count = match self {
            TableShape::Round { seat_count }
            | TableShape::Square { seat_count }
            | TableShape::Rectangle { seat_count } => Some(*seat_count),
            TableShape::Theater {
                rows,
                seats_per_row,
            } => rows.checked_mul(*seats_per_row),
            TableShape::Amphitheater { row_configs } => row_configs
                .iter()
                .try_fold(0usize, |total, &row| total.checked_add(row)),
        };
        match count {
            Some(count) if count <= MAX_SEATS_PER_TABLE => Ok(count),
            _ => Err(ValidationError::TooManySeats {
                max: MAX_SEATS_PER_TABLE,
            }),
        }
    }
}

/// A physical table with its ordered seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Degrees. Cosmetic only, geometry ignores it.
    #[serde(default)]
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub shape: TableShape,
    pub seats: Vec<Seat>,
}

impl Table {
    /// Creates a table of `table_type` with its default size, layout and empty seats.
    pub fn new(table_type: TableType, name: impl Into<String>, x: f64, y: f64) -> Self {
        let (width, height) = table_type.default_size();
        let mut table = Self {
            id: TableId::new(),
            name: name.into(),
            x,
            y,
            rotation: 0.0,
            width,
            height,
            shape: table_type.default_shape(),
            seats: Vec::new(),
        };
        let seat_count = table.shape.seat_count().unwrap_or_default();
        table.seats = (0..seat_count).map(Seat::new).collect();
        table
    }

    pub fn table_type(&self) -> TableType {
        self.shape.table_type()
    }

    pub fn seat(&self, seat_id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }

    pub(crate) fn seat_mut(&mut self, seat_id: SeatId) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == seat_id)
    }

    /// Guests currently seated at this table, in seat order.
    pub fn seated_guests(&self) -> impl Iterator<Item = GuestId> + '_ {
        self.seats.iter().filter_map(|s| s.guest_id)
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    /// Brings `seats` in line with the shape's seat count.
    ///
    /// Seats at retained positions keep their id and occupant. Returns the guests that sat
    /// on removed seats, in seat order. An oversized shape is rejected before any seat is
    /// touched.
    pub(crate) fn reconcile_seats(&mut self) -> Result<Vec<GuestId>, ValidationError> {
        let target = self.shape.seat_count()?;
        let released = if self.seats.len() > target {
            self.seats
                .drain(target..)
                .filter_map(|seat| seat.guest_id)
                .collect()
        } else {
            Vec::new()
        };
        for position in self.seats.len()..target {
            self.seats.push(Seat::new(position));
        }
        Ok(released)
    }

    /// Checks the numeric fields that come from user input or a snapshot.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_finite("rotation", self.rotation)?;
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

pub(crate) fn check_dimension(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveDimension { field, value })
    }
}
