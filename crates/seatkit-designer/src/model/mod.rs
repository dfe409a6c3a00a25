//! Entity model: guests, seats, tables and the layout aggregate.

use serde::{Deserialize, Serialize};

mod guest;
mod layout;
mod seat;
mod table;

pub use guest::{compose_full_name, Guest};
pub use layout::Layout;
pub use seat::{Seat, SeatRef};
pub use table::{Table, TableShape, MAX_SEATS_PER_TABLE};

pub(crate) use table::{check_dimension, check_finite};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Shape tag of a table, used when creating one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Round,
    Square,
    Rectangle,
    Theater,
    Amphitheater,
}

impl TableType {
    /// All table types, in toolbar order.
    pub const ALL: [TableType; 5] = [
        TableType::Round,
        TableType::Square,
        TableType::Rectangle,
        TableType::Theater,
        TableType::Amphitheater,
    ];

    /// Returns the name of the table type.
    pub fn name(&self) -> &'static str {
        match self {
            TableType::Round => "Round",
            TableType::Square => "Square",
            TableType::Rectangle => "Rectangle",
            TableType::Theater => "Theater",
            TableType::Amphitheater => "Amphitheater",
        }
    }

    /// Seat layout a freshly created table of this type starts with.
    pub fn default_shape(&self) -> TableShape {
        match self {
            TableType::Round => TableShape::Round { seat_count: 8 },
            TableType::Square => TableShape::Square { seat_count: 8 },
            TableType::Rectangle => TableShape::Rectangle { seat_count: 10 },
            TableType::Theater => TableShape::Theater {
                rows: 5,
                seats_per_row: 8,
            },
            TableType::Amphitheater => TableShape::Amphitheater {
                row_configs: vec![8; 5],
            },
        }
    }

    /// Default (width, height) of a freshly created table.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            TableType::Round | TableType::Square => (160.0, 160.0),
            TableType::Rectangle => (240.0, 120.0),
            TableType::Theater => (400.0, 300.0),
            TableType::Amphitheater => (480.0, 320.0),
        }
    }
}

impl std::fmt::Display for TableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
