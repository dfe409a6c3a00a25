use serde::{Deserialize, Serialize};

use seatkit_core::{GuestId, SeatId, TableId};

/// An addressable slot of a table, optionally occupied by one guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: SeatId,
    #[serde(default)]
    pub guest_id: Option<GuestId>,
    /// Zero-based index within the owning table, in geometry order.
    pub position: usize,
}

impl Seat {
    pub fn new(position: usize) -> Self {
        Self {
            id: SeatId::new(),
            guest_id: None,
            position,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.guest_id.is_some()
    }
}

/// Fully qualified seat address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRef {
    pub table_id: TableId,
    pub seat_id: SeatId,
}

impl SeatRef {
    pub fn new(table_id: TableId, seat_id: SeatId) -> Self {
        Self { table_id, seat_id }
    }
}
