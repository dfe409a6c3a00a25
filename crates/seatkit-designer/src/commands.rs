//! User intents understood by the seating state engine.
//!
//! The presentation layer never touches entities directly. It builds a
//! [`SeatingCommand`] and hands it to [`crate::SeatingState::apply`] (or to a
//! [`crate::LayoutStore`], which also persists and notifies).

use serde::{Deserialize, Serialize};

use seatkit_core::{GuestId, SeatId, TableId};

use crate::model::{SeatRef, TableType};

/// Partial table configuration. `None` leaves a field untouched; seat-count fields that do
/// not apply to the table's shape are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfigUpdate {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Degrees.
    pub rotation: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Round, square and rectangle tables.
    pub seat_count: Option<usize>,
    /// Theater tables.
    pub rows: Option<usize>,
    /// Theater tables.
    pub seats_per_row: Option<usize>,
    /// Amphitheater tables.
    pub row_configs: Option<Vec<usize>>,
}

impl TableConfigUpdate {
    pub fn seat_count(seat_count: usize) -> Self {
        Self {
            seat_count: Some(seat_count),
            ..Self::default()
        }
    }

    pub fn theater(rows: usize, seats_per_row: usize) -> Self {
        Self {
            rows: Some(rows),
            seats_per_row: Some(seats_per_row),
            ..Self::default()
        }
    }

    pub fn amphitheater(row_configs: Vec<usize>) -> Self {
        Self {
            row_configs: Some(row_configs),
            ..Self::default()
        }
    }
}

/// A single mutation of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeatingCommand {
    AddGuest {
        first_name: String,
        last_name: String,
        middle_name: Option<String>,
    },
    RemoveGuest {
        guest_id: GuestId,
    },
    /// One raw name per entry, parsed like a guest list line.
    ImportGuests {
        lines: Vec<String>,
    },
    AddTable {
        table_type: TableType,
        /// Blank or missing names default to `Table N`.
        name: Option<String>,
        x: f64,
        y: f64,
    },
    RemoveTable {
        table_id: TableId,
    },
    UpdateTablePosition {
        table_id: TableId,
        x: f64,
        y: f64,
    },
    UpdateTableRotation {
        table_id: TableId,
        rotation: f64,
    },
    UpdateTableConfig {
        table_id: TableId,
        update: TableConfigUpdate,
    },
    AssignGuestToSeat {
        guest_id: GuestId,
        table_id: TableId,
        seat_id: SeatId,
    },
    UnassignGuestFromSeat {
        table_id: TableId,
        seat_id: SeatId,
    },
    MoveGuestBetweenSeats {
        guest_id: GuestId,
        from: SeatRef,
        to: SeatRef,
    },
    ClearLayout,
    ResetAll,
}

impl SeatingCommand {
    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            SeatingCommand::AddGuest { .. } => "Add Guest",
            SeatingCommand::RemoveGuest { .. } => "Remove Guest",
            SeatingCommand::ImportGuests { .. } => "Import Guests",
            SeatingCommand::AddTable { .. } => "Add Table",
            SeatingCommand::RemoveTable { .. } => "Remove Table",
            SeatingCommand::UpdateTablePosition { .. } => "Move Table",
            SeatingCommand::UpdateTableRotation { .. } => "Rotate Table",
            SeatingCommand::UpdateTableConfig { .. } => "Configure Table",
            SeatingCommand::AssignGuestToSeat { .. } => "Assign Seat",
            SeatingCommand::UnassignGuestFromSeat { .. } => "Unassign Seat",
            SeatingCommand::MoveGuestBetweenSeats { .. } => "Move Guest",
            SeatingCommand::ClearLayout => "Clear Layout",
            SeatingCommand::ResetAll => "Reset All",
        }
    }

    pub fn add_guest(first_name: &str, last_name: &str, middle_name: Option<&str>) -> Self {
        SeatingCommand::AddGuest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_name: middle_name.map(str::to_string),
        }
    }

    pub fn add_table(table_type: TableType, x: f64, y: f64) -> Self {
        SeatingCommand::AddTable {
            table_type,
            name: None,
            x,
            y,
        }
    }

    pub fn assign(guest_id: GuestId, seat: SeatRef) -> Self {
        SeatingCommand::AssignGuestToSeat {
            guest_id,
            table_id: seat.table_id,
            seat_id: seat.seat_id,
        }
    }
}
