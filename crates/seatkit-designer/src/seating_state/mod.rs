//! Seating state engine.
//!
//! Owns the [`Layout`] aggregate and is the only place it is mutated. Operations are split
//! into submodules:
//! - `guests`: guest creation, removal and bulk import
//! - `tables`: table lifecycle, position and configuration
//! - `seats`: assigning, moving and releasing guests
//! - `file_io`: snapshot export and import
//!
//! Every operation validates and resolves everything it needs before it mutates, so a
//! rejected or no-op call leaves the layout exactly as it was. Unknown ids are not errors:
//! the call reports "unchanged" and logs at debug level.

mod file_io;
mod guests;
mod seats;
mod tables;

use seatkit_core::{GuestId, LayoutEvent, TableId, ValidationError};

use crate::commands::SeatingCommand;
use crate::geometry::{seat_positions, GeometryParams, SeatPosition};
use crate::model::{Guest, Layout, Table};

/// Seating state for UI integration.
#[derive(Debug, Clone, Default)]
pub struct SeatingState {
    layout: Layout,
}

impl SeatingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn tables(&self) -> &[Table] {
        self.layout.tables()
    }

    pub fn guests(&self) -> &[Guest] {
        self.layout.guests()
    }

    pub fn unassigned_guests(&self) -> &[GuestId] {
        self.layout.unassigned_guests()
    }

    pub fn guest(&self, id: GuestId) -> Option<&Guest> {
        self.layout.guest(id)
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.layout.table(id)
    }

    /// Seat markers of a table at the given render scale.
    pub fn seat_positions(
        &self,
        table_id: TableId,
        params: &GeometryParams,
        scale: f64,
    ) -> Option<Vec<SeatPosition>> {
        self.layout
            .table(table_id)
            .map(|table| seat_positions(table, params, scale))
    }

    /// Applies `command`.
    ///
    /// Returns the event describing the change, or `None` when the layout is unchanged.
    pub fn apply(
        &mut self,
        command: SeatingCommand,
    ) -> Result<Option<LayoutEvent>, ValidationError> {
        tracing::trace!("apply: {}", command.name());
        let event = match command {
            SeatingCommand::AddGuest {
                first_name,
                last_name,
                middle_name,
            } => {
                let guest_id =
                    self.add_guest(&first_name, &last_name, middle_name.as_deref())?;
                Some(LayoutEvent::GuestAdded { guest_id })
            }
            SeatingCommand::RemoveGuest { guest_id } => self
                .remove_guest(guest_id)
                .then_some(LayoutEvent::GuestRemoved { guest_id }),
            SeatingCommand::ImportGuests { lines } => {
                let count = self.import_guests(&lines).len();
                (count > 0).then_some(LayoutEvent::GuestsImported { count })
            }
            SeatingCommand::AddTable {
                table_type,
                name,
                x,
                y,
            } => {
                let table_id = self.add_table(table_type, name.as_deref(), x, y)?;
                Some(LayoutEvent::TableAdded { table_id })
            }
            SeatingCommand::RemoveTable { table_id } => self
                .remove_table(table_id)
                .map(|released| LayoutEvent::TableRemoved { table_id, released }),
            SeatingCommand::UpdateTablePosition { table_id, x, y } => self
                .update_table_position(table_id, x, y)?
                .then_some(LayoutEvent::TableUpdated { table_id }),
            SeatingCommand::UpdateTableRotation { table_id, rotation } => self
                .update_table_rotation(table_id, rotation)?
                .then_some(LayoutEvent::TableUpdated { table_id }),
            SeatingCommand::UpdateTableConfig { table_id, update } => self
                .update_table_config(table_id, &update)?
                .then_some(LayoutEvent::TableUpdated { table_id }),
            SeatingCommand::AssignGuestToSeat {
                guest_id,
                table_id,
                seat_id,
            } => self
                .assign_guest_to_seat(guest_id, table_id, seat_id)
                .then_some(LayoutEvent::SeatAssigned {
                    guest_id,
                    table_id,
                    seat_id,
                }),
            SeatingCommand::UnassignGuestFromSeat { table_id, seat_id } => self
                .unassign_guest_from_seat(table_id, seat_id)
                .map(|_| LayoutEvent::SeatCleared { table_id, seat_id }),
            SeatingCommand::MoveGuestBetweenSeats { guest_id, from, to } => self
                .move_guest_between_seats(guest_id, from, to)
                .then_some(LayoutEvent::SeatAssigned {
                    guest_id,
                    table_id: to.table_id,
                    seat_id: to.seat_id,
                }),
            SeatingCommand::ClearLayout => {
                self.clear_layout().then_some(LayoutEvent::LayoutCleared)
            }
            SeatingCommand::ResetAll => self.reset_all().then_some(LayoutEvent::LayoutReset),
        };
        Ok(event)
    }

    /// Removes every table; seated guests return to the unassigned pool.
    pub fn clear_layout(&mut self) -> bool {
        if self.layout.tables.is_empty() {
            return false;
        }
        let released: Vec<GuestId> = self
            .layout
            .tables
            .iter()
            .flat_map(Table::seated_guests)
            .collect();
        tracing::debug!(
            "Clearing {} tables, releasing {} guests",
            self.layout.tables.len(),
            released.len()
        );
        self.layout.tables.clear();
        self.layout.unassigned_guests.extend(released);
        true
    }

    /// Wipes tables, guests and the unassigned pool.
    pub fn reset_all(&mut self) -> bool {
        if self.layout.is_empty() {
            return false;
        }
        self.layout = Layout::new();
        true
    }

    pub(crate) fn replace_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }
}
