//! Guest lifecycle operations.

use seatkit_core::{GuestId, ValidationError};

use super::SeatingState;
use crate::import::parse_name_line;
use crate::model::Guest;

impl SeatingState {
    /// Creates a guest and puts it in the unassigned pool.
    pub fn add_guest(
        &mut self,
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> Result<GuestId, ValidationError> {
        if first_name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "first_name",
            });
        }
        let guest = Guest::new(first_name, last_name, middle_name);
        let id = guest.id;
        tracing::debug!("Adding guest {} ({})", guest.full_name, id.short());
        self.layout.guests.push(guest);
        self.layout.unassigned_guests.push(id);
        Ok(id)
    }

    /// Deletes a guest and frees the seat it occupied.
    pub fn remove_guest(&mut self, guest_id: GuestId) -> bool {
        let Some(index) = self.layout.guests.iter().position(|g| g.id == guest_id) else {
            tracing::debug!("remove_guest: unknown guest {}", guest_id.short());
            return false;
        };

        self.layout.guests.remove(index);
        self.layout.unassigned_guests.retain(|id| *id != guest_id);
        for seat in self
            .layout
            .tables
            .iter_mut()
            .flat_map(|t| t.seats.iter_mut())
            .filter(|s| s.guest_id == Some(guest_id))
        {
            seat.guest_id = None;
        }
        true
    }

    /// Creates one unassigned guest per non-blank line, in order.
    pub fn import_guests<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<GuestId> {
        let guests: Vec<Guest> = lines
            .iter()
            .filter_map(|line| parse_name_line(line.as_ref()))
            .map(|name| Guest::new(&name.first_name, &name.last_name, name.middle_name.as_deref()))
            .collect();

        let ids: Vec<GuestId> = guests.iter().map(|g| g.id).collect();
        self.layout.guests.extend(guests);
        self.layout.unassigned_guests.extend(ids.iter().copied());
        tracing::info!("Imported {} guests", ids.len());
        ids
    }
}
