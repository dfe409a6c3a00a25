//! Seat assignment operations.

use seatkit_core::{GuestId, SeatId, TableId};

use super::SeatingState;
use crate::model::SeatRef;

impl SeatingState {
    /// Seats a guest, vacating whatever seat it held before.
    ///
    /// A different occupant of the target seat is displaced to the unassigned pool.
    /// Assigning a guest to the seat it already holds changes nothing.
    pub fn assign_guest_to_seat(
        &mut self,
        guest_id: GuestId,
        table_id: TableId,
        seat_id: SeatId,
    ) -> bool {
        let target = SeatRef::new(table_id, seat_id);
        if self.layout.guest(guest_id).is_none() {
            tracing::debug!("assign: unknown guest {}", guest_id.short());
            return false;
        }
        if !self.layout.contains_seat(target) {
            tracing::debug!("assign: unknown seat {}", seat_id.short());
            return false;
        }

        let previous = self.layout.seat_of(guest_id);
        if previous == Some(target) {
            return false;
        }
        let displaced = self.layout.occupant(target);

        if let Some(previous) = previous {
            self.set_occupant(previous, None);
        }
        self.layout.unassigned_guests.retain(|id| *id != guest_id);
        if let Some(displaced) = displaced {
            tracing::debug!("{} displaced by {}", displaced.short(), guest_id.short());
            self.layout.unassigned_guests.push(displaced);
        }
        self.set_occupant(target, Some(guest_id));
        true
    }

    /// Clears a seat and returns its former occupant to the pool.
    pub fn unassign_guest_from_seat(
        &mut self,
        table_id: TableId,
        seat_id: SeatId,
    ) -> Option<GuestId> {
        let seat = SeatRef::new(table_id, seat_id);
        let Some(guest_id) = self.layout.occupant(seat) else {
            tracing::debug!("unassign: seat {} is empty or unknown", seat_id.short());
            return None;
        };
        self.set_occupant(seat, None);
        self.layout.unassigned_guests.push(guest_id);
        Some(guest_id)
    }

    /// Moves a seated guest from `from` to `to`.
    ///
    /// A different occupant of `to` is displaced to the unassigned pool. Nothing happens
    /// unless `from` currently holds the guest and `to` exists.
    pub fn move_guest_between_seats(
        &mut self,
        guest_id: GuestId,
        from: SeatRef,
        to: SeatRef,
    ) -> bool {
        if from == to {
            return false;
        }
        if self.layout.occupant(from) != Some(guest_id) {
            tracing::debug!(
                "move: {} is not seated at {}",
                guest_id.short(),
                from.seat_id.short()
            );
            return false;
        }
        if !self.layout.contains_seat(to) {
            tracing::debug!("move: unknown seat {}", to.seat_id.short());
            return false;
        }

        let displaced = self.layout.occupant(to);
        self.set_occupant(from, None);
        if let Some(displaced) = displaced {
            tracing::debug!("{} displaced by {}", displaced.short(), guest_id.short());
            self.layout.unassigned_guests.push(displaced);
        }
        self.set_occupant(to, Some(guest_id));
        true
    }

    fn set_occupant(&mut self, seat: SeatRef, guest_id: Option<GuestId>) {
        if let Some(slot) = self
            .layout
            .table_mut(seat.table_id)
            .and_then(|t| t.seat_mut(seat.seat_id))
        {
            slot.guest_id = guest_id;
        }
    }
}
