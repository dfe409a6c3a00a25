//! Drag-and-drop state machine.
//!
//! Independent of any input device: the view reports where a drag starts and where it
//! ends, and the machine turns a completed drop into at most one [`SeatingCommand`].
//!
//! ```text
//! Idle --begin(guest)--> Dragging { guest, origin } --drop/cancel--> Idle
//! ```

use seatkit_core::GuestId;

use crate::commands::SeatingCommand;
use crate::model::{Layout, SeatRef};

/// Where a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Seat(SeatRef),
    UnassignedPool,
    /// Outside any drop zone.
    Nowhere,
}

/// Outcome of a drop.
#[derive(Debug, Clone, PartialEq)]
pub enum DropResolution {
    /// Apply this command to the layout.
    Commit(SeatingCommand),
    /// The drag ended without effect.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        guest_id: GuestId,
        /// Seat the guest occupied when the drag started; `None` when dragged from the pool.
        origin: Option<SeatRef>,
    },
}

impl DragState {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn dragged_guest(&self) -> Option<GuestId> {
        match self {
            DragState::Dragging { guest_id, .. } => Some(*guest_id),
            DragState::Idle => None,
        }
    }

    /// Starts dragging `guest_id`. An unknown guest leaves the machine idle.
    pub fn begin(&mut self, layout: &Layout, guest_id: GuestId) -> bool {
        if layout.guest(guest_id).is_none() {
            tracing::debug!("drag: unknown guest {}", guest_id.short());
            *self = DragState::Idle;
            return false;
        }
        *self = DragState::Dragging {
            guest_id,
            origin: layout.seat_of(guest_id),
        };
        true
    }

    /// Whether dropping on `seat` would do something. Used for hover highlighting.
    pub fn is_droppable(&self, layout: &Layout, seat: SeatRef) -> bool {
        match self {
            DragState::Dragging { origin, .. } => {
                *origin != Some(seat) && layout.contains_seat(seat)
            }
            DragState::Idle => false,
        }
    }

    /// Ends the drag on `target` and returns to idle.
    pub fn drop_on(&mut self, layout: &Layout, target: DropTarget) -> DropResolution {
        let DragState::Dragging { guest_id, .. } = std::mem::take(self) else {
            return DropResolution::Cancel;
        };
        if layout.guest(guest_id).is_none() {
            return DropResolution::Cancel;
        }
        let current = layout.seat_of(guest_id);

        match (target, current) {
            (DropTarget::Seat(to), Some(from)) if to == from => DropResolution::Cancel,
            (DropTarget::Seat(to), _) if !layout.contains_seat(to) => DropResolution::Cancel,
            (DropTarget::Seat(to), Some(from)) => {
                DropResolution::Commit(SeatingCommand::MoveGuestBetweenSeats { guest_id, from, to })
            }
            (DropTarget::Seat(to), None) => {
                DropResolution::Commit(SeatingCommand::assign(guest_id, to))
            }
            (DropTarget::UnassignedPool, Some(from)) => {
                DropResolution::Commit(SeatingCommand::UnassignGuestFromSeat {
                    table_id: from.table_id,
                    seat_id: from.seat_id,
                })
            }
            (DropTarget::UnassignedPool, None) | (DropTarget::Nowhere, _) => {
                DropResolution::Cancel
            }
        }
    }

    /// Abandons the drag. Returns the guest that was being dragged.
    pub fn cancel(&mut self) -> Option<GuestId> {
        let guest = self.dragged_guest();
        *self = DragState::Idle;
        guest
    }
}
