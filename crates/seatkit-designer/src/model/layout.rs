use std::collections::{HashMap, HashSet};

use seatkit_core::{GuestId, SeatId, TableId};

use super::{Guest, SeatRef, Table};

/// Aggregate root: all tables, all guests and the unassigned pool.
///
/// Every guest is either listed once in the unassigned pool or sits on exactly one seat.
/// Only [`crate::SeatingState`] mutates a layout, so the invariant holds between operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub(crate) tables: Vec<Table>,
    pub(crate) guests: Vec<Guest>,
    pub(crate) unassigned_guests: Vec<GuestId>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a layout from already validated parts.
    pub(crate) fn from_parts(
        tables: Vec<Table>,
        guests: Vec<Guest>,
        unassigned_guests: Vec<GuestId>,
    ) -> Self {
        Self {
            tables,
            guests,
            unassigned_guests,
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn unassigned_guests(&self) -> &[GuestId] {
        &self.unassigned_guests
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.guests.is_empty()
    }

    pub fn guest(&self, id: GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub(crate) fn table_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    pub fn is_unassigned(&self, id: GuestId) -> bool {
        self.unassigned_guests.contains(&id)
    }

    /// Seat currently occupied by `guest_id`, if any.
    pub fn seat_of(&self, guest_id: GuestId) -> Option<SeatRef> {
        self.tables.iter().find_map(|table| {
            table
                .seats
                .iter()
                .find(|s| s.guest_id == Some(guest_id))
                .map(|s| SeatRef::new(table.id, s.id))
        })
    }

    /// Occupant of a seat. `None` for an empty or unknown seat.
    pub fn occupant(&self, seat: SeatRef) -> Option<GuestId> {
        self.table(seat.table_id)?.seat(seat.seat_id)?.guest_id
    }

    pub fn contains_seat(&self, seat: SeatRef) -> bool {
        self.table(seat.table_id)
            .is_some_and(|t| t.seat(seat.seat_id).is_some())
    }

    pub fn seat_count(&self) -> usize {
        self.tables.iter().map(|t| t.seats.len()).sum()
    }

    pub fn seated_count(&self) -> usize {
        self.tables.iter().map(Table::occupied_count).sum()
    }

    /// Next free default table name, `Table N` with N = table count + 1 or higher.
    pub(crate) fn next_table_name(&self) -> String {
        let mut n = self.tables.len() + 1;
        loop {
            let candidate = format!("Table {}", n);
            if !self.tables.iter().any(|t| t.name == candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Returns every broken invariant, or an empty list for a consistent layout.
    pub fn check_integrity(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut guest_ids = HashSet::new();
        for guest in &self.guests {
            if !guest_ids.insert(guest.id) {
                problems.push(format!("duplicate guest id {}", guest.id));
            }
        }

        let mut table_ids = HashSet::new();
        let mut seat_ids: HashSet<SeatId> = HashSet::new();
        let mut seated: HashMap<GuestId, usize> = HashMap::new();
        for table in &self.tables {
            if !table_ids.insert(table.id) {
                problems.push(format!("duplicate table id {}", table.id));
            }
            if let Err(e) = table.validate() {
                problems.push(format!("table {}: {}", table.id, e));
            }
            match table.shape.seat_count() {
                Ok(expected) if table.seats.len() != expected => problems.push(format!(
                    "table {} has {} seats, its layout implies {}",
                    table.id,
                    table.seats.len(),
                    expected
                )),
                Ok(_) => {}
                Err(e) => problems.push(format!("table {}: {}", table.id, e)),
            }
            for (index, seat) in table.seats.iter().enumerate() {
                if seat.position != index {
                    problems.push(format!(
                        "table {} seat {} has position {}, expected {}",
                        table.id, seat.id, seat.position, index
                    ));
                }
                if !seat_ids.insert(seat.id) {
                    problems.push(format!("duplicate seat id {}", seat.id));
                }
                if let Some(guest_id) = seat.guest_id {
                    if !guest_ids.contains(&guest_id) {
                        problems.push(format!(
                            "seat {} references unknown guest {}",
                            seat.id, guest_id
                        ));
                    }
                    *seated.entry(guest_id).or_default() += 1;
                }
            }
        }

        let mut unassigned = HashSet::new();
        for guest_id in &self.unassigned_guests {
            if !guest_ids.contains(guest_id) {
                problems.push(format!("unassigned list references unknown guest {}", guest_id));
            }
            if !unassigned.insert(*guest_id) {
                problems.push(format!("guest {} is listed as unassigned twice", guest_id));
            }
        }

        for guest in &self.guests {
            let seats = seated.get(&guest.id).copied().unwrap_or(0);
            let pooled = unassigned.contains(&guest.id);
            match (seats, pooled) {
                (0, true) | (1, false) => {}
                (0, false) => problems.push(format!("guest {} is neither seated nor unassigned", guest.id)),
                (_, true) => problems.push(format!("guest {} is both seated and unassigned", guest.id)),
                (n, false) => problems.push(format!("guest {} occupies {} seats", guest.id, n)),
            }
        }

        problems
    }
}
