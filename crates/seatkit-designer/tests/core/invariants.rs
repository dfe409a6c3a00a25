use proptest::prelude::*;

use seatkit_core::{GuestId, SeatId, TableId};
use seatkit_designer::{SeatRef, SeatingCommand, SeatingState, TableConfigUpdate, TableType};

/// Abstract operation; indexes are resolved against the live state when applied,
/// and an index past the end stands for an id that does not exist.
#[derive(Debug, Clone)]
enum Op {
    AddGuest(bool),
    Import(usize),
    RemoveGuest(usize),
    AddTable(usize),
    RemoveTable(usize),
    Resize(usize, usize, usize),
    Assign(usize, usize, usize),
    Unassign(usize, usize),
    Move(usize, usize, usize),
    Position(usize, i32, i32),
    Clear,
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<bool>().prop_map(Op::AddGuest),
        1 => (0usize..4).prop_map(Op::Import),
        2 => (0usize..12).prop_map(Op::RemoveGuest),
        3 => (0usize..5).prop_map(Op::AddTable),
        1 => (0usize..5).prop_map(Op::RemoveTable),
        3 => (0usize..5, 0usize..12, 0usize..5).prop_map(|(t, n, r)| Op::Resize(t, n, r)),
        8 => (0usize..12, 0usize..5, 0usize..12).prop_map(|(g, t, s)| Op::Assign(g, t, s)),
        2 => (0usize..5, 0usize..12).prop_map(|(t, s)| Op::Unassign(t, s)),
        4 => (0usize..12, 0usize..5, 0usize..12).prop_map(|(g, t, s)| Op::Move(g, t, s)),
        1 => (0usize..5, -500i32..500, -500i32..500).prop_map(|(t, x, y)| Op::Position(t, x, y)),
        1 => Just(Op::Clear),
        1 => Just(Op::Reset),
    ]
}

fn guest_at(state: &SeatingState, index: usize) -> GuestId {
    state
        .guests()
        .get(index)
        .map(|g| g.id)
        .unwrap_or_default()
}

fn table_at(state: &SeatingState, index: usize) -> TableId {
    state
        .tables()
        .get(index)
        .map(|t| t.id)
        .unwrap_or_default()
}

fn seat_at(state: &SeatingState, table: usize, seat: usize) -> SeatRef {
    match state.tables().get(table) {
        Some(t) => SeatRef::new(t.id, t.seats.get(seat).map(|s| s.id).unwrap_or_default()),
        None => SeatRef::new(TableId::new(), SeatId::new()),
    }
}

fn to_command(state: &SeatingState, op: &Op) -> SeatingCommand {
    match *op {
        Op::AddGuest(with_middle) => {
            SeatingCommand::add_guest("Guest", "Test", with_middle.then_some("Middle"))
        }
        Op::Import(n) => SeatingCommand::ImportGuests {
            lines: (0..n).map(|i| format!("Last{} First{}", i, i)).collect(),
        },
        Op::RemoveGuest(g) => SeatingCommand::RemoveGuest {
            guest_id: guest_at(state, g),
        },
        Op::AddTable(t) => SeatingCommand::add_table(TableType::ALL[t], 0.0, 0.0),
        Op::RemoveTable(t) => SeatingCommand::RemoveTable {
            table_id: table_at(state, t),
        },
        Op::Resize(t, n, rows) => SeatingCommand::UpdateTableConfig {
            table_id: table_at(state, t),
            update: TableConfigUpdate {
                seat_count: Some(n),
                rows: Some(rows),
                seats_per_row: Some(n / 2),
                row_configs: Some((0..rows).map(|r| (n + r) % 4).collect()),
                ..Default::default()
            },
        },
        Op::Assign(g, t, s) => SeatingCommand::assign(guest_at(state, g), seat_at(state, t, s)),
        Op::Unassign(t, s) => {
            let seat = seat_at(state, t, s);
            SeatingCommand::UnassignGuestFromSeat {
                table_id: seat.table_id,
                seat_id: seat.seat_id,
            }
        }
        Op::Move(g, t, s) => {
            let guest_id = guest_at(state, g);
            let from = state
                .layout()
                .seat_of(guest_id)
                .unwrap_or_else(|| seat_at(state, 0, 0));
            SeatingCommand::MoveGuestBetweenSeats {
                guest_id,
                from,
                to: seat_at(state, t, s),
            }
        }
        Op::Position(t, x, y) => SeatingCommand::UpdateTablePosition {
            table_id: table_at(state, t),
            x: x as f64,
            y: y as f64,
        },
        Op::Clear => SeatingCommand::ClearLayout,
        Op::Reset => SeatingCommand::ResetAll,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_every_guest_is_pooled_or_seated(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut state = SeatingState::new();
        for op in &ops {
            let command = to_command(&state, op);
            let guests_before = state.guests().len();
            let changed = state.apply(command.clone()).unwrap().is_some();

            let problems = state.layout().check_integrity();
            prop_assert!(problems.is_empty(), "after {:?}: {:?}", command, problems);

            for table in state.tables() {
                prop_assert_eq!(table.seats.len(), table.shape.seat_count().unwrap());
            }
            prop_assert_eq!(
                state.guests().len(),
                state.unassigned_guests().len() + state.layout().seated_count()
            );

            // only guest lifecycle commands may change the number of guests
            match command {
                SeatingCommand::AddGuest { .. }
                | SeatingCommand::ImportGuests { .. }
                | SeatingCommand::RemoveGuest { .. }
                | SeatingCommand::ResetAll => {}
                _ => prop_assert_eq!(state.guests().len(), guests_before),
            }
            if !changed {
                prop_assert_eq!(state.guests().len(), guests_before);
            }
        }
    }

    #[test]
    fn prop_assign_twice_equals_assign_once(
        setup in prop::collection::vec(op_strategy(), 0..30),
        guest in 0usize..12,
        table in 0usize..5,
        seat in 0usize..12,
    ) {
        let mut state = SeatingState::new();
        for op in &setup {
            let command = to_command(&state, op);
            state.apply(command).unwrap();
        }

        let command = SeatingCommand::assign(guest_at(&state, guest), seat_at(&state, table, seat));
        state.apply(command.clone()).unwrap();
        let once = state.layout().clone();
        prop_assert_eq!(state.apply(command).unwrap(), None);
        prop_assert_eq!(state.layout(), &once);
    }
}
