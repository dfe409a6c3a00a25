//! # SeatKit Designer
//!
//! The seating chart engine: guests, tables and seats, the operations that keep them
//! consistent, and the geometry that places seats on the plan.
//!
//! ## Core Components
//!
//! - **Model**: `Guest`, `Seat`, `Table` (round, square, rectangle, theater, amphitheater)
//!   and the `Layout` aggregate
//! - **Geometry**: seat positions per table shape, recomputed on demand
//! - **Viewport**: zoom, pan and seat hit-testing
//! - **Seating state**: every mutation, expressed as a `SeatingCommand`
//! - **Drag**: the drag-and-drop state machine that produces commands
//! - **Serialization**: JSON layout snapshots
//! - **Store**: the persisted layout that notifies views through the event bus
//!
//! ## Architecture
//!
//! ```text
//! view intent -> SeatingCommand -> LayoutStore::dispatch
//!                                    ├── SeatingState::apply (validate, mutate)
//!                                    ├── EventBus (LayoutEvent)
//!                                    └── SnapshotSink (save)
//! render -> geometry::seat_positions(table) -> Viewport -> screen
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use seatkit_designer::{SeatingCommand, SeatingState, TableType};
//!
//! let mut state = SeatingState::new();
//! state.apply(SeatingCommand::add_table(TableType::Round, 100.0, 100.0)).unwrap();
//! let guest = state.add_guest("Иван", "Иванов", None).unwrap();
//!
//! let (table_id, seat_id) = {
//!     let table = &state.tables()[0];
//!     (table.id, table.seats[0].id)
//! };
//! state.assign_guest_to_seat(guest, table_id, seat_id);
//! assert!(state.unassigned_guests().is_empty());
//! ```

pub mod commands;
pub mod drag;
pub mod geometry;
pub mod import;
pub mod model;
pub mod seating_state;
pub mod serialization;
pub mod store;
pub mod viewport;

pub use commands::{SeatingCommand, TableConfigUpdate};
pub use drag::{DragState, DropResolution, DropTarget};
pub use geometry::{seat_positions, GeometryParams, SeatPosition};
pub use import::{parse_guest_list, parse_name_line, read_guest_list, ParsedName};
pub use model::{
    Guest, Layout, Point, Seat, SeatRef, Table, TableShape, TableType, MAX_SEATS_PER_TABLE,
};
pub use seating_state::SeatingState;
pub use serialization::{LayoutSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use store::{FileSink, LayoutStore, SnapshotSink};
pub use viewport::{Viewport, ZoomLimits};
