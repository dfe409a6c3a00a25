//! # SeatKit Core
//!
//! Core types shared by the SeatKit crates:
//! - strongly typed identifiers for guests, tables and seats
//! - the error taxonomy used across the workspace
//! - the event bus that lets several views observe one layout

pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{Error, Result, SnapshotError, ValidationError};

pub use event_bus::{
    AppEvent, DragEvent, ErrorEvent, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter, FileEvent, LayoutEvent, SubscriptionId,
};

pub use types::{GuestId, SeatId, TableId};
