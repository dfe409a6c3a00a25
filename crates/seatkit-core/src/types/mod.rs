//! Shared identifier types.

pub mod ids;

pub use ids::{GuestId, SeatId, TableId};
