//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed by a view.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{GuestId, SeatId, TableId};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// The layout aggregate changed
    Layout(LayoutEvent),
    /// Drag-and-drop observation state changed
    Drag(DragEvent),
    /// Snapshot file operations
    File(FileEvent),
    /// User-visible notices about recoverable failures
    Error(ErrorEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Layout(_) => EventCategory::Layout,
            AppEvent::Drag(_) => EventCategory::Drag,
            AppEvent::File(_) => EventCategory::File,
            AppEvent::Error(_) => EventCategory::Error,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Layout(e) => e.description(),
            AppEvent::Drag(e) => e.description(),
            AppEvent::File(e) => e.description(),
            AppEvent::Error(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Layout mutations.
    Layout,
    /// Drag-and-drop observation.
    Drag,
    /// Snapshot file operations.
    File,
    /// Error notices.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Layout => write!(f, "Layout"),
            EventCategory::Drag => write!(f, "Drag"),
            EventCategory::File => write!(f, "File"),
            EventCategory::Error => write!(f, "Error"),
        }
    }
}

/// Layout mutation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// A guest was created.
    GuestAdded {
        /// The new guest.
        guest_id: GuestId,
    },
    /// A guest was deleted.
    GuestRemoved {
        /// The deleted guest.
        guest_id: GuestId,
    },
    /// A guest list was bulk-imported.
    GuestsImported {
        /// Number of guests created.
        count: usize,
    },
    /// A table was created.
    TableAdded {
        /// The new table.
        table_id: TableId,
    },
    /// A table was deleted and its guests released.
    TableRemoved {
        /// The deleted table.
        table_id: TableId,
        /// How many guests went back to the unassigned pool.
        released: usize,
    },
    /// Table position, rotation or configuration changed.
    TableUpdated {
        /// The updated table.
        table_id: TableId,
    },
    /// A guest was placed on a seat.
    SeatAssigned {
        /// The seated guest.
        guest_id: GuestId,
        /// The owning table.
        table_id: TableId,
        /// The seat.
        seat_id: SeatId,
    },
    /// A seat was cleared.
    SeatCleared {
        /// The owning table.
        table_id: TableId,
        /// The seat.
        seat_id: SeatId,
    },
    /// All tables were removed.
    LayoutCleared,
    /// Tables, guests and the unassigned pool were wiped.
    LayoutReset,
    /// The whole layout was replaced by an imported snapshot.
    SnapshotImported {
        /// Number of tables in the snapshot.
        tables: usize,
        /// Number of guests in the snapshot.
        guests: usize,
    },
}

impl LayoutEvent {
    fn description(&self) -> String {
        match self {
            LayoutEvent::GuestAdded { guest_id } => format!("Guest added: {}", guest_id.short()),
            LayoutEvent::GuestRemoved { guest_id } => {
                format!("Guest removed: {}", guest_id.short())
            }
            LayoutEvent::GuestsImported { count } => format!("Imported {} guests", count),
            LayoutEvent::TableAdded { table_id } => format!("Table added: {}", table_id.short()),
            LayoutEvent::TableRemoved { table_id, released } => format!(
                "Table removed: {} ({} guests released)",
                table_id.short(),
                released
            ),
            LayoutEvent::TableUpdated { table_id } => {
                format!("Table updated: {}", table_id.short())
            }
            LayoutEvent::SeatAssigned {
                guest_id, seat_id, ..
            } => format!("{} seated at {}", guest_id.short(), seat_id.short()),
            LayoutEvent::SeatCleared { seat_id, .. } => {
                format!("Seat cleared: {}", seat_id.short())
            }
            LayoutEvent::LayoutCleared => "Layout cleared".to_string(),
            LayoutEvent::LayoutReset => "Layout reset".to_string(),
            LayoutEvent::SnapshotImported { tables, guests } => {
                format!("Snapshot imported: {} tables, {} guests", tables, guests)
            }
        }
    }
}

/// Drag observation events. These never carry a durable effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragEvent {
    /// A guest is being dragged.
    Started {
        /// The dragged guest.
        guest_id: GuestId,
    },
    /// The drag ended without a valid drop.
    Cancelled {
        /// The guest that was dragged.
        guest_id: GuestId,
    },
    /// The drag ended with a drop that was committed.
    Dropped {
        /// The guest that was dropped.
        guest_id: GuestId,
    },
}

impl DragEvent {
    fn description(&self) -> String {
        match self {
            DragEvent::Started { guest_id } => format!("Drag started: {}", guest_id.short()),
            DragEvent::Cancelled { guest_id } => format!("Drag cancelled: {}", guest_id.short()),
            DragEvent::Dropped { guest_id } => format!("Dropped: {}", guest_id.short()),
        }
    }
}

/// Snapshot file events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileEvent {
    /// The layout was written to disk.
    Saved {
        /// Destination file.
        path: PathBuf,
    },
    /// The layout was read from disk.
    Loaded {
        /// Source file.
        path: PathBuf,
    },
    /// A dated export file was produced.
    Exported {
        /// Destination file.
        path: PathBuf,
    },
}

impl FileEvent {
    fn description(&self) -> String {
        match self {
            FileEvent::Saved { path } => format!("Saved: {}", path.display()),
            FileEvent::Loaded { path } => format!("Loaded: {}", path.display()),
            FileEvent::Exported { path } => format!("Exported: {}", path.display()),
        }
    }
}

/// Recoverable failures surfaced to the user as a notice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorEvent {
    /// User input was rejected.
    Rejected {
        /// Human readable reason.
        message: String,
    },
    /// A snapshot could not be imported.
    ImportFailed {
        /// Human readable reason.
        message: String,
    },
    /// The save-on-mutation hook failed; the in-memory layout is still current.
    PersistFailed {
        /// Human readable reason.
        message: String,
    },
}

impl ErrorEvent {
    fn description(&self) -> String {
        match self {
            ErrorEvent::Rejected { message } => format!("Rejected: {}", message),
            ErrorEvent::ImportFailed { message } => format!("Import failed: {}", message),
            ErrorEvent::PersistFailed { message } => format!("Save failed: {}", message),
        }
    }
}
