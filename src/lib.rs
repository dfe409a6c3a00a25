//! # SeatKit
//!
//! A seating-chart editor engine: a pool of guests, physical tables (round, square,
//! rectangular, theater rows, amphitheater arcs), seat assignment with drag-and-drop
//! intents, seat layout geometry and JSON snapshots.
//!
//! ## Architecture
//!
//! SeatKit is organized as a workspace with multiple crates:
//!
//! 1. **seatkit-core** - Identifiers, error taxonomy, event bus
//! 2. **seatkit-designer** - Model, geometry, viewport, seating state, drag, snapshots, store
//! 3. **seatkit-settings** - Editor and storage configuration
//! 4. **seatkit** - This facade plus a headless command line tool

pub use seatkit_core as core;
pub use seatkit_designer as designer;
pub use seatkit_settings as settings;

pub use seatkit_core::{
    AppEvent, DragEvent, Error, ErrorEvent, EventBus, EventBusConfig, EventCategory, EventFilter,
    FileEvent, GuestId, LayoutEvent, Result, SeatId, SnapshotError, TableId, ValidationError,
};

pub use seatkit_designer::{
    seat_positions, DragState, DropTarget, FileSink, GeometryParams, Guest, Layout,
    LayoutSnapshot, LayoutStore, Point, Seat, SeatPosition, SeatRef, SeatingCommand,
    SeatingState, SnapshotSink, Table, TableConfigUpdate, TableShape, TableType, Viewport,
    ZoomLimits,
};

pub use seatkit_settings::{Config, EditorSettings, SettingsPersistence, StorageSettings};

use std::sync::Arc;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Geometry constants taken from the editor settings.
pub fn geometry_params(editor: &EditorSettings) -> GeometryParams {
    GeometryParams {
        seat_size: editor.seat_size,
        seat_margin: editor.seat_margin,
        header_height: editor.header_height,
        amphitheater_base_radius: editor.amphitheater_base_radius,
        amphitheater_radius_step: editor.amphitheater_radius_step,
        amphitheater_span_degrees: editor.amphitheater_span_degrees,
        amphitheater_compression: editor.amphitheater_compression,
    }
}

/// Zoom limits taken from the editor settings.
pub fn zoom_limits(editor: &EditorSettings) -> ZoomLimits {
    ZoomLimits {
        min: editor.min_zoom,
        max: editor.max_zoom,
        step: editor.zoom_step,
    }
}

/// Bulk import command for a guest list, one name per non-blank line.
pub fn guest_list_command(text: &str) -> SeatingCommand {
    SeatingCommand::ImportGuests {
        lines: text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Opens the layout store at the configured snapshot path, honouring the autosave setting.
pub fn open_store(
    settings: &SettingsPersistence,
    bus: Arc<EventBus>,
) -> anyhow::Result<LayoutStore> {
    let path = settings.snapshot_path()?;
    let mut store = LayoutStore::open(path, bus)?;
    store.set_autosave(settings.config().storage.autosave);
    Ok(store)
}
