//! Persisted layout store.
//!
//! [`LayoutStore`] owns the live [`SeatingState`] and the drag machine. After every
//! mutation that changed the layout it publishes a [`LayoutEvent`] on the shared event bus
//! and hands a snapshot to its [`SnapshotSink`]. A failing sink is reported, but the
//! in-memory change stands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use seatkit_core::{
    AppEvent, DragEvent, ErrorEvent, EventBus, FileEvent, GuestId, LayoutEvent, ValidationError,
};

use crate::commands::SeatingCommand;
use crate::drag::{DragState, DropResolution, DropTarget};
use crate::model::{Layout, SeatRef};
use crate::seating_state::SeatingState;
use crate::serialization::LayoutSnapshot;

/// Receives a snapshot after each change.
pub trait SnapshotSink: Send {
    fn save(&mut self, snapshot: &LayoutSnapshot) -> anyhow::Result<()>;

    /// File the sink writes to, if it writes to one.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Writes snapshots to one JSON file, replacing it atomically.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSink for FileSink {
    fn save(&mut self, snapshot: &LayoutSnapshot) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        snapshot.save_to_file(&tmp)?;
        std::fs::rename(&tmp, &self.path).with_context(|| {
            format!("Failed to replace {}", self.path.display())
        })?;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Live layout shared by the views of one editor window.
pub struct LayoutStore {
    state: SeatingState,
    drag: DragState,
    bus: Arc<EventBus>,
    sink: Option<Box<dyn SnapshotSink>>,
    autosave: bool,
}

impl LayoutStore {
    /// A store that is never persisted.
    pub fn in_memory(bus: Arc<EventBus>) -> Self {
        Self {
            state: SeatingState::new(),
            drag: DragState::Idle,
            bus,
            sink: None,
            autosave: false,
        }
    }

    /// A store starting from `state` that saves through `sink` after each change.
    pub fn with_sink(state: SeatingState, sink: Box<dyn SnapshotSink>, bus: Arc<EventBus>) -> Self {
        Self {
            state,
            drag: DragState::Idle,
            bus,
            sink: Some(sink),
            autosave: true,
        }
    }

    /// Opens the layout persisted at `path`, or an empty one if the file does not exist.
    ///
    /// A file that cannot be read or fails validation is an error; it is left on disk as is.
    pub fn open(path: impl Into<PathBuf>, bus: Arc<EventBus>) -> anyhow::Result<Self> {
        let path = path.into();
        let mut state = SeatingState::new();
        if path.exists() {
            state.load_from_file(&path)?;
            tracing::info!("Opened layout {}", path.display());
            publish(&bus, AppEvent::File(FileEvent::Loaded { path: path.clone() }));
        } else {
            tracing::info!("No layout at {}, starting empty", path.display());
        }
        Ok(Self::with_sink(state, Box::new(FileSink::new(path)), bus))
    }

    pub fn state(&self) -> &SeatingState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        self.state.layout()
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn autosave(&self) -> bool {
        self.autosave
    }

    /// Enables or disables saving after each change. Has no effect without a sink.
    pub fn set_autosave(&mut self, autosave: bool) {
        self.autosave = autosave;
    }

    pub fn location(&self) -> Option<&Path> {
        self.sink.as_ref().and_then(|s| s.location())
    }

    /// Applies a command, then notifies and persists if the layout changed.
    ///
    /// Returns whether the layout changed. Rejected input is also published as an
    /// [`ErrorEvent::Rejected`] notice.
    pub fn dispatch(&mut self, command: SeatingCommand) -> Result<bool, ValidationError> {
        let name = command.name();
        match self.state.apply(command) {
            Ok(Some(event)) => {
                self.commit(event);
                Ok(true)
            }
            Ok(None) => {
                tracing::debug!("{}: layout unchanged", name);
                Ok(false)
            }
            Err(e) => {
                tracing::debug!("{} rejected: {}", name, e);
                publish(
                    &self.bus,
                    AppEvent::Error(ErrorEvent::Rejected {
                        message: e.to_string(),
                    }),
                );
                Err(e)
            }
        }
    }

    /// Starts dragging a guest. Unknown guests are ignored.
    pub fn begin_drag(&mut self, guest_id: GuestId) -> bool {
        let started = self.drag.begin(self.state.layout(), guest_id);
        if started {
            publish(&self.bus, AppEvent::Drag(DragEvent::Started { guest_id }));
        }
        started
    }

    pub fn is_droppable(&self, seat: SeatRef) -> bool {
        self.drag.is_droppable(self.state.layout(), seat)
    }

    /// Completes the current drag. Returns whether the layout changed.
    pub fn drop_on(&mut self, target: DropTarget) -> bool {
        let Some(guest_id) = self.drag.dragged_guest() else {
            return false;
        };
        match self.drag.drop_on(self.state.layout(), target) {
            DropResolution::Commit(command) => {
                let changed = matches!(self.dispatch(command), Ok(true));
                let event = if changed {
                    DragEvent::Dropped { guest_id }
                } else {
                    DragEvent::Cancelled { guest_id }
                };
                publish(&self.bus, AppEvent::Drag(event));
                changed
            }
            DropResolution::Cancel => {
                publish(&self.bus, AppEvent::Drag(DragEvent::Cancelled { guest_id }));
                false
            }
        }
    }

    pub fn cancel_drag(&mut self) {
        if let Some(guest_id) = self.drag.cancel() {
            publish(&self.bus, AppEvent::Drag(DragEvent::Cancelled { guest_id }));
        }
    }

    /// Replaces the layout with the snapshot document `json`.
    ///
    /// An invalid document leaves the layout unchanged and is published as an
    /// [`ErrorEvent::ImportFailed`] notice.
    pub fn import_json(&mut self, json: &str) -> seatkit_core::Result<()> {
        match self.state.import_json(json) {
            Ok(event) => {
                self.drag.cancel();
                self.commit(event);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Snapshot import failed: {}", e);
                publish(
                    &self.bus,
                    AppEvent::Error(ErrorEvent::ImportFailed {
                        message: e.to_string(),
                    }),
                );
                Err(e.into())
            }
        }
    }

    /// Replaces the layout with the snapshot stored at `path`.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        self.import_json(&json)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        publish(
            &self.bus,
            AppEvent::File(FileEvent::Loaded {
                path: path.to_path_buf(),
            }),
        );
        Ok(())
    }

    /// Writes a dated export into `directory` and returns its path.
    pub fn export_to_directory(&self, directory: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let path = self.state.export_to_directory(directory)?;
        publish(&self.bus, AppEvent::File(FileEvent::Exported { path: path.clone() }));
        Ok(path)
    }

    /// Saves through the sink regardless of the autosave setting.
    pub fn save(&mut self) -> anyhow::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        sink.save(&self.state.export_snapshot())?;
        if let Some(path) = sink.location() {
            publish(
                &self.bus,
                AppEvent::File(FileEvent::Saved {
                    path: path.to_path_buf(),
                }),
            );
        }
        Ok(())
    }

    fn commit(&mut self, event: LayoutEvent) {
        publish(&self.bus, AppEvent::Layout(event));
        if self.autosave && self.sink.is_some() {
            if let Err(e) = self.save() {
                tracing::warn!("Failed to persist layout: {:#}", e);
                publish(
                    &self.bus,
                    AppEvent::Error(ErrorEvent::PersistFailed {
                        message: format!("{:#}", e),
                    }),
                );
            }
        }
    }
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("tables", &self.state.tables().len())
            .field("guests", &self.state.guests().len())
            .field("drag", &self.drag)
            .field("location", &self.location())
            .field("autosave", &self.autosave)
            .finish()
    }
}

fn publish(bus: &EventBus, event: AppEvent) {
    if let Err(e) = bus.publish(event) {
        tracing::trace!("event not delivered: {}", e);
    }
}
