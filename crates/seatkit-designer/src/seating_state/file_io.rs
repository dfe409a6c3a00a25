//! Snapshot export and import for the seating state.

use std::path::{Path, PathBuf};

use anyhow::Context;
use seatkit_core::{LayoutEvent, SnapshotError};

use super::SeatingState;
use crate::serialization::LayoutSnapshot;

impl SeatingState {
    /// Captures the current layout.
    pub fn export_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::from_layout(&self.layout)
    }

    /// Replaces the layout with a validated snapshot. On error the layout is untouched.
    pub fn import_snapshot(
        &mut self,
        snapshot: LayoutSnapshot,
    ) -> Result<LayoutEvent, SnapshotError> {
        let layout = snapshot.into_layout()?;
        let event = LayoutEvent::SnapshotImported {
            tables: layout.tables().len(),
            guests: layout.guests().len(),
        };
        tracing::info!(
            "Imported snapshot with {} tables and {} guests",
            layout.tables().len(),
            layout.guests().len()
        );
        self.replace_layout(layout);
        Ok(event)
    }

    pub fn import_json(&mut self, json: &str) -> Result<LayoutEvent, SnapshotError> {
        let snapshot = LayoutSnapshot::from_json(json)?;
        self.import_snapshot(snapshot)
    }

    /// Save layout to file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.export_snapshot().save_to_file(path)
    }

    /// Load layout from file, replacing the current one.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<LayoutEvent> {
        let path = path.as_ref();
        let snapshot = LayoutSnapshot::load_from_file(path)?;
        self.import_snapshot(snapshot)
            .with_context(|| format!("Rejected snapshot {}", path.display()))
    }

    /// Writes a dated export (`seating-layout-YYYY-MM-DD.json`) into `directory`.
    pub fn export_to_directory(&self, directory: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create {}", directory.display()))?;
        let snapshot = self.export_snapshot();
        let path = directory.join(snapshot.export_file_name());
        snapshot.save_to_file(&path)?;
        tracing::info!("Exported layout to {}", path.display());
        Ok(path)
    }
}
