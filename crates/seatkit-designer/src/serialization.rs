//! Serialization and deserialization of layout snapshots.
//!
//! A snapshot is a JSON document holding the whole layout: tables with their seats,
//! guests and the unassigned pool. Documents read from outside are validated in full
//! before they can replace a live layout.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use seatkit_core::{GuestId, SnapshotError};

use crate::model::{Guest, Layout, Table};

/// Snapshot format version written by this build.
pub const SNAPSHOT_FORMAT_VERSION: &str = "1.0";

/// Complete layout snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub tables: Vec<Table>,
    pub guests: Vec<Guest>,
    pub unassigned_guests: Vec<GuestId>,
}

impl LayoutSnapshot {
    /// Captures `layout` with the current time.
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            version: SNAPSHOT_FORMAT_VERSION.to_string(),
            exported_at: Utc::now(),
            tables: layout.tables().to_vec(),
            guests: layout.guests().to_vec(),
            unassigned_guests: layout.unassigned_guests().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document and checks its version. Layout invariants are checked by
    /// [`LayoutSnapshot::into_layout`].
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: LayoutSnapshot = serde_json::from_str(json)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        let major = |v: &str| v.split('.').next().map(str::to_string);
        if major(&self.version) != major(SNAPSHOT_FORMAT_VERSION) {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version.clone(),
                supported: SNAPSHOT_FORMAT_VERSION,
            });
        }
        Ok(())
    }

    /// Validates the snapshot and turns it into a layout.
    ///
    /// Full names are recomputed from the name parts. Every invariant violation is
    /// reported together.
    pub fn into_layout(self) -> Result<Layout, SnapshotError> {
        self.check_version()?;
        let mut guests = self.guests;
        for guest in &mut guests {
            guest.refresh_full_name();
        }
        let layout = Layout::from_parts(self.tables, guests, self.unassigned_guests);
        let problems = layout.check_integrity();
        if !problems.is_empty() {
            return Err(SnapshotError::Inconsistent { problems });
        }
        Ok(layout)
    }

    /// File name for an export made at `exported_at`: `seating-layout-YYYY-MM-DD.json`.
    pub fn export_file_name(&self) -> String {
        format!("seating-layout-{}.json", self.exported_at.format("%Y-%m-%d"))
    }

    /// Save snapshot to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize layout")?;
        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write snapshot {}", path.as_ref().display())
        })?;
        Ok(())
    }

    /// Load snapshot from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(SnapshotError::Io)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let snapshot = Self::from_json(&content)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
        Ok(snapshot)
    }
}
