//! Error handling for SeatKit
//!
//! Provides the error types shared by every layer of the engine:
//! - Validation errors (rejected user input, nothing was mutated)
//! - Snapshot errors (import/export documents that are malformed or inconsistent)
//!
//! Operations that target an entity which no longer exists are not errors. They are
//! silent no-ops, since user intents can race against a deletion in the UI.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Raised before any mutation when user-supplied values cannot be accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only
    #[error("{field} must not be empty")]
    EmptyField {
        /// The name of the empty field.
        field: &'static str,
    },

    /// A coordinate or angle is NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A table dimension is zero or negative
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveDimension {
        /// The name of the offending dimension.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The layout parameters of a table imply more seats than a table may hold
    #[error("a table holds at most {max} seats")]
    TooManySeats {
        /// The per-table seat limit.
        max: usize,
    },
}

/// Snapshot error type
///
/// Represents failures while reading or writing a layout snapshot document.
/// A snapshot error never leaves a partially imported layout behind.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The document is not valid JSON for the snapshot schema
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document declares a format version this build cannot read
    #[error("Unsupported snapshot version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// The version found in the document.
        found: String,
        /// The version this build writes.
        supported: &'static str,
    },

    /// The document parsed but breaks the layout invariants
    #[error("Inconsistent snapshot: {}", .problems.join("; "))]
    Inconsistent {
        /// Every problem that was found.
        problems: Vec<String>,
    },

    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for SeatKit
///
/// Unifies the errors an engine call can report, for callers that accept either kind.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Snapshot error
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
