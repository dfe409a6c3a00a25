use serde::{Deserialize, Serialize};

use seatkit_core::GuestId;

/// A person to be seated.
///
/// `full_name` is derived from the name parts and is recomputed whenever a guest is
/// created or imported, so it never drifts from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub full_name: String,
}

impl Guest {
    /// Creates a guest with a fresh id. Name parts are trimmed; a blank middle name is dropped.
    pub fn new(first_name: &str, last_name: &str, middle_name: Option<&str>) -> Self {
        let mut guest = Self {
            id: GuestId::new(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            middle_name: middle_name
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            full_name: String::new(),
        };
        guest.refresh_full_name();
        guest
    }

    /// Recomputes `full_name` from the name parts.
    pub fn refresh_full_name(&mut self) {
        self.full_name = compose_full_name(
            &self.last_name,
            &self.first_name,
            self.middle_name.as_deref(),
        );
    }
}

/// Formats a display name as `Last First [Middle]`, skipping empty parts.
pub fn compose_full_name(last_name: &str, first_name: &str, middle_name: Option<&str>) -> String {
    [Some(last_name), Some(first_name), middle_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
