//! Imported key actions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named key/button binding imported from an external keybind listing.
///
/// Actions are immutable once created and live in a flat library list owned
/// by the project, referenced from slots by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Stable unique identifier
    pub id: String,
    /// Display name (e.g. "Reload")
    pub name: String,
    /// Key name as imported (e.g. "R", "Mouse1", "Space")
    pub default_key: String,
}

impl Action {
    /// Creates a new action with a fresh id.
    pub fn new(name: impl Into<String>, default_key: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            default_key: default_key.into(),
        }
    }
}
