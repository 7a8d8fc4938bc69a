//! Macros: ordered key/mouse/delay step sequences.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One step of a macro.
///
/// The project file represents steps as `{type, value, duration?}` records;
/// the `type` tag selects the variant. Older project files stored key and
/// mouse values as bare numbers, so those fields accept either form on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MacroStep {
    /// Press a key, optionally held for a duration in milliseconds.
    Key {
        /// Key name, resolved through the translator at export time
        #[serde(deserialize_with = "string_or_number")]
        value: String,
        /// Hold duration in milliseconds
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
    },
    /// Wait for a number of milliseconds.
    Delay {
        /// Pause length in milliseconds, passed through verbatim on export
        value: u64,
    },
    /// Press a mouse button, optionally held for a duration in milliseconds.
    Mouse {
        /// Mouse button name, resolved through the translator at export time
        #[serde(deserialize_with = "string_or_number")]
        value: String,
        /// Hold duration in milliseconds
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
    },
}

/// An ordered sequence of steps executed as one logical action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    /// Stable unique identifier, referenced from slots
    pub id: String,
    /// Display name
    pub name: String,
    /// Steps in execution order
    pub steps: Vec<MacroStep>,
}

impl Macro {
    /// Creates a new macro with a fresh id.
    pub fn new(name: impl Into<String>, steps: Vec<MacroStep>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            steps,
        }
    }
}

/// Accepts a JSON string or number, normalizing to a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
