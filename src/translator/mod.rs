//! Key-name to AntiMicroX code translation.
//!
//! This module provides the static lookup service that maps human-readable
//! key and mouse-button names (e.g. "Space", "F5", "Mouse1") to the codes
//! the AntiMicroX profile schema expects. The table is embedded in the
//! binary at compile time and loaded once on first access.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Sentinel code for names the translator cannot resolve ("no binding").
pub const UNKNOWN_CODE: &str = "0x0";

/// Input device a translated code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keyboard key code (Qt key code, hex string)
    Keyboard,
    /// Mouse button number
    Mouse,
}

impl InputMode {
    /// Schema text of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyboard => "keyboard",
            Self::Mouse => "mouse",
        }
    }
}

/// Result of translating a key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Code in the target schema's textual format
    pub code: String,
    /// Which input device the code addresses
    pub mode: InputMode,
}

/// One entry of the embedded table.
#[derive(Debug, Clone, Deserialize)]
struct KeycodeEntry {
    name: String,
    code: String,
    #[serde(default)]
    aliases: Vec<String>,
}

/// Database schema of keycodes.json.
#[derive(Debug, Clone, Deserialize)]
struct KeycodeTable {
    #[allow(dead_code)]
    version: String,
    keyboard: Vec<KeycodeEntry>,
    mouse: Vec<KeycodeEntry>,
}

/// Key-name lookup tables with defined fallback rules.
///
/// Loaded once from the embedded JSON table; immutable afterwards, so a
/// single instance can be shared freely across callers.
#[derive(Debug, Clone)]
pub struct KeyMap {
    keyboard: HashMap<String, String>,
    mouse: HashMap<String, String>,
}

impl KeyMap {
    /// Loads the lookup tables from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("keycodes.json");
        let table: KeycodeTable =
            serde_json::from_str(json_data).context("Failed to parse embedded keycodes.json")?;

        Ok(Self {
            keyboard: build_lookup(&table.keyboard),
            mouse: build_lookup(&table.mouse),
        })
    }

    /// Translates a free-text key or mouse-button name.
    ///
    /// Resolution order: mouse table, keyboard table, single-character
    /// ordinal fallback, `0x…` passthrough, unknown sentinel. Names are
    /// matched case- and whitespace-insensitively.
    ///
    /// Never fails; unrecognized input resolves to [`UNKNOWN_CODE`] in
    /// keyboard mode with a diagnostic log.
    #[must_use]
    pub fn translate(&self, name: &str) -> KeyBinding {
        let normalized = normalize(name);
        if normalized.is_empty() {
            return KeyBinding {
                code: UNKNOWN_CODE.to_string(),
                mode: InputMode::Keyboard,
            };
        }

        match self.resolve(&normalized) {
            Some(binding) => binding,
            None => {
                tracing::warn!(key = %name, "unknown key name, emitting no-binding code");
                KeyBinding {
                    code: UNKNOWN_CODE.to_string(),
                    mode: InputMode::Keyboard,
                }
            }
        }
    }

    /// Returns true if a name resolves without hitting the unknown sentinel.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        let normalized = normalize(name);
        !normalized.is_empty() && self.resolve(&normalized).is_some()
    }

    fn resolve(&self, normalized: &str) -> Option<KeyBinding> {
        if let Some(code) = self.mouse.get(normalized) {
            return Some(KeyBinding {
                code: code.clone(),
                mode: InputMode::Mouse,
            });
        }

        if let Some(code) = self.keyboard.get(normalized) {
            return Some(KeyBinding {
                code: code.clone(),
                mode: InputMode::Keyboard,
            });
        }

        // Single characters map through their ordinal value
        let mut chars = normalized.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(KeyBinding {
                code: format!("0x{:x}", c.to_ascii_uppercase() as u32),
                mode: InputMode::Keyboard,
            });
        }

        // Already in the schema's textual code format
        if normalized.starts_with("0x") {
            return Some(KeyBinding {
                code: normalized.to_string(),
                mode: InputMode::Keyboard,
            });
        }

        None
    }
}

/// Lowercases and strips all whitespace from a name before lookup.
fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn build_lookup(entries: &[KeycodeEntry]) -> HashMap<String, String> {
    let mut lookup = HashMap::new();
    for entry in entries {
        lookup.insert(entry.name.clone(), entry.code.clone());
        for alias in &entry.aliases {
            lookup.insert(alias.clone(), entry.code.clone());
        }
    }
    lookup
}
