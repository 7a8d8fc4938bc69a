//! Project file persistence.
//!
//! The project file is a JSON document `{version, profile, actions}` using
//! camelCase field names. Loading upgrades the legacy `deadzones` map that
//! predates per-axis configuration; saving uses a temp file + rename so the
//! target is never left half-written.

use crate::constants::PROJECT_FILE_VERSION;
use crate::models::{Action, Profile};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

/// A complete editing project: the profile plus its action library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// File format version
    pub version: u32,
    /// The mapping profile
    pub profile: Profile,
    /// Imported action library
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Project {
    /// Creates a fresh project with one default empty set and no actions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: PROJECT_FILE_VERSION,
            profile: Profile::new(),
            actions: Vec::new(),
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads a project from a JSON file.
///
/// # Errors
///
/// Fails hard on I/O problems, malformed JSON, an unsupported version, or a
/// profile with zero sets. These are caller errors, unlike the data-quality
/// issues (dangling ids) which the export path tolerates.
pub fn load_project(path: &Path) -> Result<Project> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project file: {}", path.display()))?;
    parse_project(&text).with_context(|| format!("Invalid project file: {}", path.display()))
}

/// Parses a project from JSON text, applying legacy upgrades.
pub fn parse_project(text: &str) -> Result<Project> {
    let mut value: Value =
        serde_json::from_str(text).context("Project file is not valid JSON")?;

    upgrade_legacy_deadzones(&mut value);

    let project: Project =
        serde_json::from_value(value).context("Project file does not match the expected shape")?;

    if project.version != PROJECT_FILE_VERSION {
        anyhow::bail!(
            "Unsupported project file version {} (expected {})",
            project.version,
            PROJECT_FILE_VERSION
        );
    }

    if project.profile.sets.is_empty() {
        anyhow::bail!("Project profile has no sets");
    }

    Ok(project)
}

/// Saves a project to a JSON file with an atomic write.
pub fn save_project(project: &Project, path: &Path) -> Result<()> {
    let text =
        serde_json::to_string_pretty(project).context("Failed to serialize project to JSON")?;

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, text)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

/// Moves a pre-axisConfig `profile.deadzones` map into per-axis entries.
fn upgrade_legacy_deadzones(value: &mut Value) {
    let Some(profile) = value.get_mut("profile").and_then(Value::as_object_mut) else {
        return;
    };

    if profile.contains_key("axisConfig") {
        profile.remove("deadzones");
        return;
    }

    let Some(Value::Object(deadzones)) = profile.remove("deadzones") else {
        return;
    };

    let mut axis_config = serde_json::Map::new();
    for (axis, dead_zone) in deadzones {
        axis_config.insert(axis, json!({ "deadZone": dead_zone }));
    }
    profile.insert("axisConfig".to_string(), Value::Object(axis_config));
}
