//! Mapping sets (layers).

use crate::models::control::ControlId;
use crate::models::mapping::ButtonMapping;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A complete named layer of button mappings.
///
/// Every known control has an entry (possibly with empty slots); the active
/// set can be changed at runtime via mode-shift slots referencing another
/// set's id.
///
/// # Validation
///
/// - Name must be non-empty, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    /// Stable unique identifier (mode-shift target)
    pub id: String,
    /// Display name
    pub name: String,
    /// Mapping entries keyed by control
    pub mappings: HashMap<ControlId, ButtonMapping>,
}

impl Set {
    /// Creates an empty set with an entry for every known control.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let mappings = ControlId::ALL
            .iter()
            .map(|&control| (control, ButtonMapping::new(control)))
            .collect();

        Ok(Self {
            id: id.into(),
            name,
            mappings,
        })
    }

    /// Creates an empty set with a fresh uuid id.
    pub fn with_generated_id(name: impl Into<String>) -> Result<Self> {
        Self::new(format!("set-{}", Uuid::new_v4()), name)
    }

    /// Validates a set name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Set name cannot be empty");
        }

        if name.len() > 50 {
            anyhow::bail!(
                "Set name '{}' exceeds maximum length of 50 characters (got {})",
                name,
                name.len()
            );
        }

        Ok(())
    }

    /// Updates the set name with validation.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        Self::validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Gets the mapping for a control, if present.
    #[must_use]
    pub fn mapping(&self, control: ControlId) -> Option<&ButtonMapping> {
        self.mappings.get(&control)
    }

    /// Gets the mapping for a control, creating an unmapped entry if a loaded
    /// project file left a gap.
    pub fn mapping_mut(&mut self, control: ControlId) -> &mut ButtonMapping {
        self.mappings
            .entry(control)
            .or_insert_with(|| ButtonMapping::new(control))
    }
}
