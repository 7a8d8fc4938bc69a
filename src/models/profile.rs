//! The root profile aggregate and its mutation operations.
//!
//! All mutation goes through methods on [`Profile`] so the structural
//! invariants hold at every point: at least one set always exists, and a
//! slot holds at most one of action/macro/mode-shift.

use crate::models::axis::{AxisConfig, ControllerAxis, GeneralConfig};
use crate::models::control::ControlId;
use crate::models::macro_def::{Macro, MacroStep};
use crate::models::set::Set;
use crate::models::slot::SlotBinding;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id of the set every fresh profile starts with.
pub const INITIAL_SET_ID: &str = "set-1";

/// The complete exportable configuration.
///
/// Cross-references (slot → action/macro/set) are weak id references resolved
/// by lookup at use time, so dangling ids are representable and handled by
/// omission during export rather than by structural failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Mapping layers in order; never empty
    pub sets: Vec<Set>,
    /// Macro library, referenced from slots by id
    #[serde(default)]
    pub macros: Vec<Macro>,
    /// Per-axis tuning
    #[serde(default)]
    pub axis_config: HashMap<ControllerAxis, AxisConfig>,
    /// Profile-wide behavior settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_config: Option<GeneralConfig>,
}

impl Profile {
    /// Creates a profile with one default empty set.
    #[must_use]
    pub fn new() -> Self {
        let initial = Set::new(INITIAL_SET_ID, "Set 1")
            .unwrap_or_else(|_| unreachable!("default set name is valid"));

        Self {
            sets: vec![initial],
            macros: Vec::new(),
            axis_config: HashMap::new(),
            general_config: None,
        }
    }

    // --- Set management ---

    /// Appends a new empty set and returns its id.
    pub fn add_set(&mut self, name: impl Into<String>) -> Result<String> {
        let set = Set::with_generated_id(name)?;
        let id = set.id.clone();
        self.sets.push(set);
        Ok(id)
    }

    /// Removes a set by id. Refuses to remove the last remaining set.
    pub fn remove_set(&mut self, id: &str) -> Result<()> {
        if self.sets.len() <= 1 {
            anyhow::bail!("Cannot remove the last remaining set");
        }

        let index = self
            .sets
            .iter()
            .position(|s| s.id == id)
            .with_context(|| format!("No set with id '{id}'"))?;
        self.sets.remove(index);
        Ok(())
    }

    /// Renames a set with validation.
    pub fn rename_set(&mut self, id: &str, name: impl Into<String>) -> Result<()> {
        self.set_mut(id)
            .with_context(|| format!("No set with id '{id}'"))?
            .set_name(name)
    }

    /// Looks up a set by id.
    #[must_use]
    pub fn set(&self, id: &str) -> Option<&Set> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// Looks up a set mutably by id.
    pub fn set_mut(&mut self, id: &str) -> Option<&mut Set> {
        self.sets.iter_mut().find(|s| s.id == id)
    }

    /// 1-based position of a set in the export order, if the id exists.
    ///
    /// This is the number a mode-shift slot emits as its set-switch target.
    #[must_use]
    pub fn set_position(&self, id: &str) -> Option<usize> {
        self.sets.iter().position(|s| s.id == id).map(|i| i + 1)
    }

    // --- Slot assignment ---

    /// Assigns a direct action to a positional slot, or clears the slot when
    /// `action_id` is `None`. Clears any macro or mode-shift previously held.
    pub fn assign_action(
        &mut self,
        set_id: &str,
        control: ControlId,
        slot_index: usize,
        action_id: Option<String>,
    ) -> Result<()> {
        let binding = action_id.map_or(SlotBinding::Empty, SlotBinding::Action);
        self.assign(set_id, control, slot_index, binding)
    }

    /// Assigns a macro to a positional slot, clearing any action or
    /// mode-shift previously held.
    pub fn assign_macro(
        &mut self,
        set_id: &str,
        control: ControlId,
        slot_index: usize,
        macro_id: impl Into<String>,
    ) -> Result<()> {
        self.assign(set_id, control, slot_index, SlotBinding::Macro(macro_id.into()))
    }

    /// Assigns a mode-shift to a positional slot, clearing any action or
    /// macro previously held. The target set does not have to exist yet;
    /// dangling targets degrade by omission at export time.
    pub fn assign_mode_shift(
        &mut self,
        set_id: &str,
        control: ControlId,
        slot_index: usize,
        target_set_id: impl Into<String>,
    ) -> Result<()> {
        self.assign(
            set_id,
            control,
            slot_index,
            SlotBinding::ModeShift(target_set_id.into()),
        )
    }

    fn assign(
        &mut self,
        set_id: &str,
        control: ControlId,
        slot_index: usize,
        binding: SlotBinding,
    ) -> Result<()> {
        let set = self
            .set_mut(set_id)
            .with_context(|| format!("No set with id '{set_id}'"))?;
        set.mapping_mut(control).assign(slot_index, binding)
    }

    /// Clears one slot of a control.
    pub fn clear_slot(&mut self, set_id: &str, control: ControlId, slot_index: usize) -> Result<()> {
        let set = self
            .set_mut(set_id)
            .with_context(|| format!("No set with id '{set_id}'"))?;
        set.mapping_mut(control).clear_slot(slot_index);
        Ok(())
    }

    /// Clears every slot of a control.
    pub fn clear_mapping(&mut self, set_id: &str, control: ControlId) -> Result<()> {
        let set = self
            .set_mut(set_id)
            .with_context(|| format!("No set with id '{set_id}'"))?;
        set.mapping_mut(control).clear();
        Ok(())
    }

    // --- Macro management ---

    /// Adds a macro to the library and returns its id.
    pub fn add_macro(&mut self, name: impl Into<String>, steps: Vec<MacroStep>) -> String {
        let macro_def = Macro::new(name, steps);
        let id = macro_def.id.clone();
        self.macros.push(macro_def);
        id
    }

    /// Replaces name and steps of an existing macro.
    pub fn update_macro(
        &mut self,
        id: &str,
        name: impl Into<String>,
        steps: Vec<MacroStep>,
    ) -> Result<()> {
        let macro_def = self
            .macros
            .iter_mut()
            .find(|m| m.id == id)
            .with_context(|| format!("No macro with id '{id}'"))?;
        macro_def.name = name.into();
        macro_def.steps = steps;
        Ok(())
    }

    /// Removes a macro from the library. Slots referencing it become dangling
    /// and are omitted on export.
    pub fn delete_macro(&mut self, id: &str) {
        self.macros.retain(|m| m.id != id);
    }

    /// Looks up a macro by id.
    #[must_use]
    pub fn macro_by_id(&self, id: &str) -> Option<&Macro> {
        self.macros.iter().find(|m| m.id == id)
    }

    // --- Axis settings ---

    /// Replaces the tuning of one axis.
    pub fn set_axis_config(&mut self, axis: ControllerAxis, config: AxisConfig) {
        if config.is_default() {
            self.axis_config.remove(&axis);
        } else {
            self.axis_config.insert(axis, config);
        }
    }

    /// Updates only the dead zone of one axis.
    pub fn update_dead_zone(&mut self, axis: ControllerAxis, value: i32) {
        self.axis_config.entry(axis).or_default().dead_zone = Some(value);
    }

    /// Gets the tuning of one axis, if configured.
    #[must_use]
    pub fn axis(&self, axis: ControllerAxis) -> Option<&AxisConfig> {
        self.axis_config.get(&axis)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}
