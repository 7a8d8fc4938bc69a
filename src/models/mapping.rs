//! Per-control slot lists.

use crate::models::control::ControlId;
use crate::models::slot::{Slot, SlotBinding, SlotTrigger};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Maximum number of behavioral slots per control.
pub const MAX_SLOTS: usize = 4;

/// Slot assignments for one control.
///
/// The slot list is sparse: it only grows as far as the highest assigned
/// index, and missing or empty slots mean "unmapped". Slot position encodes
/// the trigger (0=tap, 1=hold, 2=double, 3=release).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonMapping {
    /// Which control this mapping belongs to
    pub id: ControlId,
    /// Positional slots, at most [`MAX_SLOTS`]
    pub slots: Vec<Slot>,
}

impl ButtonMapping {
    /// Creates an unmapped control entry.
    #[must_use]
    pub const fn new(id: ControlId) -> Self {
        Self {
            id,
            slots: Vec::new(),
        }
    }

    /// Returns the slot at the given index, if it exists.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Assigns a binding to the slot at `index`, padding intermediate
    /// positions with empty slots. Replaces whatever was assigned before,
    /// which is what keeps action/macro/mode-shift mutually exclusive.
    pub fn assign(&mut self, index: usize, binding: SlotBinding) -> Result<()> {
        if index >= MAX_SLOTS {
            anyhow::bail!(
                "Slot index {} out of range (controls have at most {} slots)",
                index,
                MAX_SLOTS
            );
        }

        while self.slots.len() <= index {
            let trigger = SlotTrigger::from_index(self.slots.len())
                .unwrap_or(SlotTrigger::Tap);
            self.slots.push(Slot::empty(trigger));
        }

        self.slots[index].binding = binding;
        Ok(())
    }

    /// Clears the binding of the slot at `index`, if present.
    pub fn clear_slot(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.binding = SlotBinding::Empty;
        }
    }

    /// Removes all slot assignments.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns true if at least one slot has an assignment.
    ///
    /// Controls without content are skipped entirely on export.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.slots.iter().any(|s| !s.is_empty())
    }
}
