//! Behavioral slots and their bindings.
//!
//! A slot is one trigger condition (tap/hold/double/release) on a control.
//! Its binding is a sum type, so at most one of action/macro/mode-shift can
//! ever be populated; the project file's optional-fields record shape is
//! bridged through serde conversions.

use serde::{Deserialize, Serialize};

/// Trigger condition of a slot, determined by its position in the slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotTrigger {
    /// Short tap (slot 0)
    Tap,
    /// Long press (slot 1)
    Hold,
    /// Double tap (slot 2)
    Double,
    /// On release (slot 3)
    Release,
}

impl SlotTrigger {
    /// Trigger for a positional slot index (0=tap, 1=hold, 2=double, 3=release).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Tap),
            1 => Some(Self::Hold),
            2 => Some(Self::Double),
            3 => Some(Self::Release),
            _ => None,
        }
    }

    /// Positional index of this trigger.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Tap => 0,
            Self::Hold => 1,
            Self::Double => 2,
            Self::Release => 3,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tap => "Short Tap",
            Self::Hold => "Long Press",
            Self::Double => "Double Tap",
            Self::Release => "Release",
        }
    }
}

/// What a slot does when triggered.
///
/// At most one reference is held at a time; assigning a new binding replaces
/// the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotBinding {
    /// No assignment
    #[default]
    Empty,
    /// Send a direct action (by action id)
    Action(String),
    /// Run a macro (by macro id)
    Macro(String),
    /// Switch the active set (by target set id)
    ModeShift(String),
}

impl SlotBinding {
    /// Returns true if nothing is assigned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One behavioral trigger attached to a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SlotRecord", into = "SlotRecord")]
pub struct Slot {
    /// Trigger condition
    pub trigger: SlotTrigger,
    /// Assigned behavior
    pub binding: SlotBinding,
}

impl Slot {
    /// Creates an empty slot with the given trigger.
    #[must_use]
    pub const fn empty(trigger: SlotTrigger) -> Self {
        Self {
            trigger,
            binding: SlotBinding::Empty,
        }
    }

    /// Returns true if the slot has no assignment.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.binding.is_empty()
    }
}

/// On-disk shape of a slot: `{type, actionId?, macroId?, modeShiftId?}`.
///
/// If a hand-edited record populates more than one reference, precedence is
/// mode-shift, then macro, then action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotRecord {
    #[serde(rename = "type")]
    trigger: SlotTrigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    macro_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode_shift_id: Option<String>,
}

impl From<SlotRecord> for Slot {
    fn from(record: SlotRecord) -> Self {
        let binding = if let Some(id) = record.mode_shift_id {
            SlotBinding::ModeShift(id)
        } else if let Some(id) = record.macro_id {
            SlotBinding::Macro(id)
        } else if let Some(id) = record.action_id {
            SlotBinding::Action(id)
        } else {
            SlotBinding::Empty
        };

        Self {
            trigger: record.trigger,
            binding,
        }
    }
}

impl From<Slot> for SlotRecord {
    fn from(slot: Slot) -> Self {
        let mut record = Self {
            trigger: slot.trigger,
            action_id: None,
            macro_id: None,
            mode_shift_id: None,
        };

        match slot.binding {
            SlotBinding::Empty => {}
            SlotBinding::Action(id) => record.action_id = Some(id),
            SlotBinding::Macro(id) => record.macro_id = Some(id),
            SlotBinding::ModeShift(id) => record.mode_shift_id = Some(id),
        }

        record
    }
}
