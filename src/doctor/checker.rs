//! Reference-graph integrity checks for a project.
//!
//! Slots reference actions, macros, and sets by id; the export path
//! tolerates broken references by omission, which makes it easy to ship a
//! profile with silently missing bindings. The checker surfaces those
//! problems, plus action keys the translator cannot resolve, as structured
//! findings. It never mutates and never fails on bad data.

use crate::models::{ControlId, MacroStep, SlotBinding};
use crate::parser::Project;
use crate::translator::KeyMap;

/// Classification of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// Slot references an action id that is not in the library
    DanglingAction,
    /// Slot references a macro id that is not in the profile
    DanglingMacro,
    /// Mode-shift slot references a set id that does not exist
    DanglingModeShift,
    /// A key name resolves to the "no binding" sentinel
    UnknownKey,
}

impl FindingKind {
    /// Short label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DanglingAction => "dangling action reference",
            Self::DanglingMacro => "dangling macro reference",
            Self::DanglingModeShift => "dangling mode-shift target",
            Self::UnknownKey => "unknown key name",
        }
    }
}

/// One problem found in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// What kind of problem this is
    pub kind: FindingKind,
    /// Name of the set the slot lives in
    pub set_name: String,
    /// Control the slot is attached to
    pub control: ControlId,
    /// Positional slot index
    pub slot_index: usize,
    /// The offending id or key name
    pub detail: String,
}

/// Scans every slot of every set for broken references and unknown keys.
///
/// Sets are scanned in order and controls in canonical order, so findings
/// come out in a stable sequence.
#[must_use]
pub fn check_project(project: &Project, key_map: &KeyMap) -> Vec<Finding> {
    let mut findings = Vec::new();
    let profile = &project.profile;

    for set in &profile.sets {
        for control in ControlId::ALL {
            let Some(mapping) = set.mapping(control) else {
                continue;
            };

            for (slot_index, slot) in mapping.slots.iter().enumerate() {
                let report = |kind, detail: &str| Finding {
                    kind,
                    set_name: set.name.clone(),
                    control,
                    slot_index,
                    detail: detail.to_string(),
                };

                match &slot.binding {
                    SlotBinding::Empty => {}
                    SlotBinding::Action(id) => {
                        match project.actions.iter().find(|a| a.id == *id) {
                            None => findings.push(report(FindingKind::DanglingAction, id)),
                            Some(action) if !key_map.is_known(&action.default_key) => {
                                findings
                                    .push(report(FindingKind::UnknownKey, &action.default_key));
                            }
                            Some(_) => {}
                        }
                    }
                    SlotBinding::Macro(id) => match profile.macro_by_id(id) {
                        None => findings.push(report(FindingKind::DanglingMacro, id)),
                        Some(macro_def) => {
                            for step in &macro_def.steps {
                                let value = match step {
                                    MacroStep::Key { value, .. }
                                    | MacroStep::Mouse { value, .. } => value,
                                    MacroStep::Delay { .. } => continue,
                                };
                                if !key_map.is_known(value) {
                                    findings.push(report(FindingKind::UnknownKey, value));
                                }
                            }
                        }
                    },
                    SlotBinding::ModeShift(id) => {
                        if profile.set_position(id).is_none() {
                            findings.push(report(FindingKind::DanglingModeShift, id));
                        }
                    }
                }
            }
        }
    }

    findings
}
