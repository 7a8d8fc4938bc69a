//! Property tests for slot binding mutual exclusion.
//!
//! A slot holds at most one of: a direct action, a macro, or a mode-shift.
//! Any sequence of assignments must preserve that, both in memory and in
//! the serialized record shape.

use padbind::models::{ControlId, Profile, Slot, SlotBinding, INITIAL_SET_ID, MAX_SLOTS};
use proptest::prelude::*;

/// One profile mutation, as generated by the strategy below.
#[derive(Debug, Clone)]
enum Op {
    AssignAction(usize, String),
    AssignMacro(usize, String),
    AssignModeShift(usize, String),
    ClearSlot(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let slot = 0..MAX_SLOTS;
    let id = "[a-z]{1,8}";
    prop_oneof![
        (slot.clone(), id).prop_map(|(s, id)| Op::AssignAction(s, id)),
        (slot.clone(), "[a-z]{1,8}").prop_map(|(s, id)| Op::AssignMacro(s, id)),
        (slot.clone(), "[a-z]{1,8}").prop_map(|(s, id)| Op::AssignModeShift(s, id)),
        (0..MAX_SLOTS).prop_map(Op::ClearSlot),
    ]
}

fn apply(profile: &mut Profile, op: &Op) {
    let result = match op {
        Op::AssignAction(slot, id) => profile.assign_action(
            INITIAL_SET_ID,
            ControlId::A,
            *slot,
            Some(id.clone()),
        ),
        Op::AssignMacro(slot, id) => {
            profile.assign_macro(INITIAL_SET_ID, ControlId::A, *slot, id.clone())
        }
        Op::AssignModeShift(slot, id) => {
            profile.assign_mode_shift(INITIAL_SET_ID, ControlId::A, *slot, id.clone())
        }
        Op::ClearSlot(slot) => profile.clear_slot(INITIAL_SET_ID, ControlId::A, *slot),
    };
    result.expect("In-range operations never fail");
}

/// Counts the populated reference fields in a slot's JSON record.
fn populated_fields(slot: &Slot) -> usize {
    let record = serde_json::to_value(slot.clone()).expect("Slot serializes");
    ["actionId", "macroId", "modeShiftId"]
        .iter()
        .filter(|key| !record[**key].is_null())
        .count()
}

proptest! {
    #[test]
    fn slot_holds_at_most_one_binding(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut profile = Profile::new();
        for op in &ops {
            apply(&mut profile, op);
        }

        let mapping = profile.sets[0]
            .mapping(ControlId::A)
            .expect("A mapping exists after any assignment");
        prop_assert!(mapping.slots.len() <= MAX_SLOTS);
        for slot in &mapping.slots {
            prop_assert!(populated_fields(slot) <= 1);
        }
    }

    #[test]
    fn last_assignment_wins(id_a in "[a-z]{1,8}", id_b in "[a-z]{1,8}") {
        let mut profile = Profile::new();
        profile
            .assign_macro(INITIAL_SET_ID, ControlId::A, 0, id_a)
            .unwrap();
        profile
            .assign_action(INITIAL_SET_ID, ControlId::A, 0, Some(id_b.clone()))
            .unwrap();

        let slot = profile.sets[0]
            .mapping(ControlId::A)
            .and_then(|m| m.slot(0))
            .expect("Slot 0 exists");
        prop_assert_eq!(&slot.binding, &SlotBinding::Action(id_b));
    }

    #[test]
    fn clear_always_empties(slot_index in 0..MAX_SLOTS, id in "[a-z]{1,8}") {
        let mut profile = Profile::new();
        profile
            .assign_mode_shift(INITIAL_SET_ID, ControlId::A, slot_index, id)
            .unwrap();
        profile
            .clear_slot(INITIAL_SET_ID, ControlId::A, slot_index)
            .unwrap();

        let slot = profile.sets[0]
            .mapping(ControlId::A)
            .and_then(|m| m.slot(slot_index))
            .expect("Slot exists after assignment");
        prop_assert_eq!(&slot.binding, &SlotBinding::Empty);
    }
}
