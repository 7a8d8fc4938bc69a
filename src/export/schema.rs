//! Static control-to-schema numbering tables.
//!
//! The AntiMicroX schema addresses controls by numeric indices: discrete
//! buttons by an SDL-ordered button index, sticks and triggers by side
//! (left = 1, right = 2), and d-pad directions by SDL hat values under a
//! single hat element. These tables must stay in exact agreement with the
//! consumer application; a control without an entry is skipped on export.

use crate::models::{ControlId, ControllerAxis};

/// Hat element index of the d-pad (the pad has a single hat).
pub const DPAD_INDEX: u32 = 1;

/// Sub-index of the click element inside a stick block.
pub const STICK_CLICK_INDEX: u32 = 1;

/// Sub-index of the press element inside a trigger block.
pub const TRIGGER_BUTTON_INDEX: u32 = 1;

/// Where a control lands in the export schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTarget {
    /// Discrete button element with an SDL-ordered index
    Button(u32),
    /// Analog stick block (1 = left, 2 = right); slots attach to the click
    Stick(u32),
    /// Trigger block (1 = left, 2 = right)
    Trigger(u32),
    /// D-pad direction with its SDL hat value (up=1, right=2, down=4, left=8)
    DPadDirection(u32),
}

/// Maps a control to its schema target.
///
/// Returns `None` for controls the schema cannot express; the serializer
/// logs and skips those rather than failing the export.
#[must_use]
pub const fn schema_target(control: ControlId) -> Option<SchemaTarget> {
    Some(match control {
        ControlId::A => SchemaTarget::Button(1),
        ControlId::B => SchemaTarget::Button(2),
        ControlId::X => SchemaTarget::Button(3),
        ControlId::Y => SchemaTarget::Button(4),
        ControlId::Back => SchemaTarget::Button(5),
        ControlId::Guide => SchemaTarget::Button(6),
        ControlId::Start => SchemaTarget::Button(7),
        ControlId::LeftBumper => SchemaTarget::Button(10),
        ControlId::RightBumper => SchemaTarget::Button(11),
        ControlId::Paddle1 => SchemaTarget::Button(12),
        ControlId::Paddle2 => SchemaTarget::Button(13),
        ControlId::Paddle3 => SchemaTarget::Button(14),
        ControlId::Paddle4 => SchemaTarget::Button(15),
        ControlId::LeftStick => SchemaTarget::Stick(1),
        ControlId::RightStick => SchemaTarget::Stick(2),
        ControlId::LeftTrigger => SchemaTarget::Trigger(1),
        ControlId::RightTrigger => SchemaTarget::Trigger(2),
        ControlId::DPadUp => SchemaTarget::DPadDirection(1),
        ControlId::DPadRight => SchemaTarget::DPadDirection(2),
        ControlId::DPadDown => SchemaTarget::DPadDirection(4),
        ControlId::DPadLeft => SchemaTarget::DPadDirection(8),
    })
}

/// Axes whose tuning a stick block aggregates, horizontal first.
///
/// The consumer keeps one set of zones per stick, so both axes of the
/// pair feed the same block.
#[must_use]
pub const fn stick_axes(stick_index: u32) -> Option<(ControllerAxis, ControllerAxis)> {
    match stick_index {
        1 => Some((ControllerAxis::LeftX, ControllerAxis::LeftY)),
        2 => Some((ControllerAxis::RightX, ControllerAxis::RightY)),
        _ => None,
    }
}

/// Axis whose tuning a trigger block aggregates.
#[must_use]
pub const fn trigger_axis(trigger_index: u32) -> Option<ControllerAxis> {
    match trigger_index {
        1 => Some(ControllerAxis::LeftTrigger),
        2 => Some(ControllerAxis::RightTrigger),
        _ => None,
    }
}
