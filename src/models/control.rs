//! Controller control identifiers and classification.

use serde::{Deserialize, Serialize};

/// Physical control on a game controller.
///
/// Serialized by its canonical string name (e.g. `"LB"`, `"DPadUp"`), which is
/// also the key used in project files for the per-set mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    /// A face button
    A,
    /// B face button
    B,
    /// X face button
    X,
    /// Y face button
    Y,
    /// Left bumper
    #[serde(rename = "LB")]
    LeftBumper,
    /// Right bumper
    #[serde(rename = "RB")]
    RightBumper,
    /// Left trigger
    #[serde(rename = "LT")]
    LeftTrigger,
    /// Right trigger
    #[serde(rename = "RT")]
    RightTrigger,
    /// View / Back button
    Back,
    /// Menu / Start button
    Start,
    /// Guide button
    Guide,
    /// Left stick click
    #[serde(rename = "LS")]
    LeftStick,
    /// Right stick click
    #[serde(rename = "RS")]
    RightStick,
    /// D-pad up
    DPadUp,
    /// D-pad down
    DPadDown,
    /// D-pad left
    DPadLeft,
    /// D-pad right
    DPadRight,
    /// Elite paddle 1
    #[serde(rename = "P1")]
    Paddle1,
    /// Elite paddle 2
    #[serde(rename = "P2")]
    Paddle2,
    /// Elite paddle 3
    #[serde(rename = "P3")]
    Paddle3,
    /// Elite paddle 4
    #[serde(rename = "P4")]
    Paddle4,
}

/// Category of a control, used to group exported elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Face buttons (A/B/X/Y)
    Face,
    /// Shoulder bumpers
    Shoulder,
    /// Analog triggers
    Trigger,
    /// Center cluster (Back/Start/Guide)
    Center,
    /// Stick clicks
    Stick,
    /// D-pad directions
    DPad,
    /// Elite paddles
    Paddle,
}

impl ControlId {
    /// All known controls in canonical order.
    ///
    /// This order drives iteration everywhere a deterministic sequence is
    /// needed (set seeding, export, integrity checks).
    pub const ALL: [Self; 21] = [
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
        Self::LeftBumper,
        Self::RightBumper,
        Self::LeftTrigger,
        Self::RightTrigger,
        Self::Back,
        Self::Start,
        Self::Guide,
        Self::LeftStick,
        Self::RightStick,
        Self::DPadUp,
        Self::DPadDown,
        Self::DPadLeft,
        Self::DPadRight,
        Self::Paddle1,
        Self::Paddle2,
        Self::Paddle3,
        Self::Paddle4,
    ];

    /// Returns the category of this control.
    #[must_use]
    pub const fn kind(self) -> ControlKind {
        match self {
            Self::A | Self::B | Self::X | Self::Y => ControlKind::Face,
            Self::LeftBumper | Self::RightBumper => ControlKind::Shoulder,
            Self::LeftTrigger | Self::RightTrigger => ControlKind::Trigger,
            Self::Back | Self::Start | Self::Guide => ControlKind::Center,
            Self::LeftStick | Self::RightStick => ControlKind::Stick,
            Self::DPadUp | Self::DPadDown | Self::DPadLeft | Self::DPadRight => ControlKind::DPad,
            Self::Paddle1 | Self::Paddle2 | Self::Paddle3 | Self::Paddle4 => ControlKind::Paddle,
        }
    }

    /// Human-readable label for display and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::LeftBumper => "LB",
            Self::RightBumper => "RB",
            Self::LeftTrigger => "LT",
            Self::RightTrigger => "RT",
            Self::Back => "View",
            Self::Start => "Menu",
            Self::Guide => "Guide",
            Self::LeftStick => "L Stick",
            Self::RightStick => "R Stick",
            Self::DPadUp => "D-Up",
            Self::DPadDown => "D-Down",
            Self::DPadLeft => "D-Left",
            Self::DPadRight => "D-Right",
            Self::Paddle1 => "P1",
            Self::Paddle2 => "P2",
            Self::Paddle3 => "P3",
            Self::Paddle4 => "P4",
        }
    }
}
