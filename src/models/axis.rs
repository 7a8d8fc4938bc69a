//! Analog axis identification and tuning.

use serde::{Deserialize, Serialize};

/// Analog axis of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerAxis {
    /// Left stick horizontal
    LeftX,
    /// Left stick vertical
    LeftY,
    /// Right stick horizontal
    RightX,
    /// Right stick vertical
    RightY,
    /// Left trigger travel
    LeftTrigger,
    /// Right trigger travel
    RightTrigger,
}

/// Per-axis tuning parameters.
///
/// All fields are optional; `None` means "consumer default" and is not
/// emitted on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    /// Input magnitude below which the axis reads as centered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_zone: Option<i32>,
    /// Input magnitude treated as full deflection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_zone: Option<i32>,
    /// Angular width of the diagonal zones, in degrees (sticks only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal_range: Option<i32>,
}

impl AxisConfig {
    /// Returns true if every field is unset.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.dead_zone.is_none() && self.max_zone.is_none() && self.diagonal_range.is_none()
    }
}

/// Profile-wide behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneralConfig {
    /// Interval between turbo repeats, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbo_interval: Option<u32>,
}
