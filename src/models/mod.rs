//! Data models for controller mapping profiles.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of the export schema
//! and the CLI layer.

pub mod action;
pub mod axis;
pub mod control;
pub mod macro_def;
pub mod mapping;
pub mod profile;
pub mod set;
pub mod slot;

// Re-export all model types
pub use action::Action;
pub use axis::{AxisConfig, ControllerAxis, GeneralConfig};
pub use control::{ControlId, ControlKind};
pub use macro_def::{Macro, MacroStep};
pub use mapping::{ButtonMapping, MAX_SLOTS};
pub use profile::{Profile, INITIAL_SET_ID};
pub use set::Set;
pub use slot::{Slot, SlotBinding, SlotTrigger};
