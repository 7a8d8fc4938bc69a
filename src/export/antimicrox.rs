//! AntiMicroX profile serialization.
//!
//! Converts a [`Profile`] plus an action library into the consumer's XML
//! document. The conversion is a pure transform: deterministic, no I/O, no
//! mutation of its inputs. Data-quality problems (dangling action/macro/set
//! ids, unknown key names) degrade by omission with a diagnostic log; they
//! never fail the export.

use crate::export::schema::{
    schema_target, stick_axes, trigger_axis, SchemaTarget, DPAD_INDEX, STICK_CLICK_INDEX,
    TRIGGER_BUTTON_INDEX,
};
use crate::models::{
    Action, AxisConfig, ButtonMapping, ControlId, MacroStep, Profile, Set, SlotBinding,
};
use crate::translator::KeyMap;
use anyhow::{Context, Result};
use std::path::Path;

/// Schema version of the emitted document.
pub const CONFIG_VERSION: u32 = 19;

/// Consumer application version the document declares by default.
pub const DEFAULT_APP_VERSION: &str = "3.3.3";

/// Knobs for the emitted document header.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Value of the root element's `appversion` attribute
    pub app_version: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            app_version: DEFAULT_APP_VERSION.to_string(),
        }
    }
}

/// Serializes a profile to the AntiMicroX XML document text.
///
/// Controls are grouped per set by category (sticks, triggers, d-pad,
/// discrete buttons) and iterated in the fixed schema-table order, so the
/// same inputs always produce byte-identical output.
#[must_use]
pub fn generate_profile_xml(
    profile: &Profile,
    actions: &[Action],
    key_map: &KeyMap,
    options: &ExportOptions,
) -> String {
    let mut output = String::new();

    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str(&format!(
        "<gamecontroller configversion=\"{}\" appversion=\"{}\">\n",
        CONFIG_VERSION,
        escape_xml(&options.app_version)
    ));
    output.push_str("    <sets>\n");

    for (position, set) in profile.sets.iter().enumerate() {
        output.push_str(&generate_set(profile, set, position + 1, actions, key_map));
    }

    output.push_str("    </sets>\n");
    output.push_str("</gamecontroller>\n");
    output
}

/// Serializes a profile and writes it to disk.
///
/// Uses a temp file + rename so the target is never left half-written.
pub fn save_profile_xml(
    profile: &Profile,
    actions: &[Action],
    key_map: &KeyMap,
    options: &ExportOptions,
    path: &Path,
) -> Result<()> {
    let xml = generate_profile_xml(profile, actions, key_map, options);
    atomic_write(path, &xml)
}

fn generate_set(
    profile: &Profile,
    set: &Set,
    position: usize,
    actions: &[Action],
    key_map: &KeyMap,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}<set index=\"{}\">\n", indent(2), position));
    output.push_str(&format!(
        "{}<name>{}</name>\n",
        indent(3),
        escape_xml(&set.name)
    ));

    output.push_str(&generate_sticks(profile, set, actions, key_map));
    output.push_str(&generate_triggers(profile, set, actions, key_map));
    output.push_str(&generate_dpad(profile, set, actions, key_map));
    output.push_str(&generate_buttons(profile, set, actions, key_map));

    output.push_str(&format!("{}</set>\n", indent(2)));
    output
}

/// Stick blocks, left then right. A block is emitted when the stick has
/// non-default axis tuning, a mapped click, or both.
fn generate_sticks(profile: &Profile, set: &Set, actions: &[Action], key_map: &KeyMap) -> String {
    let mut output = String::new();

    for control in [ControlId::LeftStick, ControlId::RightStick] {
        let Some(SchemaTarget::Stick(index)) = schema_target(control) else {
            continue;
        };

        let axis = stick_axes(index)
            .map(|(x, y)| merged_stick_config(profile.axis(x), profile.axis(y)))
            .filter(|c| !c.is_default());
        let click = set.mapping(control).filter(|m| m.has_content());
        if axis.is_none() && click.is_none() {
            continue;
        }

        output.push_str(&format!("{}<stick index=\"{}\">\n", indent(3), index));
        if let Some(config) = axis {
            output.push_str(&axis_metadata(&config, 4, true));
        }
        if let Some(mapping) = click {
            output.push_str(&format!(
                "{}<stickbutton index=\"{}\">\n",
                indent(4),
                STICK_CLICK_INDEX
            ));
            output.push_str(&slots_block(mapping, profile, actions, key_map, 5));
            output.push_str(&format!("{}</stickbutton>\n", indent(4)));
        }
        output.push_str(&format!("{}</stick>\n", indent(3)));
    }

    output
}

/// Trigger blocks, left then right, with their axis tuning.
fn generate_triggers(profile: &Profile, set: &Set, actions: &[Action], key_map: &KeyMap) -> String {
    let mut output = String::new();

    for control in [ControlId::LeftTrigger, ControlId::RightTrigger] {
        let Some(SchemaTarget::Trigger(index)) = schema_target(control) else {
            continue;
        };

        let axis = trigger_axis(index).and_then(|a| profile.axis(a));
        let mapping = set.mapping(control).filter(|m| m.has_content());
        if axis.is_none() && mapping.is_none() {
            continue;
        }

        output.push_str(&format!("{}<trigger index=\"{}\">\n", indent(3), index));
        if let Some(config) = axis {
            output.push_str(&axis_metadata(config, 4, false));
        }
        if let Some(mapping) = mapping {
            output.push_str(&format!(
                "{}<triggerbutton index=\"{}\">\n",
                indent(4),
                TRIGGER_BUTTON_INDEX
            ));
            output.push_str(&slots_block(mapping, profile, actions, key_map, 5));
            output.push_str(&format!("{}</triggerbutton>\n", indent(4)));
        }
        output.push_str(&format!("{}</trigger>\n", indent(3)));
    }

    output
}

/// The single d-pad hat, directions ordered by hat value.
fn generate_dpad(profile: &Profile, set: &Set, actions: &[Action], key_map: &KeyMap) -> String {
    let mut directions: Vec<(u32, &ButtonMapping)> = Vec::new();

    for control in ControlId::ALL {
        let Some(SchemaTarget::DPadDirection(value)) = schema_target(control) else {
            continue;
        };
        if let Some(mapping) = set.mapping(control).filter(|m| m.has_content()) {
            directions.push((value, mapping));
        }
    }

    if directions.is_empty() {
        return String::new();
    }
    directions.sort_by_key(|&(value, _)| value);

    let mut output = String::new();
    output.push_str(&format!("{}<dpad index=\"{}\">\n", indent(3), DPAD_INDEX));
    for (value, mapping) in directions {
        output.push_str(&format!("{}<dpadbutton index=\"{}\">\n", indent(4), value));
        output.push_str(&slots_block(mapping, profile, actions, key_map, 5));
        output.push_str(&format!("{}</dpadbutton>\n", indent(4)));
    }
    output.push_str(&format!("{}</dpad>\n", indent(3)));
    output
}

/// Discrete button elements, ordered by schema index.
fn generate_buttons(profile: &Profile, set: &Set, actions: &[Action], key_map: &KeyMap) -> String {
    let mut buttons: Vec<(u32, &ButtonMapping)> = Vec::new();

    for control in ControlId::ALL {
        let Some(SchemaTarget::Button(index)) = schema_target(control) else {
            continue;
        };
        if let Some(mapping) = set.mapping(control).filter(|m| m.has_content()) {
            buttons.push((index, mapping));
        }
    }

    buttons.sort_by_key(|&(index, _)| index);

    let mut output = String::new();
    for (index, mapping) in buttons {
        output.push_str(&format!("{}<button index=\"{}\">\n", indent(3), index));
        output.push_str(&slots_block(mapping, profile, actions, key_map, 4));
        output.push_str(&format!("{}</button>\n", indent(3)));
    }
    output
}

/// `<slots>` block for one mapping. `depth` is the indent level of the
/// `<slots>` element itself.
fn slots_block(
    mapping: &ButtonMapping,
    profile: &Profile,
    actions: &[Action],
    key_map: &KeyMap,
    depth: usize,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}<slots>\n", indent(depth)));

    for slot in &mapping.slots {
        let inner = slot_content(&slot.binding, profile, actions, key_map, depth + 2);
        if inner.is_empty() {
            continue;
        }
        output.push_str(&format!("{}<slot>\n", indent(depth + 1)));
        output.push_str(&inner);
        output.push_str(&format!("{}</slot>\n", indent(depth + 1)));
    }

    output.push_str(&format!("{}</slots>\n", indent(depth)));
    output
}

/// Inner elements of one slot, or an empty string when the binding is empty
/// or its reference cannot be resolved.
fn slot_content(
    binding: &SlotBinding,
    profile: &Profile,
    actions: &[Action],
    key_map: &KeyMap,
    depth: usize,
) -> String {
    match binding {
        SlotBinding::Empty => String::new(),
        SlotBinding::ModeShift(set_id) => match profile.set_position(set_id) {
            Some(position) => {
                format!("{}<setselect>{}</setselect>\n", indent(depth), position)
            }
            None => {
                tracing::warn!(set_id = %set_id, "mode-shift target set not found, omitting");
                String::new()
            }
        },
        SlotBinding::Macro(macro_id) => match profile.macro_by_id(macro_id) {
            Some(macro_def) => {
                let mut output = String::new();
                for step in &macro_def.steps {
                    output.push_str(&macro_event(step, key_map, depth));
                }
                output
            }
            None => {
                tracing::warn!(macro_id = %macro_id, "macro not found, omitting slot");
                String::new()
            }
        },
        SlotBinding::Action(action_id) => {
            match actions.iter().find(|a| a.id == *action_id) {
                Some(action) => {
                    let binding = key_map.translate(&action.default_key);
                    format!(
                        "{indent}<code>{}</code>\n{indent}<mode>{}</mode>\n",
                        binding.code,
                        binding.mode.as_str(),
                        indent = indent(depth)
                    )
                }
                None => {
                    tracing::warn!(action_id = %action_id, "action not found, omitting slot");
                    String::new()
                }
            }
        }
    }
}

/// One macro step as a timed event element.
fn macro_event(step: &MacroStep, key_map: &KeyMap, depth: usize) -> String {
    match step {
        MacroStep::Key { value, duration } => {
            let code = key_map.translate(value).code;
            event_line("key", &code, *duration, depth)
        }
        MacroStep::Mouse { value, duration } => {
            // Older project files stored mouse buttons as bare button
            // numbers, which are already in the consumer's format
            let code = if value.parse::<u64>().is_ok() {
                value.clone()
            } else {
                key_map.translate(value).code
            };
            event_line("mouse", &code, *duration, depth)
        }
        MacroStep::Delay { value } => event_line("delay", &value.to_string(), None, depth),
    }
}

fn event_line(kind: &str, value: &str, duration: Option<u64>, depth: usize) -> String {
    match duration {
        Some(ms) => format!(
            "{}<event type=\"{}\" value=\"{}\" duration=\"{}\"/>\n",
            indent(depth),
            kind,
            escape_xml(value),
            ms
        ),
        None => format!(
            "{}<event type=\"{}\" value=\"{}\"/>\n",
            indent(depth),
            kind,
            escape_xml(value)
        ),
    }
}

/// Field-wise merge of a stick's horizontal and vertical tuning.
///
/// The emitted block has one set of zones per stick, so the two axis
/// entries collapse; the horizontal value wins where both are set.
fn merged_stick_config(x: Option<&AxisConfig>, y: Option<&AxisConfig>) -> AxisConfig {
    let x = x.copied().unwrap_or_default();
    let y = y.copied().unwrap_or_default();
    AxisConfig {
        dead_zone: x.dead_zone.or(y.dead_zone),
        max_zone: x.max_zone.or(y.max_zone),
        diagonal_range: x.diagonal_range.or(y.diagonal_range),
    }
}

/// Axis tuning children, emitted in a fixed order.
fn axis_metadata(config: &AxisConfig, depth: usize, with_diagonal: bool) -> String {
    let mut output = String::new();
    if let Some(value) = config.dead_zone {
        output.push_str(&format!("{}<deadZone>{}</deadZone>\n", indent(depth), value));
    }
    if let Some(value) = config.max_zone {
        output.push_str(&format!("{}<maxZone>{}</maxZone>\n", indent(depth), value));
    }
    if with_diagonal {
        if let Some(value) = config.diagonal_range {
            output.push_str(&format!(
                "{}<diagonalRange>{}</diagonalRange>\n",
                indent(depth),
                value
            ));
        }
    }
    output
}

/// Escapes the five reserved XML characters.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn indent(level: usize) -> String {
    "    ".repeat(level)
}

/// Performs an atomic file write using temp file + rename.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("amgp.tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
