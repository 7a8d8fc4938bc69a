//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use padbind::models::{
    Action, AxisConfig, ControlId, ControllerAxis, Macro, MacroStep, INITIAL_SET_ID,
};
use padbind::parser::{save_project, Project};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a minimal valid project: one action bound to the A button.
///
/// The action uses a deterministic id so tests can assert on the exported
/// key code without chasing generated UUIDs.
pub fn test_project_basic() -> Project {
    let mut project = Project::new();
    project.actions.push(Action {
        id: "action-jump".to_string(),
        name: "Jump".to_string(),
        default_key: "space".to_string(),
    });
    project
        .profile
        .assign_action(
            INITIAL_SET_ID,
            ControlId::A,
            0,
            Some("action-jump".to_string()),
        )
        .unwrap();
    project
}

/// Creates a richer project exercising every export category: two sets,
/// a macro, a mode-shift, stick/trigger/d-pad bindings, and axis tuning.
pub fn test_project_full() -> Project {
    let mut project = test_project_basic();

    let second_set = project.profile.add_set("Combat").unwrap();

    project.actions.push(Action {
        id: "action-crouch".to_string(),
        name: "Crouch".to_string(),
        default_key: "lctrl".to_string(),
    });
    project.actions.push(Action {
        id: "action-fire".to_string(),
        name: "Fire".to_string(),
        default_key: "mouse1".to_string(),
    });

    let macro_def = Macro {
        id: "macro-burst".to_string(),
        name: "Burst Fire".to_string(),
        steps: vec![
            MacroStep::Key {
                value: "r".to_string(),
                duration: Some(50),
            },
            MacroStep::Delay { value: 100 },
            MacroStep::Mouse {
                value: "mouse1".to_string(),
                duration: None,
            },
        ],
    };
    project.profile.macros.push(macro_def);

    let profile = &mut project.profile;
    profile
        .assign_action(
            INITIAL_SET_ID,
            ControlId::LeftStick,
            0,
            Some("action-crouch".to_string()),
        )
        .unwrap();
    profile
        .assign_action(
            INITIAL_SET_ID,
            ControlId::RightTrigger,
            0,
            Some("action-fire".to_string()),
        )
        .unwrap();
    profile
        .assign_action(
            INITIAL_SET_ID,
            ControlId::DPadUp,
            0,
            Some("action-jump".to_string()),
        )
        .unwrap();
    profile
        .assign_macro(INITIAL_SET_ID, ControlId::X, 0, "macro-burst")
        .unwrap();
    profile
        .assign_mode_shift(INITIAL_SET_ID, ControlId::LeftBumper, 0, second_set.clone())
        .unwrap();
    profile
        .assign_action(&second_set, ControlId::B, 0, Some("action-fire".to_string()))
        .unwrap();

    profile.set_axis_config(
        ControllerAxis::LeftX,
        AxisConfig {
            dead_zone: Some(8000),
            max_zone: Some(30000),
            diagonal_range: Some(45),
        },
    );
    profile.set_axis_config(
        ControllerAxis::RightTrigger,
        AxisConfig {
            dead_zone: Some(4000),
            ..AxisConfig::default()
        },
    );

    project
}

/// Creates a project whose references are all broken: a slot pointing at a
/// missing action, a missing macro, a missing set, and an action whose key
/// name the translator does not know.
pub fn test_project_broken() -> Project {
    let mut project = Project::new();
    project.actions.push(Action {
        id: "action-weird".to_string(),
        name: "Weird".to_string(),
        default_key: "hyperspace".to_string(),
    });

    let profile = &mut project.profile;
    profile
        .assign_action(
            INITIAL_SET_ID,
            ControlId::A,
            0,
            Some("action-missing".to_string()),
        )
        .unwrap();
    profile
        .assign_macro(INITIAL_SET_ID, ControlId::B, 0, "macro-missing")
        .unwrap();
    profile
        .assign_mode_shift(INITIAL_SET_ID, ControlId::X, 0, "set-missing")
        .unwrap();
    profile
        .assign_action(
            INITIAL_SET_ID,
            ControlId::Y,
            0,
            Some("action-weird".to_string()),
        )
        .unwrap();

    project
}

/// Writes a project to a JSON file inside a fresh temp directory.
///
/// # Returns
/// The project file path and the `TempDir` guard keeping it alive.
pub fn create_temp_project_file(project: &Project) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("project.json");
    save_project(project, &path).expect("Failed to write project fixture");
    (path, temp)
}

/// Writes a keybind listing to a text file inside a fresh temp directory.
pub fn create_temp_keybinds_file(text: &str) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("keybinds.txt");
    std::fs::write(&path, text).expect("Failed to write keybinds fixture");
    (path, temp)
}
