//! End-to-end tests for `padbind import` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;
use fixtures::*;

use padbind::parser::load_project;

/// Path to the padbind binary
fn padbind_bin() -> &'static str {
    env!("CARGO_BIN_EXE_padbind")
}

#[test]
fn test_import_creates_project_when_missing() {
    let listing = "Jump = Space\nCrouch: LCtrl\nFire -> Mouse1\n";
    let (keybinds_path, temp) = create_temp_keybinds_file(listing);
    let project_path = temp.path().join("project.json");

    let output = Command::new(padbind_bin())
        .args([
            "import",
            "--keybinds",
            keybinds_path.to_str().unwrap(),
            "--project",
            project_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Import should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Imported 3 action(s)"));

    let project = load_project(&project_path).expect("Project should parse");
    assert_eq!(project.actions.len(), 3);
    assert_eq!(project.actions[0].name, "Jump");
    assert_eq!(project.actions[0].default_key, "Space");
    assert_eq!(project.actions[2].name, "Fire");
    // Fresh project still carries the default set
    assert_eq!(project.profile.sets.len(), 1);
}

#[test]
fn test_import_appends_to_existing_project() {
    let project = test_project_basic();
    let (project_path, temp) = create_temp_project_file(&project);
    let keybinds_path = temp.path().join("more.txt");
    std::fs::write(&keybinds_path, "Reload = R\n").unwrap();

    let output = Command::new(padbind_bin())
        .args([
            "import",
            "--keybinds",
            keybinds_path.to_str().unwrap(),
            "--project",
            project_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let reloaded = load_project(&project_path).unwrap();
    assert_eq!(reloaded.actions.len(), 2);
    assert_eq!(reloaded.actions[0].id, "action-jump");
    assert_eq!(reloaded.actions[1].name, "Reload");
    // Existing slot assignments survive the round trip
    let mapping = reloaded.profile.sets[0]
        .mapping(padbind::models::ControlId::A)
        .expect("A mapping should survive");
    assert!(mapping.has_content());
}

#[test]
fn test_import_skips_comments_and_blanks() {
    let listing = "# header comment\n\n; another comment\nJump = Space\n// inline style\n";
    let (keybinds_path, temp) = create_temp_keybinds_file(listing);
    let project_path = temp.path().join("project.json");

    let output = Command::new(padbind_bin())
        .args([
            "import",
            "--keybinds",
            keybinds_path.to_str().unwrap(),
            "--project",
            project_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let project = load_project(&project_path).unwrap();
    assert_eq!(project.actions.len(), 1);
}

#[test]
fn test_import_rejects_empty_listing_with_validation_code() {
    let (keybinds_path, temp) = create_temp_keybinds_file("# nothing here\n");
    let project_path = temp.path().join("project.json");

    let output = Command::new(padbind_bin())
        .args([
            "import",
            "--keybinds",
            keybinds_path.to_str().unwrap(),
            "--project",
            project_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(!project_path.exists(), "No project should be created on failure");
}

#[test]
fn test_import_missing_listing_fails_with_io_code() {
    let temp = tempfile::TempDir::new().unwrap();
    let project_path = temp.path().join("project.json");

    let output = Command::new(padbind_bin())
        .args([
            "import",
            "--keybinds",
            "/nonexistent/binds.txt",
            "--project",
            project_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
