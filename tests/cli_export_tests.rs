//! End-to-end tests for `padbind export` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the padbind binary
fn padbind_bin() -> &'static str {
    env!("CARGO_BIN_EXE_padbind")
}

#[test]
fn test_export_stdout_emits_document() {
    let project = test_project_basic();
    let (project_path, temp) = create_temp_project_file(&project);

    let output = Command::new(padbind_bin())
        .args(["export", "--project", project_path.to_str().unwrap(), "--stdout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let xml = String::from_utf8_lossy(&output.stdout);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<gamecontroller configversion=\"19\""));
    assert!(xml.contains("<sets>"));
    assert!(xml.contains("<set index=\"1\">"));
    // A button carries the Jump action, space = 0x20
    assert!(xml.contains("<button index=\"1\">"));
    assert!(xml.contains("<code>0x20</code>"));
    assert!(xml.contains("<mode>keyboard</mode>"));
}

#[test]
fn test_export_writes_file() {
    let project = test_project_basic();
    let (project_path, temp) = create_temp_project_file(&project);
    let out_path = temp.path().join("profile.amgp");

    let output = Command::new(padbind_bin())
        .args([
            "export",
            "--project",
            project_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(out_path.exists(), "Profile file should exist");
    let content = fs::read_to_string(&out_path).expect("Failed to read profile");
    assert!(content.contains("</gamecontroller>"));

    // No stray temp file left behind
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "tmp"))
        .collect();
    assert!(leftovers.is_empty(), "Atomic write should not leave temp files");
}

#[test]
fn test_export_full_project_covers_all_categories() {
    let project = test_project_full();
    let (project_path, temp) = create_temp_project_file(&project);

    let output = Command::new(padbind_bin())
        .args(["export", "--project", project_path.to_str().unwrap(), "--stdout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let xml = String::from_utf8_lossy(&output.stdout);

    // Two sets, mode-shift pointing at the second (1-based index 2)
    assert!(xml.contains("<set index=\"2\">"));
    assert!(xml.contains("<setselect>2</setselect>"));

    // Stick click and trigger button containers
    assert!(xml.contains("<stick index=\"1\">"));
    assert!(xml.contains("<stickbutton index=\"1\">"));
    assert!(xml.contains("<trigger index=\"2\">"));
    assert!(xml.contains("<triggerbutton index=\"1\">"));

    // D-pad up uses SDL hat value 1
    assert!(xml.contains("<dpad index=\"1\">"));
    assert!(xml.contains("<dpadbutton index=\"1\">"));

    // Macro expands to event lines
    assert!(xml.contains("<event type=\"key\" value=\"0x52\" duration=\"50\"/>"));
    assert!(xml.contains("<event type=\"delay\" value=\"100\"/>"));
    assert!(xml.contains("<event type=\"mouse\" value=\"1\"/>"));

    // Axis tuning metadata
    assert!(xml.contains("<deadZone>8000</deadZone>"));
    assert!(xml.contains("<maxZone>30000</maxZone>"));
    assert!(xml.contains("<diagonalRange>45</diagonalRange>"));
}

#[test]
fn test_export_is_deterministic() {
    let project = test_project_full();
    let (project_path, temp) = create_temp_project_file(&project);

    let run = || {
        let output = Command::new(padbind_bin())
            .args(["export", "--project", project_path.to_str().unwrap(), "--stdout"])
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
        output.stdout
    };

    assert_eq!(run(), run(), "Repeated exports should be byte-identical");
}

#[test]
fn test_export_app_version_override() {
    let project = test_project_basic();
    let (project_path, temp) = create_temp_project_file(&project);

    let output = Command::new(padbind_bin())
        .args([
            "export",
            "--project",
            project_path.to_str().unwrap(),
            "--stdout",
            "--app-version",
            "3.5.1",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let xml = String::from_utf8_lossy(&output.stdout);
    assert!(xml.contains("appversion=\"3.5.1\""));
}

#[test]
fn test_export_file_uses_configured_app_version_default() {
    // File output resolves the app version from config and then derives
    // the output path from the same config
    let project = test_project_basic();
    let (project_path, temp) = create_temp_project_file(&project);
    let out_path = temp.path().join("versioned.amgp");

    let output = Command::new(padbind_bin())
        .args([
            "export",
            "--project",
            project_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = fs::read_to_string(&out_path).expect("Failed to read profile");
    assert!(content.contains("appversion=\"3.3.3\""));
}

#[test]
fn test_export_broken_references_degrade_by_omission() {
    let project = test_project_broken();
    let (project_path, temp) = create_temp_project_file(&project);

    let output = Command::new(padbind_bin())
        .args(["export", "--project", project_path.to_str().unwrap(), "--stdout"])
        .output()
        .expect("Failed to execute command");

    // Broken references never fail the export
    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let xml = String::from_utf8_lossy(&output.stdout);
    assert!(!xml.contains("<setselect>"), "Dangling mode-shift should be omitted");
    assert!(!xml.contains("<event"), "Dangling macro should be omitted");
    // Unknown key resolves to the sentinel code
    assert!(xml.contains("<code>0x0</code>"));
}

#[test]
fn test_export_missing_project_fails_with_io_code() {
    let output = Command::new(padbind_bin())
        .args(["export", "--project", "/nonexistent/project.json", "--stdout"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load project"));
}
