//! Doctor command reporting broken references before export.

use crate::cli::common::{CliError, CliResult};
use crate::doctor;
use crate::parser;
use crate::translator::KeyMap;
use clap::Args;
use std::path::PathBuf;

/// Check a project for dangling references and unknown keys
#[derive(Debug, Clone, Args)]
pub struct DoctorArgs {
    /// Path to the project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,
}

impl DoctorArgs {
    /// Execute the doctor command
    pub fn execute(&self) -> CliResult<()> {
        let project = parser::load_project(&self.project)
            .map_err(|e| CliError::io(format!("Failed to load project: {e:#}")))?;

        let key_map = KeyMap::load()
            .map_err(|e| CliError::io(format!("Failed to load key map: {e:#}")))?;

        let findings = doctor::check_project(&project, &key_map);

        if findings.is_empty() {
            println!("✓ No problems found");
            return Ok(());
        }

        for finding in &findings {
            println!(
                "✗ [{}] {} / {} / slot {}: {}",
                finding.kind.label(),
                finding.set_name,
                finding.control.label(),
                finding.slot_index,
                finding.detail
            );
        }
        println!();
        println!(
            "{} problem(s) found; affected slots will be omitted on export",
            findings.len()
        );

        Err(CliError::Findings(findings.len()))
    }
}
