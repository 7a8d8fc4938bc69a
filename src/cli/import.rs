//! Import command for appending keybind listings to a project.

use crate::cli::common::{CliError, CliResult};
use crate::parser::{self, Project};
use clap::Args;
use std::path::PathBuf;

/// Import actions from a keybind listing into a project
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Path to the keybind listing (lines of `Name = Key`)
    #[arg(short, long, value_name = "FILE")]
    pub keybinds: PathBuf,

    /// Path to the project JSON file (created if missing)
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        let text = std::fs::read_to_string(&self.keybinds)
            .map_err(|e| CliError::io(format!("Failed to read keybind listing: {e}")))?;

        let actions = parser::parse_keybinds(&text);
        if actions.is_empty() {
            return Err(CliError::validation(format!(
                "No keybinds recognized in {}",
                self.keybinds.display()
            )));
        }

        let mut project = if self.project.exists() {
            parser::load_project(&self.project)
                .map_err(|e| CliError::io(format!("Failed to load project: {e:#}")))?
        } else {
            Project::new()
        };

        let count = actions.len();
        project.actions.extend(actions);

        parser::save_project(&project, &self.project)
            .map_err(|e| CliError::io(format!("Failed to save project: {e:#}")))?;

        println!(
            "✓ Imported {} action(s) into: {}",
            count,
            self.project.display()
        );
        Ok(())
    }
}
