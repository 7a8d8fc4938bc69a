//! Export command for generating AntiMicroX profiles.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::PROFILE_EXTENSION;
use crate::export::{self, ExportOptions};
use crate::parser;
use crate::translator::KeyMap;
use clap::Args;
use std::path::{Path, PathBuf};

/// Export a project to an AntiMicroX profile
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to the project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,

    /// Output path for the profile (defaults to [project_name]_[date].amgp)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the profile XML to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Override the appversion attribute of the emitted document
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let project = parser::load_project(&self.project)
            .map_err(|e| CliError::io(format!("Failed to load project: {e:#}")))?;

        let key_map = KeyMap::load()
            .map_err(|e| CliError::io(format!("Failed to load key map: {e:#}")))?;

        let config = Config::load().unwrap_or_default();
        let options = ExportOptions {
            app_version: self
                .app_version
                .clone()
                .unwrap_or_else(|| config.export.app_version.clone()),
        };

        if self.stdout {
            let xml = export::generate_profile_xml(
                &project.profile,
                &project.actions,
                &key_map,
                &options,
            );
            print!("{xml}");
            return Ok(());
        }

        let output_path = self.get_output_path(&config);
        if !has_profile_extension(&output_path) {
            tracing::warn!(
                "Output path {} does not end in .{}; AntiMicroX may not list it",
                output_path.display(),
                PROFILE_EXTENSION
            );
        }
        export::save_profile_xml(
            &project.profile,
            &project.actions,
            &key_map,
            &options,
            &output_path,
        )
        .map_err(|e| CliError::io(format!("Failed to write profile: {e:#}")))?;

        println!("✓ Exported profile to: {}", output_path.display());
        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, config: &Config) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: [project_name]_[date].amgp
        let date = chrono::Local::now().format("%Y-%m-%d");
        let stem = self
            .project
            .file_stem()
            .map_or_else(|| "profile".to_string(), |s| s.to_string_lossy().to_string());

        config
            .export
            .output_dir
            .join(format!("{stem}_{date}.{PROFILE_EXTENSION}"))
    }
}

/// Returns true if a path carries the expected profile extension.
fn has_profile_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROFILE_EXTENSION))
}
