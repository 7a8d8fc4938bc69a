//! padbind - Controller mapping profile exporter
//!
//! Converts editing projects (sets of button mappings, macros, and axis
//! tuning) into AntiMicroX profile XML, imports keybind listings, and
//! checks projects for broken references.

use clap::{Parser, Subcommand};
use padbind::cli::{DoctorArgs, ExportArgs, ImportArgs};
use tracing_subscriber::EnvFilter;

/// padbind - Controller mapping profile exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a project to an AntiMicroX profile (.amgp)
    Export(ExportArgs),
    /// Import actions from a keybind listing into a project
    Import(ImportArgs),
    /// Check a project for dangling references and unknown keys
    Doctor(DoctorArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Export(args) => args.execute(),
        Command::Import(args) => args.execute(),
        Command::Doctor(args) => args.execute(),
    };

    if let Err(error) = result {
        // doctor findings are already printed as a report
        if !matches!(error, padbind::cli::CliError::Findings(_)) {
            eprintln!("Error: {error}");
        }
        std::process::exit(error.exit_code());
    }
}
