// SPDX-FileCopyrightText: 2026 Formscan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formscan - query a game form registry from the command line.
//!
//! This is the binary entry point; `run` drives the example plugin through
//! its whole lifecycle, `lookup` and `scan` query a forms file directly.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use formscan_config::FormscanConfig;
use formscan_core::FormKind;
use formscan_registry::load_forms_file;

use crate::commands::{CliError, ScanFilter};

/// Formscan - query a game form registry.
#[derive(Parser, Debug)]
#[command(name = "formscan", version, about, long_about = None)]
struct Cli {
    /// Config file to load instead of the standard hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the plugin, publish the forms file and print its findings.
    Run {
        #[arg(long)]
        forms: Option<PathBuf>,
    },
    /// Look up one form by id (decimal or 0x hex) or editor id.
    Lookup {
        target: String,
        #[arg(long)]
        forms: Option<PathBuf>,
    },
    /// List forms matching every given filter.
    Scan {
        #[arg(long)]
        kind: Option<FormKind>,
        #[arg(long)]
        name_contains: Option<String>,
        #[arg(long)]
        min_value: Option<u32>,
        #[arg(long)]
        forms: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => formscan_config::load_and_validate_path(path),
        None => formscan_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            formscan_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    match execute(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("formscan: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands, config: &FormscanConfig) -> Result<(), CliError> {
    match command {
        Commands::Run { forms } => {
            let path = commands::forms_path(forms.as_deref(), config)?;
            let report = commands::run(config, &path)?;
            for line in commands::render_report(&report) {
                println!("{line}");
            }
        }
        Commands::Lookup { target, forms } => {
            let path = commands::forms_path(forms.as_deref(), config)?;
            commands::start_logging(config)?;
            let registry = load_forms_file(&path)?;
            match commands::lookup(&registry, &target) {
                Some(form) => println!("{}", commands::describe(form)),
                None => println!("no form matches {target}"),
            }
        }
        Commands::Scan {
            kind,
            name_contains,
            min_value,
            forms,
        } => {
            let path = commands::forms_path(forms.as_deref(), config)?;
            commands::start_logging(config)?;
            let registry = load_forms_file(&path)?;
            let filter = ScanFilter {
                kind,
                name_contains,
                min_value,
            };
            let found = commands::scan(&registry, &filter);
            for form in &found {
                println!("{}", commands::describe(form));
            }
            println!("{} of {} forms matched", found.len(), registry.len());
        }
    }
    Ok(())
}
