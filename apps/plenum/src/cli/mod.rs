//! # Plenum CLI Module
//!
//! This module implements the CLI interface for Plenum.
//!
//! ## Available Commands
//!
//! - `translate` - Translate a model and write IDF text
//! - `check` - Translate a model and report diagnostics only
//! - `schema` - List record types or show one type's fields

mod commands;

use clap::{Parser, Subcommand};
use plenum_core::PlenumError;
use std::path::PathBuf;
use std::process::ExitCode;

pub use commands::*;

use crate::config::AppConfig;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Plenum - building model to EnergyPlus input translator
///
/// Reads a building and HVAC object graph as JSON and writes the
/// equivalent simulation input file.
#[derive(Parser, Debug)]
#[command(name = "plenum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Also report informational diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress the run summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a model into IDF text
    Translate {
        /// Path to the model JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output IDF path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Annotate every field with its name
        #[arg(long)]
        comments: bool,
    },

    /// Translate a model and report diagnostics without writing output
    Check {
        /// Path to the model JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List record types, or show the fields of one
    Schema {
        /// Record type name, e.g. "Fan:OnOff"
        record_type: Option<String>,
    },
}

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Reporting {
    pub verbose: bool,
    pub quiet: bool,
    pub json_mode: bool,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<ExitCode, PlenumError> {
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    let reporting = Reporting {
        verbose: cli.verbose,
        quiet: cli.quiet,
        json_mode: cli.json_mode,
    };

    match cli.command {
        Commands::Translate {
            input,
            output,
            comments,
        } => {
            let mut options = config.translator;
            options.field_comments |= comments;
            cmd_translate(&input, output.as_deref(), options, reporting)
        }
        Commands::Check { input } => cmd_check(&input, config.translator, reporting),
        Commands::Schema { record_type } => cmd_schema(record_type.as_deref(), reporting),
    }
}
