//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Datalex using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Datalex - banking data dictionary description generator
#[derive(Parser, Debug)]
#[command(name = "datalex")]
#[command(version, about, long_about = None)]
#[command(author = "Datalex Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "datalex.toml", env = "DATALEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DATALEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate descriptions for a table context
    Generate(commands::generate::GenerateArgs),

    /// Describe a CSV of (table_name, column_name) rows
    Batch(commands::batch::BatchArgs),

    /// Validate a generated payload against thresholds
    Validate(commands::validate::ValidateArgs),

    /// Submit reviewer decisions to the review store
    Review(commands::review::ReviewArgs),

    /// Export the approved dictionary as CSV
    Export(commands::export::ExportArgs),

    /// List the demo sample tables
    Samples(commands::samples::SamplesArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate_config::ValidateConfigArgs),
}
