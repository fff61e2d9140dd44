pub mod commands;
pub mod errors;
pub mod output;

use crate::config::{CheckConfig, ConfigArgs};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(
    name = "cellcheck",
    version,
    about = "Report reference workbook values that are missing from a source workbook",
    long_about = "Report reference workbook values that are missing from a source workbook.\n\nEvery non-empty cell of every sheet is trimmed and collected into a set. Values found in the reference workbook but not in the source workbook are listed, sorted case-insensitively with non-alphabetic values last."
)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub compact: bool,

    #[arg(long, global = true, help = "Print bare values only (text) or compact JSON")]
    pub quiet: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List reference values that do not occur in the source workbook.
    Compare {
        /// Workbook holding the valid values.
        source: PathBuf,
        /// Workbook to validate.
        reference: PathBuf,
        /// Also write the invalid values to the export path, one per line.
        #[arg(long)]
        export: bool,
    },
    /// Print the distinct trimmed values of one workbook.
    Extract { file: PathBuf },
}

pub async fn run_command(command: Commands, config: &CheckConfig) -> Result<Value> {
    match command {
        Commands::Compare {
            source,
            reference,
            export,
        } => commands::compare::compare(source, reference, export, config).await,
        Commands::Extract { file } => commands::extract::extract(file, config).await,
    }
}
