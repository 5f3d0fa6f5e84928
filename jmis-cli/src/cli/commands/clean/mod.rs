//! `clean` command arguments

mod handler;

use std::path::PathBuf;

use clap::{Args, ValueEnum};

pub use handler::handle_clean_command;

#[derive(Args, Debug)]
pub struct CleanCommands {
    /// Raw export to clean (.csv, .xlsx, .xls or .ods)
    pub input: PathBuf,

    /// Output file [default: JMIS_CLEANED_UPLOAD.xlsx next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// County to apply when the upload has no county column
    #[arg(long)]
    pub county: Option<String>,

    /// Never prompt for a missing county
    #[arg(long)]
    pub no_prompt: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Xlsx)]
    pub format: OutputFormat,

    /// Rows to preview before and after cleaning (0 disables)
    #[arg(long, default_value_t = 10)]
    pub preview: usize,

    /// Write the validation report as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with status 2 when validation finds problems
    #[arg(long)]
    pub strict: bool,

    /// Config file [default: <config dir>/jmis-cleaner/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}
