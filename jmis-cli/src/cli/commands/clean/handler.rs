//! Clean command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use dialoguer::Input;
use is_terminal::IsTerminal;

use jmis_cleaner::cleaning::excel::{DEFAULT_OUTPUT_NAME, read_dataset, write_csv, write_xlsx};
use jmis_cleaner::cleaning::types::schema::COUNTY;
use jmis_cleaner::cleaning::{MapperOptions, RawDataset, ValidationReport, clean_dataset};
use jmis_cleaner::config::CleanerConfig;

use super::{CleanCommands, OutputFormat};
use crate::cli::preview::{preview_cleaned, preview_raw};

/// What a clean run produced
#[derive(Debug)]
pub struct CleanSummary {
    pub output: PathBuf,
    pub rows: usize,
    pub report: ValidationReport,
}

/// Handle the clean command
pub fn handle_clean_command(args: CleanCommands) -> Result<CleanSummary> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let mut config = CleanerConfig::load(args.config.as_deref())?;
    config.apply_env_overrides();
    let mut options = config.mapper_options();
    if let Some(county) = args.county.clone() {
        options.default_county = Some(county);
    }

    println!("Reading {}", args.input.display().to_string().cyan());
    let dataset = read_dataset(&args.input)
        .with_context(|| format!("Error processing file: {}", args.input.display()))?;

    if args.preview > 0 {
        println!();
        println!("{}", "Preview of uploaded raw data".bold());
        println!("{}", preview_raw(&dataset, args.preview));
    }

    resolve_missing_county(&dataset, &mut options, args.no_prompt)?;

    let cleaned = clean_dataset(&dataset, &options);

    if args.preview > 0 {
        println!("{}", "Cleaned & formatted data for JMIS upload".bold());
        println!("{}", preview_cleaned(&cleaned.records, args.preview));
    }

    let output = output_path(&args.input, args.output.as_deref(), args.format);
    if overwrites_input(&args.input, &output) {
        log::warn!("Output {} is the input file; it will be replaced", output.display());
        println!(
            "{}",
            format!(
                "Overwriting the input file {}; pass -o to write elsewhere",
                output.display()
            )
            .yellow()
        );
    }
    match args.format {
        OutputFormat::Xlsx => write_xlsx(&cleaned.records, &output)?,
        OutputFormat::Csv => write_csv(&cleaned.records, &output)?,
    }

    if let Some(report_path) = &args.report {
        let json = serde_json::to_string_pretty(&cleaned.report)
            .context("Failed to serialize validation report")?;
        std::fs::write(report_path, json).with_context(|| {
            format!("Failed to write report file: {}", report_path.display())
        })?;
        log::info!("Validation report written to {}", report_path.display());
    }

    print_report(&cleaned.report);

    Ok(CleanSummary {
        output,
        rows: cleaned.records.len(),
        report: cleaned.report,
    })
}

/// Ask the operator for a county when the upload has none and no default is set
fn resolve_missing_county(
    dataset: &RawDataset,
    options: &mut MapperOptions,
    no_prompt: bool,
) -> Result<()> {
    if dataset.has_column(COUNTY) || options.default_county.is_some() {
        return Ok(());
    }

    if no_prompt || !std::io::stdin().is_terminal() {
        log::warn!("'{}' column missing and no county given", COUNTY);
        return Ok(());
    }

    let county: String = Input::new()
        .with_prompt(format!(
            "'{}' column missing. Enter county name to apply to all",
            COUNTY
        ))
        .allow_empty(true)
        .interact_text()
        .context("Failed to read county")?;

    if !county.trim().is_empty() {
        options.default_county = Some(county);
    }
    Ok(())
}

/// Output path: explicit, else the default file name next to the input
fn output_path(input: &Path, output: Option<&Path>, format: OutputFormat) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input
            .with_file_name(DEFAULT_OUTPUT_NAME)
            .with_extension(format.extension()),
    }
}

/// True when `output` names the same file as `input`
fn overwrites_input(input: &Path, output: &Path) -> bool {
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}

fn print_report(report: &ValidationReport) {
    println!();
    if report.is_valid() {
        println!("{}", "All values match the JMIS vocabularies".green());
        return;
    }

    println!(
        "{}",
        format!(
            "{} column(s) contain values outside their vocabulary:",
            report.len()
        )
        .yellow()
        .bold()
    );
    for message in report.messages() {
        println!("  {} {}", "-".yellow(), message);
    }
    println!(
        "{}",
        "The cleaned file was still written; fix these before uploading.".dimmed()
    );
}
