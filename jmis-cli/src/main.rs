use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::*;

mod cli;

use cli::commands::clean::handle_clean_command;
use cli::commands::vocab::handle_vocab_command;
use cli::{Cli, Commands};
use jmis_cleaner::cleaning::ValidationReport;

/// Exit status when the cleaned file has vocabulary problems and --strict is set
const EXIT_VALIDATION_FAILED: u8 = 2;

fn main() -> ExitCode {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Clean(args) => {
            let strict = args.strict;
            let summary = handle_clean_command(args)?;
            println!(
                "Wrote {} row(s) to {}",
                summary.rows,
                summary.output.display().to_string().bright_green().bold()
            );
            Ok(ExitCode::from(clean_exit_status(&summary.report, strict)))
        }
        Commands::Vocab(args) => {
            handle_vocab_command(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Exit status for a finished clean run; the output is written either way
fn clean_exit_status(report: &ValidationReport, strict: bool) -> u8 {
    if strict && !report.is_valid() {
        EXIT_VALIDATION_FAILED
    } else {
        0
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
