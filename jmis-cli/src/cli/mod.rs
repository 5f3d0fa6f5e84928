//! Command-line interface

pub mod commands;
pub mod preview;

use clap::{Parser, Subcommand};

use commands::clean::CleanCommands;
use commands::vocab::VocabCommands;

#[derive(Parser)]
#[command(name = "jmis-cleaner")]
#[command(about = "Clean raw training attendance exports into the JMIS upload template")]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean an upload and write the JMIS spreadsheet
    Clean(CleanCommands),
    /// List the controlled vocabularies
    Vocab(VocabCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean() {
        let cli = Cli::try_parse_from([
            "jmis-cleaner",
            "-vv",
            "clean",
            "roster.csv",
            "--county",
            "Nakuru",
            "--format",
            "csv",
            "--strict",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Clean(args) => {
                assert_eq!(args.input.to_str(), Some("roster.csv"));
                assert_eq!(args.county.as_deref(), Some("Nakuru"));
                assert!(args.strict);
                assert_eq!(args.preview, 10);
            }
            Commands::Vocab(_) => panic!("expected clean"),
        }
    }
}
