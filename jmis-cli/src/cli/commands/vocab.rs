//! `vocab` command: print the controlled vocabularies

use anyhow::Result;
use clap::Args;
use colored::*;

use jmis_cleaner::cleaning::vocab::{VOCABULARIES, Vocabulary, vocabulary_named};

#[derive(Args, Debug)]
pub struct VocabCommands {
    /// Vocabulary to show (e.g. gender, county, ta-needs); all when omitted
    pub name: Option<String>,
}

pub fn handle_vocab_command(args: VocabCommands) -> Result<()> {
    match args.name {
        Some(name) => {
            let vocab = vocabulary_named(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown vocabulary '{}'. Available: {}",
                    name,
                    VOCABULARIES
                        .iter()
                        .map(|v| v.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?;
            print!("{}", format_vocabulary(vocab));
        }
        None => {
            for vocab in VOCABULARIES {
                println!("{}", format_vocabulary(vocab));
            }
        }
    }
    Ok(())
}

fn format_vocabulary(vocab: &Vocabulary) -> String {
    let kind = if vocab.multi { "multi-select" } else { "single value" };
    let mut out = format!(
        "{} ({})\n  {}\n",
        vocab.name.bold(),
        kind,
        vocab.column.dimmed()
    );
    for value in vocab.values {
        out.push_str(&format!("  - {}\n", value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vocabulary_lists_values() {
        colored::control::set_override(false);
        let vocab = vocabulary_named("gender").unwrap();
        let text = format_vocabulary(vocab);
        assert!(text.starts_with("gender (single value)"));
        assert!(text.contains("  - Intersex\n"));
    }

    #[test]
    fn test_unknown_vocabulary_is_an_error() {
        let err = handle_vocab_command(VocabCommands {
            name: Some("planets".to_string()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Available: gender"));
    }
}
