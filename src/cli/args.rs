//! Command line argument parsing for the wordsyn CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordsyn - add words and synonyms, and look them up
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsyn")]
#[command(about = "Client for a words and synonyms REST service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordsynArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Base URL of the words service
    #[arg(long, env = "WORDSYN_BASE_URI", global = true)]
    pub base_uri: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordsynArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a word, optionally with a synonym
    #[command(name = "add-word")]
    AddWord(AddWordArgs),

    /// Attach a synonym to a word
    #[command(name = "add-synonym")]
    AddSynonym(AddSynonymArgs),

    /// List the synonyms of a word
    Synonyms(SynonymsArgs),

    /// List the words a synonym belongs to
    Words(WordsArgs),

    /// Check input against the form rules without contacting the service
    Validate(ValidateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AddWordArgs {
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Synonym sent along with the word
    #[arg(short, long)]
    pub synonym: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddSynonymArgs {
    #[arg(value_name = "WORD")]
    pub word: String,

    #[arg(value_name = "SYNONYM")]
    pub synonym: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SynonymsArgs {
    #[arg(value_name = "WORD")]
    pub word: String,
}

#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    #[arg(value_name = "SYNONYM")]
    pub synonym: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(short, long, default_value = "")]
    pub word: String,

    #[arg(short, long, default_value = "")]
    pub synonym: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_add_word_command() {
        let args = WordsynArgs::try_parse_from([
            "wordsyn",
            "--base-uri",
            "http://localhost:8080",
            "add-word",
            "cat",
            "--synonym",
            "feline",
        ])
        .unwrap();

        assert_eq!(args.base_uri.as_deref(), Some("http://localhost:8080"));
        if let Command::AddWord(add_args) = args.command {
            assert_eq!(add_args.word, "cat");
            assert_eq!(add_args.synonym.as_deref(), Some("feline"));
        } else {
            panic!("Expected AddWord command");
        }
    }

    #[test]
    fn test_add_synonym_requires_both() {
        assert!(WordsynArgs::try_parse_from(["wordsyn", "add-synonym", "cat"]).is_err());

        let args =
            WordsynArgs::try_parse_from(["wordsyn", "add-synonym", "cat", "kitty"]).unwrap();
        if let Command::AddSynonym(add_args) = args.command {
            assert_eq!(add_args.word, "cat");
            assert_eq!(add_args.synonym, "kitty");
        } else {
            panic!("Expected AddSynonym command");
        }
    }

    #[test]
    fn test_validate_defaults_to_empty_fields() {
        let args = WordsynArgs::try_parse_from(["wordsyn", "validate", "-s", "kitty"]).unwrap();
        if let Command::Validate(validate_args) = args.command {
            assert_eq!(validate_args.word, "");
            assert_eq!(validate_args.synonym, "kitty");
        } else {
            panic!("Expected Validate command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = WordsynArgs::try_parse_from(["wordsyn", "synonyms", "cat"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = WordsynArgs::try_parse_from(["wordsyn", "-vvv", "synonyms", "cat"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = WordsynArgs::try_parse_from(["wordsyn", "-q", "-v", "words", "feline"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            WordsynArgs::try_parse_from(["wordsyn", "-f", "json", "--pretty", "words", "fast"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
