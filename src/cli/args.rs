//! Command line argument parsing for Lexiscore CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::emoticon::EmoticonMatch;

/// Lexiscore - lexicon-based sentiment scoring
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiscore")]
#[command(about = "Score the sentiment of each line of a text file against a word lexicon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexiscore Contributors")]
#[command(long_about = None)]
pub struct LexiscoreArgs {
    /// Increase log output (-v for info, -vvv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiscoreArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                1 | 2 => 2,
                _ => 3,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score every line of a sentences file
    Score(ScoreArgs),

    /// Show the tokens produced for a piece of text
    Tokenize(TokenizeArgs),
}

/// Arguments for scoring
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Lexicon file with one `word score` pair per line
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon_file: PathBuf,

    /// File with one sentence per line
    #[arg(value_name = "SENTENCES_FILE")]
    pub sentences_file: PathBuf,

    /// Scoring configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXISCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emoticon matching mode
    #[arg(short = 'e', long = "emoticons")]
    pub emoticon_match: Option<EmoticonMatch>,

    /// Score lines in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for parallel scoring
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Fail on malformed lexicon lines instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Emoticon matching mode
    #[arg(short = 'e', long = "emoticons", default_value = "literal")]
    pub emoticon_match: EmoticonMatch,

    /// Also show the normalized lexicon key of each token
    #[arg(short, long)]
    pub normalized: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
