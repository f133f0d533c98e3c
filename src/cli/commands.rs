//! Command implementations for Lexiscore CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::emoticon::EmoticonTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexiscoreError, Result};
use crate::lexicon::LexiconLoader;
use crate::scoring::batch::BatchScorer;
use crate::scoring::config::ScoringConfig;
use crate::scoring::word::WordScorer;
use crate::util::lines::lossy_lines;

/// Execute a CLI command.
pub fn execute_command(args: LexiscoreArgs) -> Result<()> {
    match &args.command {
        Command::Score(score_args) => score_file(score_args.clone(), &args),
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args.clone(), &args),
    }
}

/// Score every line of the sentences file.
fn score_file(args: ScoreArgs, cli_args: &LexiscoreArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    debug!("Scoring config: {config:?}");

    let start_time = Instant::now();

    let lexicon = LexiconLoader::new()
        .strict(config.strict_lexicon)
        .load_from_file(&args.lexicon_file)?;
    info!(
        "Loaded {} lexicon entries from {}",
        lexicon.len(),
        args.lexicon_file.display()
    );

    let lines = read_lines(&args.sentences_file)?;
    let scorer = BatchScorer::new(config)?;
    let results = scorer.score_lines(&lines, &lexicon);

    info!(
        "Scored {} lines in {}ms",
        results.len(),
        start_time.elapsed().as_millis()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_scores(&mut out, &results, &cli_args.output_format, cli_args.pretty)
}

/// Print the tokens produced for a piece of text.
fn tokenize_text(args: TokenizeArgs, cli_args: &LexiscoreArgs) -> Result<()> {
    let tokenizer = EmoticonTokenizer::with_match(args.emoticon_match);
    let word_scorer = WordScorer::new();

    let reports: Vec<TokenReport> = tokenizer
        .tokenize(&args.text)
        .map(|token| {
            let normalized = if !args.normalized {
                None
            } else if token.is_emoticon() {
                Some(token.text.clone())
            } else {
                Some(word_scorer.normalize(&token.text))
            };
            TokenReport {
                position: token.position,
                text: token.text,
                kind: token.token_type,
                normalized,
            }
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &reports, &cli_args.output_format, cli_args.pretty)
}

/// Build the scoring configuration from an optional file and CLI overrides.
fn resolve_config(args: &ScoreArgs) -> Result<ScoringConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            ScoringConfig::load_from_file(path)?
        }
        None => ScoringConfig::default(),
    };

    if let Some(emoticon_match) = args.emoticon_match {
        config.emoticon_match = emoticon_match;
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err(LexiscoreError::invalid_argument("--threads must be at least 1"));
        }
        config.num_threads = Some(threads);
    }
    if args.strict {
        config.strict_lexicon = true;
    }

    Ok(config)
}

/// Read all lines of a sentences file, without line terminators.
///
/// Invalid UTF-8 is replaced per line, so one bad byte does not lose the file.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| {
        LexiscoreError::Io(io::Error::new(
            e.kind(),
            format!("failed to open sentences file '{}': {}", path.display(), e),
        ))
    })?;

    let lines = lossy_lines(BufReader::new(file)).collect::<io::Result<Vec<_>>>()?;
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
