//! Lexicon file loader.
//!
//! Each line of a lexicon file holds a word followed by its score, separated
//! by whitespace:
//!
//! ```text
//! good      1.5
//! terrible -2.8   anything after the score is ignored
//! ```
//!
//! Blank lines are skipped. A line that has a word but no parseable score is
//! malformed: the lenient loader (the default) logs a warning and skips it,
//! the strict loader fails with the line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::tokenizer::emoticon::is_space;
use crate::error::{LexiscoreError, Result};
use crate::lexicon::Lexicon;
use crate::util::lines::lossy_lines;

/// Reads `word score` records into a [`Lexicon`].
#[derive(Clone, Debug, Default)]
pub struct LexiconLoader {
    strict: bool,
}

impl LexiconLoader {
    /// Create a lenient loader.
    pub fn new() -> Self {
        LexiconLoader::default()
    }

    /// Fail on malformed lines instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check if this loader rejects malformed lines.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parse one lexicon line.
    ///
    /// Returns `None` for a blank line, `Some(Err(_))` when the word has no
    /// parseable score, and `Some(Ok((word, score)))` otherwise.
    pub fn parse_line(line: &str) -> Option<Result<(String, f64)>> {
        let mut fields = line.split(is_space).filter(|field| !field.is_empty());
        let word = fields.next()?;

        let parsed = match fields.next() {
            Some(raw) => raw
                .parse::<f64>()
                .map(|score| (word.to_string(), score))
                .map_err(|e| {
                    LexiscoreError::lexicon(format!("invalid score '{raw}' for '{word}': {e}"))
                }),
            None => Err(LexiscoreError::lexicon(format!(
                "missing score for '{word}'"
            ))),
        };

        Some(parsed)
    }

    /// Load a lexicon from a file.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Lexicon> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LexiscoreError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to open lexicon file '{}': {}", path.display(), e),
            ))
        })?;

        info!("Loading lexicon from {}", path.display());
        self.load_from_reader(BufReader::new(file))
    }

    /// Load a lexicon from any buffered reader.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<Lexicon> {
        let mut entries: Vec<(String, f64)> = Vec::new();
        let mut skipped = 0usize;

        for (line_num, line) in lossy_lines(reader).enumerate() {
            let line = line?;
            match Self::parse_line(&line) {
                None => continue,
                Some(Ok(entry)) => {
                    entries.try_reserve(1)?;
                    entries.push(entry);
                }
                Some(Err(LexiscoreError::Lexicon(reason))) if self.strict => {
                    return Err(LexiscoreError::lexicon(format!(
                        "line {}: {}",
                        line_num + 1,
                        reason
                    )));
                }
                Some(Err(e)) if self.strict => return Err(e),
                Some(Err(e)) => {
                    warn!("Skipping lexicon line {}: {}", line_num + 1, e);
                    skipped += 1;
                }
            }
        }

        let lexicon = Lexicon::try_from_entries(entries)?;
        debug!(
            "Loaded {} lexicon entries ({} distinct, {} skipped)",
            lexicon.len(),
            lexicon.unique_words(),
            skipped
        );

        Ok(lexicon)
    }
}
