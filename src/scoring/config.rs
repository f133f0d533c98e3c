//! Configuration for sentiment scoring.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::emoticon::EmoticonMatch;
use crate::error::{LexiscoreError, Result};

/// Settings for tokenization, lexicon loading and batch scoring.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change:
///
/// ```json
/// { "parallel": true, "num_threads": 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// How run starts are tested against the emoticon set.
    pub emoticon_match: EmoticonMatch,

    /// Score lines on a worker pool.
    pub parallel: bool,

    /// Worker pool size for parallel scoring.
    /// If None, uses the number of CPU cores.
    pub num_threads: Option<usize>,

    /// Reject malformed lexicon lines instead of skipping them.
    pub strict_lexicon: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            emoticon_match: EmoticonMatch::Literal,
            parallel: false,
            num_threads: None,
            strict_lexicon: false,
        }
    }
}

impl ScoringConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexiscoreError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ScoringConfig = serde_json::from_str(&content).map_err(|e| {
            LexiscoreError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the scorers cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(LexiscoreError::config("num_threads must be at least 1"));
        }
        Ok(())
    }

    /// Effective worker pool size.
    pub fn thread_pool_size(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }

    /// Set the emoticon matching mode.
    pub fn with_emoticon_match(mut self, emoticon_match: EmoticonMatch) -> Self {
        self.emoticon_match = emoticon_match;
        self
    }

    /// Enable or disable parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker pool size.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Enable or disable strict lexicon loading.
    pub fn with_strict_lexicon(mut self, strict: bool) -> Self {
        self.strict_lexicon = strict;
        self
    }
}
