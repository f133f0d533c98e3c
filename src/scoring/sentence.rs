//! Sentence scoring.
//!
//! A sentence score is the arithmetic mean of the scores of every token the
//! tokenizer emits for the line. Unknown tokens count toward the mean with a
//! score of `0.0`. A line with no tokens scores `0.0`.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::emoticon::EmoticonTokenizer;
use crate::lexicon::Lexicon;
use crate::scoring::config::ScoringConfig;
use crate::scoring::word::WordScorer;

static DEFAULT_SCORER: LazyLock<SentenceScorer> = LazyLock::new(SentenceScorer::new);

/// Score one line with the default tokenizer and normalization.
///
/// # Examples
///
/// ```
/// use lexiscore::lexicon::build_lexicon;
/// use lexiscore::scoring::score_sentence;
///
/// let lexicon = build_lexicon(vec![
///     ("love".to_string(), 3.0),
///     ("rain".to_string(), -1.0),
/// ]);
///
/// assert_eq!(score_sentence("I love rain", &lexicon), 2.0 / 3.0);
/// assert_eq!(score_sentence("   ", &lexicon), 0.0);
/// ```
pub fn score_sentence(line: &str, lexicon: &Lexicon) -> f64 {
    DEFAULT_SCORER.score(line, lexicon)
}

/// Drives tokenization and word scoring for a line.
#[derive(Clone)]
pub struct SentenceScorer {
    tokenizer: Arc<dyn Tokenizer>,
    word_scorer: WordScorer,
}

impl SentenceScorer {
    /// Create a sentence scorer with the default tokenizer.
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(EmoticonTokenizer::new()))
    }

    /// Create a sentence scorer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        SentenceScorer {
            tokenizer,
            word_scorer: WordScorer::new(),
        }
    }

    /// Create a sentence scorer from a scoring configuration.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::with_tokenizer(Arc::new(EmoticonTokenizer::with_match(
            config.emoticon_match,
        )))
    }

    /// Get the tokenizer used by this scorer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the word scorer used by this scorer.
    pub fn word_scorer(&self) -> &WordScorer {
        &self.word_scorer
    }

    /// Score a line.
    pub fn score(&self, line: &str, lexicon: &Lexicon) -> f64 {
        self.score_with_count(line, lexicon).0
    }

    /// Score a line and report how many tokens contributed to the mean.
    pub fn score_with_count(&self, line: &str, lexicon: &Lexicon) -> (f64, usize) {
        let tokens = self
            .word_scorer
            .normalize_stream(self.tokenizer.tokenize(line));

        let mut sum = 0.0;
        let mut count = 0usize;
        for token in tokens {
            sum += lexicon.score(&token.text);
            count += 1;
        }

        if count > 0 {
            (sum / count as f64, count)
        } else {
            (0.0, 0)
        }
    }
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SentenceScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceScorer")
            .field("tokenizer", &self.tokenizer.name())
            .field("word_scorer", &self.word_scorer)
            .finish()
    }
}
