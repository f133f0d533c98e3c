//! Per-token scoring.

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{Filter, LowercaseFilter, TrailingPunctuationFilter};
use crate::lexicon::Lexicon;

/// Turns a token into a lexicon key and looks it up.
///
/// The key is built by stripping trailing punctuation and then lowercasing.
/// Leading punctuation is kept, so `"'good"` does not match `"good"`.
/// Emoticon tokens skip the filters and are looked up verbatim.
///
/// # Examples
///
/// ```
/// use lexiscore::lexicon::build_lexicon;
/// use lexiscore::scoring::word::WordScorer;
///
/// let lexicon = build_lexicon(vec![("good".to_string(), 1.5)]);
/// let scorer = WordScorer::new();
///
/// assert_eq!(scorer.score("GOOD!!!", &lexicon), 1.5);
/// assert_eq!(scorer.score("'good", &lexicon), 0.0);
/// ```
#[derive(Clone)]
pub struct WordScorer {
    filters: Vec<Arc<dyn Filter>>,
}

impl WordScorer {
    /// Create a word scorer with the standard normalization chain.
    pub fn new() -> Self {
        WordScorer {
            filters: vec![
                Arc::new(TrailingPunctuationFilter::new()),
                Arc::new(LowercaseFilter::new()),
            ],
        }
    }

    /// Get the normalization filters, in application order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Apply the normalization chain to a token stream.
    pub fn normalize_stream(&self, tokens: TokenStream) -> TokenStream {
        self.filters
            .iter()
            .fold(tokens, |stream, filter| filter.filter(stream))
    }

    /// Build the lexicon key for a raw word.
    pub fn normalize(&self, word: &str) -> String {
        let stream: TokenStream = Box::new(std::iter::once(Token::new(word, 0)));
        self.normalize_stream(stream)
            .next()
            .map(|token| token.text)
            .unwrap_or_default()
    }

    /// Score a raw word. Words missing from the lexicon score `0.0`.
    pub fn score(&self, word: &str, lexicon: &Lexicon) -> f64 {
        lexicon.score(&self.normalize(word))
    }

    /// Score a token produced by a tokenizer.
    pub fn score_token(&self, token: &Token, lexicon: &Lexicon) -> f64 {
        if token.is_emoticon() {
            lexicon.score(&token.text)
        } else {
            self.score(&token.text, lexicon)
        }
    }
}

impl Default for WordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("WordScorer").field("filters", &names).finish()
    }
}
