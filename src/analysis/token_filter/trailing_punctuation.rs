//! Trailing punctuation filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// A filter that removes trailing ASCII punctuation from word tokens.
///
/// Characters are removed from the end one at a time while the last one is
/// ASCII punctuation. Leading and internal punctuation is kept, so `"'good"`
/// stays as is and `"don't!"` becomes `"don't"`. A token made only of
/// punctuation becomes empty.
#[derive(Clone, Debug, Default)]
pub struct TrailingPunctuationFilter;

impl TrailingPunctuationFilter {
    /// Create a new trailing punctuation filter.
    pub fn new() -> Self {
        TrailingPunctuationFilter
    }

    /// Strip trailing punctuation from a single piece of text.
    pub fn apply(text: &str) -> &str {
        text.trim_end_matches(|c: char| c.is_ascii_punctuation())
    }
}

impl Filter for TrailingPunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|token| {
            if token.is_emoticon() {
                token
            } else {
                let stripped = Self::apply(&token.text);
                if stripped.len() == token.text.len() {
                    token
                } else {
                    token.with_text(stripped)
                }
            }
        }))
    }

    fn name(&self) -> &'static str {
        "trailing_punctuation"
    }
}
