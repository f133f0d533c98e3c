//! Lowercase filter implementation.
//!
//! Case folding is ASCII-only: bytes outside `A-Z` are left as they are.
//!
//! # Examples
//!
//! ```
//! use lexiscore::analysis::token_filter::Filter;
//! use lexiscore::analysis::token_filter::lowercase::LowercaseFilter;
//! use lexiscore::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("The", 0), Token::new("QUICK", 1), Token::new("ÉTÉ", 2)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result[0].text, "the");
//! assert_eq!(result[1].text, "quick");
//! assert_eq!(result[2].text, "ÉtÉ");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that converts word tokens to ASCII lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }

    /// Lowercase a single piece of text.
    pub fn apply(text: &str) -> String {
        text.to_ascii_lowercase()
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|token| {
            if token.is_emoticon() {
                token
            } else {
                token.with_text(Self::apply(&token.text))
            }
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
