//! Token filter implementations for token transformation.
//!
//! Filters turn raw word tokens into lexicon keys. They leave
//! [`TokenType::Emoticon`](crate::analysis::token::TokenType::Emoticon)
//! tokens untouched so recognized symbols are looked up verbatim.
//!
//! # Available Filters
//!
//! - [`trailing_punctuation::TrailingPunctuationFilter`] - Strips trailing ASCII punctuation
//! - [`lowercase::LowercaseFilter`] - Converts tokens to ASCII lowercase
//!
//! # Examples
//!
//! ```
//! use lexiscore::analysis::token_filter::Filter;
//! use lexiscore::analysis::token_filter::lowercase::LowercaseFilter;
//! use lexiscore::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! The word scorer chains the filters in a fixed order:
//!
//! ```text
//! Tokenizer → TrailingPunctuation → Lowercase → Lexicon lookup
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod trailing_punctuation;

pub use lowercase::LowercaseFilter;
pub use trailing_punctuation::TrailingPunctuationFilter;
