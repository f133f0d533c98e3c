//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the scoring pipeline, responsible for
//! splitting a line of input text into the tokens that are looked up in the
//! lexicon.
//!
//! # Available Tokenizers
//!
//! - [`emoticon::EmoticonTokenizer`] - Splits on whitespace and tests run
//!   starts against the emoticon set
//!
//! # Examples
//!
//! ```
//! use lexiscore::analysis::tokenizer::Tokenizer;
//! use lexiscore::analysis::tokenizer::emoticon::EmoticonTokenizer;
//!
//! let tokenizer = EmoticonTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can be shared by the
/// parallel batch scorer.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lexiscore::analysis::token::{Token, TokenStream};
/// use lexiscore::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> TokenStream {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Box::new(tokens.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Tokenization cannot fail; an empty or all-whitespace line yields an
    /// empty stream.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod emoticon;

pub use emoticon::{EMOTICONS, EmoticonMatch, EmoticonTokenizer, is_emoticon};
