//! Token types and utilities for text analysis.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with its text, order index and type
//! - [`TokenType`] - Whether the token is a whitespace run or an emoticon candidate
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use lexiscore::analysis::token::{Token, TokenType};
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert_eq!(token.token_type, TokenType::Word);
//!
//! let smiley = Token::emoticon(":)", 1);
//! assert!(smiley.is_emoticon());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Tokens keep no byte offsets. `position` is the order in which the
/// tokenizer emitted the token, which is all the scorer needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Emission order within the line (0-based)
    pub position: usize,

    /// How the tokenizer produced this token
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// A maximal run of non-whitespace characters
    Word,
    /// An emoticon recognized at the start of a run
    Emoticon,
}

impl Token {
    /// Create a new word token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            token_type: TokenType::Word,
        }
    }

    /// Create a new emoticon token with the given text and position.
    pub fn emoticon<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            token_type: TokenType::Emoticon,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this token was emitted as an emoticon.
    pub fn is_emoticon(&self) -> bool {
        self.token_type == TokenType::Emoticon
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.token_type, TokenType::Word);
        assert!(!token.is_emoticon());
        assert_eq!(token.len(), 5);
    }

    #[test]
    fn test_emoticon_token() {
        let token = Token::emoticon(":D", 3);
        assert_eq!(token.position, 3);
        assert!(token.is_emoticon());
    }

    #[test]
    fn test_with_text_keeps_position_and_type() {
        let token = Token::emoticon(":P", 2).with_text(":p");
        assert_eq!(token.text, ":p");
        assert_eq!(token.position, 2);
        assert!(token.is_emoticon());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
