//! Whitespace tokenizer with emoticon detection.
//!
//! Splits a line into maximal runs of non-whitespace characters. Whenever a
//! punctuation character starts a run (it is the first character of the line
//! or follows whitespace), the text at that position is additionally tested
//! against [`EMOTICONS`]. A match is emitted as an extra
//! [`TokenType::Emoticon`](crate::analysis::token::TokenType::Emoticon) token
//! ahead of the run that contains it, because the run itself is only emitted
//! once it ends.
//!
//! With [`EmoticonMatch::Literal`] (the default) only the single punctuation
//! character is tested. Every member of [`EMOTICONS`] is at least two
//! characters long, so this mode never produces an emoticon token and the
//! output is a plain whitespace split. [`EmoticonMatch::Symbol`] tests the
//! longest emoticon prefix instead.
//!
//! # Examples
//!
//! ```
//! use lexiscore::analysis::tokenizer::Tokenizer;
//! use lexiscore::analysis::tokenizer::emoticon::{EmoticonMatch, EmoticonTokenizer};
//!
//! let literal = EmoticonTokenizer::new();
//! let texts: Vec<_> = literal.tokenize("happy :)").map(|t| t.text).collect();
//! assert_eq!(texts, vec!["happy", ":)"]);
//!
//! let symbol = EmoticonTokenizer::with_match(EmoticonMatch::Symbol);
//! let texts: Vec<_> = symbol.tokenize("happy :)").map(|t| t.text).collect();
//! assert_eq!(texts, vec!["happy", ":)", ":)"]);
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// The closed set of recognized emoticons.
pub const EMOTICONS: &[&str] = &[
    ":)", ":(", ";)", ":D", ":P", ":-)", ":-(", ";-)", ":-D", ":-P",
];

/// Check whether `s` is exactly one of [`EMOTICONS`].
pub fn is_emoticon(s: &str) -> bool {
    EMOTICONS.contains(&s)
}

/// Whitespace as classified by C `isspace` in the "C" locale.
///
/// Unlike [`char::is_ascii_whitespace`] this includes vertical tab.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// How the text at the start of a run is tested against [`EMOTICONS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmoticonMatch {
    /// Test only the single punctuation character.
    #[default]
    Literal,
    /// Test the longest emoticon that prefixes the remaining text.
    Symbol,
}

/// A tokenizer that splits on whitespace and flags emoticons at run starts.
#[derive(Clone, Debug, Default)]
pub struct EmoticonTokenizer {
    emoticon_match: EmoticonMatch,
}

impl EmoticonTokenizer {
    /// Create a new tokenizer using [`EmoticonMatch::Literal`].
    pub fn new() -> Self {
        EmoticonTokenizer::default()
    }

    /// Create a new tokenizer with the given emoticon matching mode.
    pub fn with_match(emoticon_match: EmoticonMatch) -> Self {
        EmoticonTokenizer { emoticon_match }
    }

    /// Get the emoticon matching mode.
    pub fn emoticon_match(&self) -> EmoticonMatch {
        self.emoticon_match
    }

    /// Tokenize into an owned vector, in emission order.
    pub fn tokenize_to_vec(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut run_start: Option<usize> = None;
        // The first character of the line counts as preceded by whitespace.
        let mut after_space = true;

        for (i, c) in text.char_indices() {
            if is_space(c) {
                if let Some(start) = run_start.take() {
                    let position = tokens.len();
                    tokens.push(Token::new(&text[start..i], position));
                }
            } else {
                if run_start.is_none() {
                    run_start = Some(i);
                }
                if after_space
                    && c.is_ascii_punctuation()
                    && let Some(symbol) = self.match_at(&text[i..])
                {
                    let position = tokens.len();
                    tokens.push(Token::emoticon(symbol, position));
                }
            }
            after_space = is_space(c);
        }

        if let Some(start) = run_start {
            let position = tokens.len();
            tokens.push(Token::new(&text[start..], position));
        }

        tokens
    }

    /// Find the emoticon candidate at the beginning of `rest`.
    ///
    /// `rest` always starts with an ASCII punctuation character.
    fn match_at<'a>(&self, rest: &'a str) -> Option<&'a str> {
        match self.emoticon_match {
            EmoticonMatch::Literal => {
                let candidate = &rest[..1];
                is_emoticon(candidate).then_some(candidate)
            }
            EmoticonMatch::Symbol => EMOTICONS
                .iter()
                .filter(|symbol| rest.starts_with(**symbol))
                .max_by_key(|symbol| symbol.len())
                .map(|symbol| &rest[..symbol.len()]),
        }
    }
}

impl Tokenizer for EmoticonTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        Box::new(self.tokenize_to_vec(text).into_iter())
    }

    fn name(&self) -> &'static str {
        "emoticon"
    }
}
