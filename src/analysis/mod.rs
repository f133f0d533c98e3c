//! Text analysis module for Lexiscore.
//!
//! This module turns a raw line into the tokens that the scorer looks up:
//! a [`tokenizer`] splits the line, and [`token_filter`]s normalize each
//! token into a lexicon key.

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
