//! # Lexiscore
//!
//! Lexicon-based sentiment scoring for lines of text.
//!
//! ## Features
//!
//! - Whitespace tokenization with emoticon detection at run starts
//! - Trailing-punctuation stripping and ASCII case folding
//! - First-match-wins word lookup in a `word score` lexicon
//! - Per-line mean scoring, sequential or parallel with stable output order
//!
//! ## Example
//!
//! ```
//! use lexiscore::prelude::*;
//!
//! let lexicon = build_lexicon(vec![
//!     ("great".to_string(), 3.1),
//!     ("movie".to_string(), 0.0),
//! ]);
//!
//! assert_eq!(score_sentence("Great movie!", &lexicon), 1.55);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod scoring;
pub mod util;

pub mod prelude {
    pub use crate::analysis::token::{Token, TokenType};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::emoticon::{EmoticonMatch, EmoticonTokenizer};
    pub use crate::error::{LexiscoreError, Result};
    pub use crate::lexicon::{Lexicon, LexiconEntry, LexiconLoader, build_lexicon};
    pub use crate::scoring::{
        BatchScorer, ScoringConfig, SentenceScore, SentenceScorer, WordScorer, score_sentence,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
