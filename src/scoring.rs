//! Sentiment scoring.
//!
//! ```text
//! line → Tokenizer → tokens → WordScorer (per token) → SentenceScorer (mean) → score
//! ```
//!
//! - [`word::WordScorer`] - Normalizes one token and looks it up
//! - [`sentence::SentenceScorer`] - Averages the token scores of one line
//! - [`batch::BatchScorer`] - Scores many lines, optionally in parallel, in input order
//! - [`config::ScoringConfig`] - Settings shared by the scorers

pub mod batch;
pub mod config;
pub mod sentence;
pub mod word;

pub use batch::{BatchScorer, SentenceScore};
pub use config::ScoringConfig;
pub use sentence::{SentenceScorer, score_sentence};
pub use word::WordScorer;
