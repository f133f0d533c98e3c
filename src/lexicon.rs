//! Word-score lexicon.
//!
//! A [`Lexicon`] maps a word to a sentiment score. It is built once, before
//! any scoring starts, and is read-only afterwards so it can be shared by
//! reference across threads.
//!
//! Entries are kept in the order they were supplied and duplicates are not
//! removed. Lookup behaves like a linear scan that stops at the first match:
//! when a word occurs more than once the earliest score wins.
//!
//! # Examples
//!
//! ```
//! use lexiscore::lexicon::build_lexicon;
//!
//! let lexicon = build_lexicon(vec![
//!     ("good".to_string(), 1.5),
//!     ("bad".to_string(), -1.0),
//!     ("good".to_string(), 9.0),
//! ]);
//!
//! assert_eq!(lexicon.len(), 3);
//! assert_eq!(lexicon.get("good"), Some(1.5));
//! assert_eq!(lexicon.score("missing"), 0.0);
//! ```

pub mod loader;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use loader::LexiconLoader;

/// A single word and its score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// The word, as supplied by the lexicon source
    pub word: String,

    /// Sentiment score of the word
    pub score: f64,
}

impl LexiconEntry {
    /// Create a new entry.
    pub fn new<S: Into<String>>(word: S, score: f64) -> Self {
        LexiconEntry {
            word: word.into(),
            score,
        }
    }
}

/// An immutable word to score table.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// All entries in source order, duplicates included
    entries: Vec<LexiconEntry>,
    /// First-occurrence index: word -> score
    index: AHashMap<String, f64>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Build a lexicon from word/score pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let entries: Vec<LexiconEntry> = entries
            .into_iter()
            .map(|(word, score)| LexiconEntry { word, score })
            .collect();
        let mut index = AHashMap::with_capacity(entries.len());
        for entry in &entries {
            index.entry(entry.word.clone()).or_insert(entry.score);
        }
        Lexicon { entries, index }
    }

    /// Build a lexicon from word/score pairs, reporting allocation failure.
    ///
    /// Storage is reserved with `try_reserve`, so running out of memory is
    /// returned as [`LexiscoreError::ResourceExhausted`](crate::error::LexiscoreError::ResourceExhausted)
    /// instead of aborting.
    pub fn try_from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let iter = entries.into_iter();
        let mut lexicon = Lexicon::new();
        lexicon.entries.try_reserve(iter.size_hint().0)?;

        for (word, score) in iter {
            lexicon.entries.try_reserve(1)?;
            lexicon.index.try_reserve(1)?;
            lexicon.index.entry(word.clone()).or_insert(score);
            lexicon.entries.push(LexiconEntry { word, score });
        }

        Ok(lexicon)
    }

    /// Look up the score of `word` exactly as given.
    ///
    /// Returns `None` when the word is not in the lexicon.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.index.get(word).copied()
    }

    /// Look up the score of `word`, treating a miss as neutral `0.0`.
    pub fn score(&self, word: &str) -> f64 {
        self.get(word).unwrap_or(0.0)
    }

    /// Check if `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct words.
    pub fn unique_words(&self) -> usize {
        self.index.len()
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }
}

impl FromIterator<(String, f64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Lexicon::from_entries(iter)
    }
}

/// Build a lexicon from word/score pairs already parsed from a source.
pub fn build_lexicon<I>(entries: I) -> Lexicon
where
    I: IntoIterator<Item = (String, f64)>,
{
    Lexicon::from_entries(entries)
}
