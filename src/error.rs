//! Error types for the Lexiscore library.
//!
//! Scoring itself never fails: unknown words simply contribute `0.0`. Errors
//! only arise at the edges of the library, while loading a lexicon, reading
//! configuration, building a worker pool, or running the CLI.
//!
//! # Examples
//!
//! ```
//! use lexiscore::error::{LexiscoreError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiscoreError::lexicon("line 3: missing score"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// The main error type for Lexiscore operations.
#[derive(Error, Debug)]
pub enum LexiscoreError {
    /// I/O errors (opening or reading lexicon and sentence files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors (malformed `word score` lines in strict mode)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Resource exhausted (allocation failure while building a lexicon)
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexiscoreError.
pub type Result<T> = std::result::Result<T, LexiscoreError>;

impl LexiscoreError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LexiscoreError::Lexicon(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexiscoreError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiscoreError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiscoreError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

impl From<TryReserveError> for LexiscoreError {
    fn from(err: TryReserveError) -> Self {
        LexiscoreError::ResourceExhausted(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexiscoreError::lexicon("Test lexicon error");
        assert_eq!(error.to_string(), "Lexicon error: Test lexicon error");

        let error = LexiscoreError::config("Test config error");
        assert_eq!(error.to_string(), "Config error: Test config error");

        let error = LexiscoreError::invalid_argument("threads must be > 0");
        assert_eq!(
            error.to_string(),
            "Error: Invalid argument: threads must be > 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexiscore_error = LexiscoreError::from(io_error);

        match lexiscore_error {
            LexiscoreError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_try_reserve_error_conversion() {
        let mut buf: Vec<u8> = Vec::new();
        let err = buf.try_reserve(usize::MAX).unwrap_err();

        match LexiscoreError::from(err) {
            LexiscoreError::ResourceExhausted(_) => {}
            _ => panic!("Expected ResourceExhausted variant"),
        }
    }
}
