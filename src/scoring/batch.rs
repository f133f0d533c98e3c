//! Batch scoring of many lines.
//!
//! Lines are independent of each other, so they can be scored on a rayon
//! worker pool. Results always come back in input order.

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{LexiscoreError, Result};
use crate::lexicon::Lexicon;
use crate::scoring::config::ScoringConfig;
use crate::scoring::sentence::SentenceScorer;

/// The score of one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// 1-based line number in the input
    pub line: usize,

    /// The line text as read
    pub text: String,

    /// Mean token score
    pub score: f64,

    /// Number of tokens that contributed to the mean
    pub tokens: usize,
}

/// Scores a sequence of lines against one lexicon.
#[derive(Debug)]
pub struct BatchScorer {
    config: ScoringConfig,
    scorer: SentenceScorer,
    thread_pool: Option<ThreadPool>,
}

impl BatchScorer {
    /// Create a batch scorer.
    ///
    /// A worker pool is only built when `config.parallel` is set.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.parallel {
            let thread_pool_size = config.thread_pool_size();
            let pool = ThreadPoolBuilder::new()
                .num_threads(thread_pool_size)
                .thread_name(|i| format!("lexiscore-score-{i}"))
                .build()
                .map_err(|e| LexiscoreError::other(format!("Failed to create thread pool: {e}")))?;
            info!("Scoring in parallel with {thread_pool_size} threads");
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            scorer: SentenceScorer::from_config(&config),
            config,
            thread_pool,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Get the sentence scorer.
    pub fn scorer(&self) -> &SentenceScorer {
        &self.scorer
    }

    /// Score every line, returning results in input order.
    pub fn score_lines<S>(&self, lines: &[S], lexicon: &Lexicon) -> Vec<SentenceScore>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Scoring {} lines", lines.len());

        match &self.thread_pool {
            Some(pool) => pool.install(|| {
                lines
                    .par_iter()
                    .enumerate()
                    .map(|(i, line)| self.score_one(i, line.as_ref(), lexicon))
                    .collect()
            }),
            None => lines
                .iter()
                .enumerate()
                .map(|(i, line)| self.score_one(i, line.as_ref(), lexicon))
                .collect(),
        }
    }

    fn score_one(&self, index: usize, text: &str, lexicon: &Lexicon) -> SentenceScore {
        let (score, tokens) = self.scorer.score_with_count(text, lexicon);
        SentenceScore {
            line: index + 1,
            text: text.to_string(),
            score,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::build_lexicon;

    fn lexicon() -> Lexicon {
        build_lexicon(vec![
            ("happy".to_string(), 2.0),
            ("sad".to_string(), -2.0),
            ("fine".to_string(), 0.5),
        ])
    }

    fn lines(count: usize) -> Vec<String> {
        let samples = ["happy day", "sad sad story", "", "fine, FINE!", "nothing here"];
        (0..count)
            .map(|i| format!("{} {}", samples[i % samples.len()], i))
            .collect()
    }

    #[test]
    fn test_sequential_scoring() {
        let scorer = BatchScorer::new(ScoringConfig::default()).unwrap();
        let results = scorer.score_lines(&["happy", "", "sad fine"], &lexicon());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].line, 1);
        assert_eq!(results[0].score, 2.0);
        assert_eq!(results[1].score, 0.0);
        assert_eq!(results[1].tokens, 0);
        assert_eq!(results[2].text, "sad fine");
        assert_eq!(results[2].score, -0.75);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input = lines(500);
        let lexicon = lexicon();

        let sequential = BatchScorer::new(ScoringConfig::default())
            .unwrap()
            .score_lines(&input, &lexicon);
        let parallel = BatchScorer::new(
            ScoringConfig::default()
                .with_parallel(true)
                .with_num_threads(4),
        )
        .unwrap()
        .score_lines(&input, &lexicon);

        assert_eq!(sequential, parallel);
        for (i, result) in parallel.iter().enumerate() {
            assert_eq!(result.line, i + 1);
            assert_eq!(result.text, input[i]);
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = ScoringConfig::default()
            .with_parallel(true)
            .with_num_threads(0);
        assert!(BatchScorer::new(config).is_err());
    }

    #[test]
    fn test_empty_input() {
        let scorer = BatchScorer::new(ScoringConfig::default().with_parallel(true)).unwrap();
        let results = scorer.score_lines::<String>(&[], &lexicon());
        assert!(results.is_empty());
    }
}
