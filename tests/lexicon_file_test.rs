//! Integration tests for loading lexicon files and scoring sentence files.

use std::io::Write;

use lexiscore::cli::args::OutputFormat;
use lexiscore::cli::output::write_scores;
use lexiscore::prelude::*;
use tempfile::{NamedTempFile, TempDir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_lexicon_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        &temp_dir,
        "lexicon.txt",
        "good 1.9\t[0.9, 1.6]\nbad -2.5 extra\n\nfunny 1.9\nbroken\n",
    );

    let lexicon = LexiconLoader::new().load_from_file(&path)?;

    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.get("good"), Some(1.9));
    assert_eq!(lexicon.get("bad"), Some(-2.5));
    assert_eq!(lexicon.get("funny"), Some(1.9));
    Ok(())
}

#[test]
fn test_strict_loading_fails_on_malformed_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "good 1.0").unwrap();
    writeln!(file, "nice one").unwrap();

    let err = LexiconLoader::new()
        .strict(true)
        .load_from_file(file.path())
        .unwrap_err();

    assert!(matches!(err, LexiscoreError::Lexicon(_)));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_end_to_end_report() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_path = write_file(&temp_dir, "lexicon.txt", "love 3.2\nhate -2.7\nrain -0.3\n");

    let lexicon = LexiconLoader::new().load_from_file(&lexicon_path)?;
    let lines = vec![
        "I LOVE it!".to_string(),
        "".to_string(),
        "hate, hate rain".to_string(),
    ];

    let scorer = BatchScorer::new(ScoringConfig::default())?;
    let results = scorer.score_lines(&lines, &lexicon);

    let mut buf = Vec::new();
    write_scores(&mut buf, &results, &OutputFormat::Human, false)?;
    let output = String::from_utf8(buf).unwrap();
    let report: Vec<&str> = output.lines().collect();

    assert_eq!(report.len(), 5);
    assert_eq!(report[2], format!("{:<40}\t\t\t\t1.07", "I LOVE it!"));
    assert_eq!(report[3], format!("{:<40}\t\t\t\t0.00", ""));
    assert_eq!(report[4], format!("{:<40}\t\t\t\t-1.90", "hate, hate rain"));
    Ok(())
}
