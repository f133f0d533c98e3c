//! Integration tests running the `lexiscore` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn run_score(lexicon: &Path, sentences: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexiscore"))
        .arg("score")
        .arg(lexicon)
        .arg(sentences)
        .output()
        .unwrap()
}

#[test]
fn test_missing_sentences_file_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = write_file(&temp_dir, "lexicon.txt", b"good 1.0\n");

    let output = run_score(&lexicon, &temp_dir.path().join("missing.txt"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sentences file"));
}

#[test]
fn test_missing_lexicon_file_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let sentences = write_file(&temp_dir, "sentences.txt", b"good\n");

    let output = run_score(&temp_dir.path().join("missing.txt"), &sentences);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lexicon file"));
}

#[test]
fn test_latin1_sentence_scores_every_line() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = write_file(&temp_dir, "lexicon.txt", b"good 1.0\n");
    let sentences = write_file(&temp_dir, "sentences.txt", b"good day\ncaf\xe9 good\ngood\n");

    let output = run_score(&lexicon, &sentences);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("good day"));
    assert!(lines[2].ends_with("\t0.50"));
    assert!(lines[3].starts_with("caf\u{FFFD} good"));
    assert!(lines[3].ends_with("\t0.50"));
    assert!(lines[4].ends_with("\t1.00"));
}
