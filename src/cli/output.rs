//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenType;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::scoring::batch::SentenceScore;

/// Header line of the human-readable score report.
const REPORT_HEADER: &str = "string\t\t\t\t\t\t\t\tsample\tscore";

/// Width of the report separator line.
const REPORT_RULE_WIDTH: usize = 77;

/// Minimum width, in bytes, of the sentence column.
const REPORT_TEXT_WIDTH: usize = 40;

/// One token as shown by the `tokenize` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenReport {
    pub position: usize,
    pub text: String,
    pub kind: TokenType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

/// Write sentence scores in the requested format.
pub fn write_scores<W: Write>(
    out: &mut W,
    results: &[SentenceScore],
    format: &OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_scores_human(out, results),
        OutputFormat::Json => write_json(out, &results, pretty),
        OutputFormat::Csv => write_scores_csv(out, results),
    }
}

/// Write tokens in the requested format.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[TokenReport],
    format: &OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for token in tokens {
                let kind = match token.kind {
                    TokenType::Word => "word",
                    TokenType::Emoticon => "emoticon",
                };
                match &token.normalized {
                    Some(key) => writeln!(out, "{}\t{}\t{}\t{}", token.position, kind, token.text, key)?,
                    None => writeln!(out, "{}\t{}\t{}", token.position, kind, token.text)?,
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, &tokens, pretty),
        OutputFormat::Csv => {
            writeln!(out, "position,kind,text,normalized")?;
            for token in tokens {
                let kind = match token.kind {
                    TokenType::Word => "word",
                    TokenType::Emoticon => "emoticon",
                };
                writeln!(
                    out,
                    "{},{},{},{}",
                    token.position,
                    kind,
                    format_csv_value(&token.text),
                    token.normalized.as_deref().map(format_csv_value).unwrap_or_default()
                )?;
            }
            Ok(())
        }
    }
}

/// Human-readable report: one left-aligned sentence and its score per line.
fn write_scores_human<W: Write>(out: &mut W, results: &[SentenceScore]) -> Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    writeln!(out, "{}", "-".repeat(REPORT_RULE_WIDTH))?;
    for result in results {
        let pad = REPORT_TEXT_WIDTH.saturating_sub(result.text.len());
        writeln!(out, "{}{:pad$}\t\t\t\t{:.2}", result.text, "", result.score)?;
    }
    Ok(())
}

/// CSV report with a header row.
fn write_scores_csv<W: Write>(out: &mut W, results: &[SentenceScore]) -> Result<()> {
    writeln!(out, "line,text,score,tokens")?;
    for result in results {
        writeln!(
            out,
            "{},{},{},{}",
            result.line,
            format_csv_value(&result.text),
            result.score,
            result.tokens
        )?;
    }
    Ok(())
}

/// Output in JSON format.
fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
