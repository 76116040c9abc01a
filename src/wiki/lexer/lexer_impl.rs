//! Lexer implementation for the infobox wiki format
//!
//! Turns raw source text into numbered, classified lines. Sources come from
//! a database text column and may carry Windows line endings and surrounding
//! whitespace; both are normalized away before splitting.

use crate::wiki::lexer::line_classification::classify_line;
use crate::wiki::lexer::tokens::Line;

/// Normalize raw source: trim surrounding whitespace and convert CRLF to LF.
pub fn normalize(source: &str) -> String {
    source.trim().replace("\r\n", "\n")
}

/// Split a source into numbered, classified lines.
///
/// Returns an empty vector for a source that is empty after normalization.
/// Line numbers are 1-based; the `{{Infobox` header is line 1.
pub fn lex(source: &str) -> Vec<Line> {
    let normalized = normalize(source);
    if normalized.is_empty() {
        return Vec::new();
    }

    normalized
        .split('\n')
        .enumerate()
        .map(|(index, raw)| {
            let text = raw.trim().to_string();
            Line {
                number: index + 1,
                kind: classify_line(&text),
                text,
            }
        })
        .collect()
}
