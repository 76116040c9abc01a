//! State-machine parser for the infobox wiki format
//!
//! Walks the classified lines from the lexer with an explicit two-state
//! machine: `Scanning` between entries, `InArray` while accumulating the
//! items of a `{ ... }` block. The single legal way out of `InArray` is a
//! lone `}` line; a new field declaration in that state is the
//! unclosed-array error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::wiki::ast::{ArrayItem, Document, Entry, SyntaxError, Value};
use crate::wiki::lexer::{lex, LineKind};

/// The header marker every non-empty document must start with.
const MARKER: &str = "{{Infobox";

/// Field lines split on the first `=`: `|key=value`.
static FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|([^=]*)=(.*)$").expect("field pattern is valid"));

/// Parser state threaded through the body scan.
#[derive(Debug)]
enum State {
    /// Between entries. `pending` holds the key of the most recent scalar
    /// entry, which a bare `{` line may re-open as an array.
    Scanning { pending: Option<String> },

    /// Inside a `{ ... }` block, accumulating items for `key`.
    InArray { key: String, items: Vec<ArrayItem> },
}

/// Parse infobox source into its raw, unfiltered document form.
///
/// A source that is empty after normalization yields an empty document.
/// The header line and the final `}}` footer line take no part in the body
/// scan; body line numbers in errors are 1-based positions in the
/// normalized source.
pub fn parse_document(source: &str) -> Result<Document, SyntaxError> {
    let lines = lex(source);
    let Some((header, rest)) = lines.split_first() else {
        return Ok(Document::new());
    };

    if !header.text.starts_with(MARKER) {
        return Err(SyntaxError::MissingMarker);
    }
    let subject = header.text[MARKER.len()..].trim();
    let subject_type = (!subject.is_empty()).then(|| subject.to_string());

    let body = rest.split_last().map(|(_, init)| init).unwrap_or_default();

    let mut entries: Vec<Entry> = Vec::new();
    let mut state = State::Scanning { pending: None };
    // Last non-blank line seen, referenced by the unclosed-array error.
    let mut last_content_line = header.number;

    for line in body {
        match line.kind {
            LineKind::Blank => continue,

            LineKind::Field => {
                if matches!(state, State::InArray { .. }) {
                    return Err(SyntaxError::UnclosedArray {
                        line: last_content_line,
                    });
                }
                let captures =
                    FIELD
                        .captures(&line.text)
                        .ok_or_else(|| SyntaxError::MissingEquals {
                            line: line.number,
                            text: line.text.clone(),
                        })?;
                let key = captures[1].to_string();
                let value = captures[2].trim();
                if let Some(tail) = value.strip_prefix('{') {
                    if !tail.is_empty() {
                        return Err(SyntaxError::TrailingArrayOpen { line: line.number });
                    }
                    state = State::InArray {
                        key,
                        items: Vec::new(),
                    };
                } else {
                    let scalar = (!value.is_empty()).then(|| value.to_string());
                    entries.push(Entry::new(key.clone(), Value::Scalar(scalar)));
                    state = State::Scanning { pending: Some(key) };
                }
            }

            LineKind::ArrayOpen => {
                state = match state {
                    State::Scanning { pending: None } => {
                        return Err(SyntaxError::UnexpectedBrace { line: line.number });
                    }
                    State::Scanning { pending: Some(key) } => {
                        // The scalar recorded for this key was a placeholder;
                        // the array replaces it.
                        if entries.last().map_or(false, |e| e.key == key) {
                            entries.pop();
                        }
                        State::InArray {
                            key,
                            items: Vec::new(),
                        }
                    }
                    // A repeated `{` restarts the current block.
                    State::InArray { key, .. } => State::InArray {
                        key,
                        items: Vec::new(),
                    },
                };
            }

            LineKind::ArrayClose => {
                match state {
                    State::InArray { key, items } => {
                        entries.push(Entry::new(key, Value::Array(items)));
                    }
                    // A `}` with no open block still records the pending key
                    // with an empty array.
                    State::Scanning { pending: Some(key) } => {
                        entries.push(Entry::new(key, Value::Array(Vec::new())));
                    }
                    State::Scanning { pending: None } => {}
                }
                state = State::Scanning { pending: None };
            }

            LineKind::Item => match &mut state {
                State::InArray { items, .. } => items.push(parse_item(&line.text)),
                State::Scanning { .. } => {
                    return Err(SyntaxError::MissingKey { line: line.number });
                }
            },

            LineKind::Text => {
                return Err(match state {
                    State::InArray { .. } => SyntaxError::UnwrappedItem { line: line.number },
                    State::Scanning { .. } => SyntaxError::MissingKey { line: line.number },
                });
            }
        }
        last_content_line = line.number;
    }

    Ok(Document {
        subject_type,
        entries,
    })
}

/// Parse the interior of a bracketed item line.
///
/// `[value]` yields a simple item, `[key|value]` a keyed one. Legacy quirk:
/// an empty value after `|` keeps only the key fragment as a simple item.
fn parse_item(text: &str) -> ArrayItem {
    let inner = &text[1..text.len() - 1];
    match inner.split_once('|') {
        Some((key, value)) if !value.is_empty() => ArrayItem::Keyed {
            key: key.to_string(),
            value: value.to_string(),
        },
        Some((key, _)) => ArrayItem::Simple(key.to_string()),
        None => ArrayItem::Simple(inner.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_source() {
        let doc = parse_document("").expect("empty source parses");
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn test_parse_header_subject_type() {
        let doc = parse_document("{{Infobox animanga/TVAnime\n}}").unwrap();
        assert_eq!(doc.subject_type.as_deref(), Some("animanga/TVAnime"));
        assert!(doc.entries.is_empty());

        let doc = parse_document("{{Infobox\n}}").unwrap();
        assert_eq!(doc.subject_type, None);
    }

    #[test]
    fn test_parse_rejects_missing_marker() {
        assert_eq!(
            parse_document("{{Box\n}}"),
            Err(SyntaxError::MissingMarker)
        );
    }

    #[test]
    fn test_parse_scalar_fields_keep_order_and_duplicates() {
        let doc = parse_document("{{Infobox\n|b= 2\n|a= 1\n|b= 3\n}}").unwrap();
        let keys: Vec<&str> = doc.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["b", "a", "b"]);
        assert_eq!(doc.entries[0].value, Value::Scalar(Some("2".to_string())));
        assert_eq!(doc.entries[2].value, Value::Scalar(Some("3".to_string())));
    }

    #[test]
    fn test_parse_empty_scalar_is_none() {
        let doc = parse_document("{{Infobox\n|其他=\n|备注=   \n}}").unwrap();
        assert_eq!(doc.entries[0].value, Value::Scalar(None));
        assert_eq!(doc.entries[1].value, Value::Scalar(None));
    }

    #[test]
    fn test_parse_item_forms() {
        assert_eq!(parse_item("[PSP]"), ArrayItem::Simple("PSP".to_string()));
        assert_eq!(
            parse_item("[1|PC]"),
            ArrayItem::Keyed {
                key: "1".to_string(),
                value: "PC".to_string()
            }
        );
        // Legacy quirk: empty value after '|' degrades to a simple item.
        assert_eq!(parse_item("[1|]"), ArrayItem::Simple("1".to_string()));
        assert_eq!(parse_item("[]"), ArrayItem::Simple(String::new()));
    }

    #[test]
    fn test_parse_keeps_key_verbatim() {
        let doc = parse_document("{{Infobox\n| 中文名 = x\n}}").unwrap();
        assert_eq!(doc.entries[0].key, " 中文名 ");
    }
}
