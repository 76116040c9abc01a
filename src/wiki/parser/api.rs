//! Public parsing API
//!
//! The wrapper callers go through when rendering an infobox field: the raw
//! parse plus the empty-value filter. Legacy rows contain fields that were
//! saved with no value; those entries survive the raw parse but carry no
//! information, so the public view drops them.

use crate::wiki::ast::{Document, Entry, Infobox, SyntaxError};
use crate::wiki::parser::parser::parse_document;

/// Parse infobox source into the filtered document callers consume.
pub fn parse(source: &str) -> Result<Infobox, SyntaxError> {
    let document = parse_document(source)?;
    Ok(filter_empty(document))
}

/// Drop entries whose value is empty, preserving the relative order of the
/// survivors. An emptied list becomes `None`, signaling "no usable fields".
pub fn filter_empty(document: Document) -> Infobox {
    let entries: Vec<Entry> = document
        .entries
        .into_iter()
        .filter(|entry| !entry.value.is_empty())
        .collect();
    Infobox {
        subject_type: document.subject_type,
        entries: (!entries.is_empty()).then_some(entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::ast::Value;

    #[test]
    fn test_filter_drops_empty_values_and_keeps_order() {
        let infobox = parse("{{Infobox\n|a= 1\n|b=\n|c= 3\n}}").unwrap();
        let entries = infobox.entries();
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn test_filter_drops_empty_arrays() {
        let infobox = parse("{{Infobox\n|平台={\n}\n}}").unwrap();
        assert_eq!(infobox.entries, None);
    }

    #[test]
    fn test_all_filtered_becomes_none() {
        let infobox = parse("{{Infobox T\n|a=\n}}").unwrap();
        assert_eq!(infobox.subject_type.as_deref(), Some("T"));
        assert_eq!(infobox.entries, None);
        assert!(infobox.entries().is_empty());
    }

    #[test]
    fn test_empty_source_parses_to_bare_infobox() {
        let infobox = parse("").unwrap();
        assert_eq!(infobox.subject_type, None);
        assert_eq!(infobox.entries, None);
    }

    #[test]
    fn test_surviving_scalar_is_reachable_by_key() {
        let infobox = parse("{{Infobox\n|话数= 25\n}}").unwrap();
        assert_eq!(
            infobox.get("话数").and_then(Value::as_scalar),
            Some("25")
        );
    }
}
