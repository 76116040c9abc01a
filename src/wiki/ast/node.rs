//! Document node definitions for the infobox wiki format
//!
//! This module defines the types that represent a parsed infobox document.
//! A document is an ordered sequence of entries; insertion order is
//! significant and duplicate keys are retained as separate entries.

use serde::Serialize;

// ============================================================================
// Document types
// ============================================================================

/// The raw result of parsing an infobox source, before the empty-value
/// filter. Every field line of the source has a corresponding entry, even
/// when its value is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// The template name following the `{{Infobox` marker, e.g.
    /// `animanga/TVAnime`. `None` when the header carries no name.
    pub subject_type: Option<String>,

    /// Entries in source order. Duplicate keys are not merged.
    pub entries: Vec<Entry>,
}

/// The filtered view of a parsed document, as exposed to callers rendering
/// an infobox field. Entries with empty values are dropped;
/// `entries: None` signals that no usable fields remain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Infobox {
    /// The template name following the `{{Infobox` marker.
    pub subject_type: Option<String>,

    /// Surviving entries in source order, or `None` when the filter removed
    /// every entry.
    pub entries: Option<Vec<Entry>>,
}

/// One parsed key plus its scalar-or-array value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

/// The value of an entry: a single scalar line or a `{ ... }` block of
/// array items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Value of a `|key=value` line. `None` when nothing (or only
    /// whitespace) followed the `=`.
    Scalar(Option<String>),

    /// Items of a `|key={ ... }` block, in source order.
    Array(Vec<ArrayItem>),
}

/// One bracketed line inside an array block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrayItem {
    /// Produced by `[value]`.
    Simple(String),

    /// Produced by `[key|value]` with a non-empty value.
    Keyed { key: String, value: String },
}

// ============================================================================
// Impls
// ============================================================================

impl Document {
    /// An empty document: no subject type, no entries.
    pub fn new() -> Self {
        Self {
            subject_type: None,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subject_type.is_none() && self.entries.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Infobox {
    /// Look up the first entry with the given key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .as_deref()
            .and_then(|entries| entries.iter().find(|e| e.key == key))
            .map(|e| &e.value)
    }

    /// Surviving entries, empty when the filter removed everything.
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_deref().unwrap_or(&[])
    }
}

impl Entry {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl Value {
    /// Whether this value is dropped by the empty-value filter:
    /// an absent scalar or an array with no items.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Scalar(v) => v.as_deref().map_or(true, str::is_empty),
            Value::Array(items) => items.is_empty(),
        }
    }

    /// The scalar text, if this value is a non-empty scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(v) => v.as_deref(),
            Value::Array(_) => None,
        }
    }

    /// The array items, if this value is an array.
    pub fn as_array(&self) -> Option<&[ArrayItem]> {
        match self {
            Value::Scalar(_) => None,
            Value::Array(items) => Some(items),
        }
    }
}
