//! The infobox wiki format
//!
//! This module contains the full pipeline for the infobox wiki format:
//! line lexing, state-machine parsing, and the file processing API.
//!
//! A document looks like:
//!
//! ```text
//! {{Infobox animanga/TVAnime
//! |中文名= Code Geass 反叛的鲁路修R2
//! |话数= 25
//! |平台={
//! [PSP]
//! [1|PC]
//! }
//! }}
//! ```
//!
//! [`parse`] is the public wrapper used by callers rendering a record's
//! infobox field: it drops entries with empty values and signals
//! "no usable fields" with `entries: None`. Malformed markup surfaces as a
//! [`SyntaxError`]; callers are expected to degrade per-record rather than
//! fail a whole batch.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod processor;

pub use ast::{ArrayItem, Document, Entry, Infobox, SyntaxError, Value};
pub use parser::parse_document;

/// Parse infobox wiki markup into its filtered document form.
///
/// This is the primary entry point for consumers: the raw parse plus the
/// empty-value filter. Use [`parser::parse_document`] to keep empty entries.
pub fn parse(source: &str) -> Result<Infobox, SyntaxError> {
    parser::parse(source)
}
