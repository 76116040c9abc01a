//! Parser module for the infobox wiki format
//!
//! This module contains the state-machine parser for infobox documents and
//! the public wrapper that applies the empty-value filter. The parser never
//! recovers: the first grammar violation aborts with a [`SyntaxError`] and
//! no partial document is returned.

pub mod api;
#[allow(clippy::module_inception)]
pub mod parser;

// Re-export AST types from the ast module
pub use crate::wiki::ast::{ArrayItem, Document, Entry, Infobox, SyntaxError, Value};

pub use api::{filter_empty, parse};
pub use parser::parse_document;
