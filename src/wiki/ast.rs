//! AST definitions for the infobox wiki format
//!
//! This module provides the document types produced by the parser along with
//! the syntax error type surfaced on malformed markup.
//!
//! ## Modules
//!
//! - `node` - Document, entry and array item definitions
//! - `error` - The syntax error type

pub mod error;
pub mod node;

// Re-export commonly used types at module root
pub use error::SyntaxError;
pub use node::{ArrayItem, Document, Entry, Infobox, Value};
