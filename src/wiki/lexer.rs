//! Lexer module for the infobox wiki format
//!
//! The infobox grammar is strictly line-oriented, so lexing here means
//! normalizing the source and classifying whole lines rather than producing
//! a character-level token stream. Each line keeps its 1-based number so the
//! parser can report accurate positions without re-scanning.

pub mod lexer_impl;
pub mod line_classification;
pub mod tokens;

pub use lexer_impl::{lex, normalize};
pub use line_classification::classify_line;
pub use tokens::{Line, LineKind};
