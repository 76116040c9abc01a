//! # infobox
//!
//! A parser for the infobox wiki format: the `{{Infobox ...}}` template
//! markup used to store structured facts (release dates, staff, aliases)
//! inside a single text column.
//!
//! The main entry point is [`wiki::parse`], which turns raw markup into a
//! filtered [`wiki::Infobox`] document or a [`wiki::SyntaxError`] carrying a
//! 1-based source line number. The unfiltered parse is available as
//! [`wiki::parser::parse_document`].

pub mod wiki;
