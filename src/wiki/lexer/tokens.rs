//! Line token definitions for the infobox wiki format
//!
//! A line token represents one stripped source line together with its
//! classification and 1-based position. The parser consumes these in order;
//! the raw stripped text stays available for error messages and for
//! destructuring field lines.

use serde::Serialize;

/// One logical line of a normalized infobox source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// 1-based position in the normalized source. The `{{Infobox` header is
    /// line 1.
    pub number: usize,

    /// The line content with surrounding whitespace stripped.
    pub text: String,

    /// The classification of this line.
    pub kind: LineKind,
}

/// The classification of a line, by shape alone. Context (whether an array
/// block is open) is applied by the parser, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// Empty or whitespace-only line.
    Blank,

    /// Field declaration: starts with `|`.
    Field,

    /// A lone `{`, opening an array block for the preceding field.
    ArrayOpen,

    /// A lone `}`, closing the current array block.
    ArrayClose,

    /// An array item wrapped in `[` ... `]`.
    Item,

    /// Any other non-blank content.
    Text,
}

impl Line {
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }
}
