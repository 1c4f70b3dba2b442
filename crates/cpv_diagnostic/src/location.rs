//! Where a diagnostic came from: a point in the input, or a line of the
//! validator that raised it.

use std::fmt;

/// A point in the scanned input.
///
/// `offset` counts bytes from the start of the stream; `line` and `column`
/// are 1-based and count bytes, not characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub offset: u64,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first byte of a stream.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Position after consuming `byte` from `self`.
    #[must_use]
    pub fn advance(self, byte: u8) -> Position {
        if byte == b'\n' {
            Position {
                offset: self.offset + 1,
                line: self.line.saturating_add(1),
                column: 1,
            }
        } else {
            Position {
                offset: self.offset + 1,
                line: self.line,
                column: self.column.saturating_add(1),
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Source location of an assertion in validator code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.file, self.line)
    }
}

/// Optional provenance attached to a diagnostic.
///
/// Displays as ` (at line L, column C)` when an input position is known and
/// as nothing otherwise, so it can be appended directly to a message.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Location {
    pub position: Option<Position>,
    pub call_site: Option<CallSite>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, " (at {position})"),
            None => Ok(()),
        }
    }
}
