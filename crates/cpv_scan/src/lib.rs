//! Byte-level scanning of contest input files.
//!
//! Three layers, leaf first:
//!
//! - [`SourceCursor`]: single-byte read/unread over an owned or borrowed
//!   stream, with position tracking.
//! - [`Reader`]: typed token reads (bounded integers, decimal floats,
//!   delimited strings, literals) and fixed-count aggregates, in strict or
//!   lenient mode.
//! - [`Writer`]: the output mirror of the reader, producing text the reader
//!   accepts back.
//!
//! ```text
//! let mut r = Reader::open_with("input.txt", ReaderConfig::strict())?;
//! let n: u32 = r.read_integer_in(1, 100_000)?;
//! r.must_be_newline()?;
//! let a: Vec<i64> = r.read_vec(n as usize)?;
//! r.must_be_newline()?;
//! r.must_be_eof()?;
//! ```

mod config;
mod cursor;
mod number;
mod reader;
mod writer;

pub use config::{DecimalSeparator, ReaderConfig};
pub use cursor::{is_digit, is_space, SourceCursor};
pub use number::{Float, Integer, Signed, Unsigned};
pub use reader::{Readable, Reader};
pub use writer::{Writable, Writer};

pub use cpv_diagnostic::{Diagnostic, DiagnosticKind, Position, Result};
