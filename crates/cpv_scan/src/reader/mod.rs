//! Typed token reader over a [`SourceCursor`].
//!
//! Every read runs in one of two disciplines, chosen by
//! [`ReaderConfig::strict`] at call time:
//!
//! - **Strict**: the token must start exactly at the cursor. Any leading
//!   whitespace or stray byte is an `UnexpectedCharacter` error.
//! - **Lenient**: insignificant bytes are skipped first (whitespace before
//!   strings, anything but a digit or `-` before numbers), then the token is
//!   parsed strictly.
//!
//! Errors are never recovered from: the grammar is deterministic, so a
//! failed read leaves the reader in an unspecified position and the caller
//! is expected to abandon the input.
//!
//! The submodules split the token kinds:
//! - `numeric`: bounded integers and decimal floats
//! - `text`: delimited strings, literals, alternatives
//! - `aggregate`: fixed-count sequences and grids

mod aggregate;
mod numeric;
mod text;

use std::fmt::Debug;
use std::io::BufRead;
use std::path::Path;

use cpv_diagnostic::{Diagnostic, Position, Result};
use tracing::{debug, trace};

use crate::{DecimalSeparator, ReaderConfig, SourceCursor};

/// Typed reader over one input stream.
///
/// Mode setters mutate in place and return `&mut Self`, so they chain:
///
/// ```text
/// let mut r = Reader::from_bytes("007 3,5");
/// r.make_strict().with_leading_zeros().with_comma_as_decimal_separator();
/// ```
#[derive(Debug)]
pub struct Reader<'a> {
    cursor: SourceCursor<'a>,
    config: ReaderConfig,
}

impl<'a> Reader<'a> {
    /// Reader over `cursor` with the given modes.
    pub fn new(cursor: SourceCursor<'a>, config: ReaderConfig) -> Self {
        Reader { cursor, config }
    }

    /// Lenient reader over a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, ReaderConfig::default())
    }

    /// Reader over a file with the given modes.
    pub fn open_with(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self> {
        Ok(Self::new(SourceCursor::open(path)?, config))
    }

    /// Lenient reader over an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(SourceCursor::from_bytes(bytes), ReaderConfig::default())
    }

    /// Lenient reader over a stream owned by the caller.
    pub fn from_buf_read(source: &'a mut dyn BufRead) -> Self {
        Self::new(SourceCursor::borrowed(source), ReaderConfig::default())
    }

    // === Configuration ===

    pub fn config(&self) -> ReaderConfig {
        self.config
    }

    pub fn with_config(&mut self, config: ReaderConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn make_strict(&mut self) -> &mut Self {
        self.config.strict = true;
        self
    }

    pub fn make_lenient(&mut self) -> &mut Self {
        self.config.strict = false;
        self
    }

    pub fn with_leading_zeros(&mut self) -> &mut Self {
        self.config.leading_zeros = true;
        self
    }

    pub fn without_leading_zeros(&mut self) -> &mut Self {
        self.config.leading_zeros = false;
        self
    }

    pub fn with_comma_as_decimal_separator(&mut self) -> &mut Self {
        self.config.decimal_separator = DecimalSeparator::Comma;
        self
    }

    pub fn with_dot_as_decimal_separator(&mut self) -> &mut Self {
        self.config.decimal_separator = DecimalSeparator::Dot;
        self
    }

    /// Replace the input with an in-memory buffer, keeping the modes.
    ///
    /// The previous stream is released first.
    pub fn with_bytes(&mut self, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.cursor.close();
        self.cursor = SourceCursor::from_bytes(bytes);
        self
    }

    /// Release the input stream. Idempotent.
    pub fn close(&mut self) {
        self.cursor.close();
    }

    /// Position of the next byte to be read.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    // === Positional assertions ===

    /// Consume exactly one space character.
    pub fn must_be_space(&mut self) -> Result<()> {
        let byte = self.cursor.read_char()?;
        if byte != b' ' {
            return Err(self.expected_here("space"));
        }
        Ok(())
    }

    /// Consume a line terminator: `\n` or `\r\n`.
    pub fn must_be_newline(&mut self) -> Result<()> {
        let mut byte = self.cursor.read_char()?;
        if byte == b'\r' {
            byte = self.cursor.read_char()?;
        }
        if byte != b'\n' {
            return Err(self.expected_here("newline"));
        }
        Ok(())
    }

    /// Require that the input is exhausted.
    pub fn must_be_eof(&mut self) -> Result<()> {
        if self.cursor.peek()?.is_some() {
            return Err(Diagnostic::expected("EOF").at(self.cursor.position()));
        }
        Ok(())
    }

    // === Scanner passthrough ===

    /// Read one raw byte, with no skipping in either mode.
    pub fn read_char(&mut self) -> Result<u8> {
        self.cursor.read_char()
    }

    /// Skip whitespace. Stops silently at end of input.
    pub fn skip_spaces(&mut self) {
        self.cursor.skip_spaces();
    }

    /// Skip to the next digit or `-`. Stops silently at end of input.
    pub fn skip_non_numeric(&mut self) {
        self.cursor.skip_non_numeric();
    }

    // === Type-driven dispatch ===

    /// Read one value of type `T` with the current modes.
    pub fn read<T: Readable>(&mut self) -> Result<T> {
        T::read_from(self)
    }

    /// Read `n` values of type `T`.
    ///
    /// In strict mode the values must be separated by exactly one space; in
    /// lenient mode any insignificant bytes may separate them.
    pub fn read_vec<T: Readable>(&mut self, n: usize) -> Result<Vec<T>> {
        let sep = if self.config.strict { " " } else { "" };
        self.read_n(n, sep, T::read_from)
    }

    /// Read an `n` by `m` grid: `n` rows as by [`read_vec`](Self::read_vec),
    /// separated by `\n`.
    pub fn read_grid<T: Readable>(&mut self, n: usize, m: usize) -> Result<Vec<Vec<T>>> {
        if n == 0 || m == 0 {
            return Err(Diagnostic::invalid_argument(
                "Both dimensions of the grid must have positive size",
            ));
        }
        self.read_n(n, "\n", |reader| reader.read_vec(m))
    }

    // === Helpers ===

    /// `UnexpectedCharacter` for the byte just read.
    #[cold]
    fn unexpected(&self, byte: u8) -> Diagnostic {
        Diagnostic::unexpected_byte(byte).at(self.cursor.last_position())
    }

    /// `UnexpectedCharacter` naming what should have been at the byte just read.
    #[cold]
    fn expected_here(&self, what: &str) -> Diagnostic {
        Diagnostic::expected(what).at(self.cursor.last_position())
    }

    /// Log the outcome of a token read.
    fn traced<T: Debug>(&self, token: &'static str, result: Result<T>) -> Result<T> {
        match &result {
            Ok(value) => trace!(token, value = ?value, position = %self.cursor.position(), "read token"),
            Err(diag) => debug!(token, kind = ?diag.kind, error = %diag, "read failed"),
        }
        result
    }
}

/// A value the reader can produce by type alone.
///
/// Integers and floats honor the numeric modes, `String` reads a
/// whitespace-delimited string of any length, and `char` reads one raw byte.
pub trait Readable: Sized {
    fn read_from(reader: &mut Reader<'_>) -> Result<Self>;
}

macro_rules! readable_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Readable for $t {
            fn read_from(reader: &mut Reader<'_>) -> Result<Self> {
                reader.read_integer()
            }
        }
    )*};
}

readable_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Readable for f32 {
    fn read_from(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_float()
    }
}

impl Readable for f64 {
    fn read_from(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_float()
    }
}

impl Readable for String {
    fn read_from(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_string()
    }
}

impl Readable for char {
    fn read_from(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_char().map(char::from)
    }
}
