//! Single-byte cursor with one byte of pushback.
//!
//! The cursor pulls bytes one at a time from a [`BufRead`] and remembers the
//! last byte it returned, so the reader can look one byte ahead by reading
//! and then calling [`unread_one()`](SourceCursor::unread_one).
//!
//! # End of Input
//!
//! Once the stream reports end of input, every further read reports it
//! again without touching the stream. Stream failures are treated the same
//! way: no more bytes can be obtained, so they surface as `EndOfInput`
//! carrying the I/O error text.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use cpv_diagnostic::{Diagnostic, Position, Result};

/// Returns `true` for the whitespace bytes of the input grammar:
/// space, tab, carriage return, and line feed.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Returns `true` for ASCII decimal digits.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Input stream held by a cursor: owned (released on drop or [`close`]),
/// or borrowed from the caller, who keeps responsibility for it.
///
/// [`close`]: SourceCursor::close
enum Stream<'a> {
    Owned(Box<dyn BufRead + 'a>),
    Borrowed(&'a mut dyn BufRead),
    Closed,
}

/// Byte cursor over an input stream.
///
/// # Invariant
///
/// At most one byte is pushed back at a time. `last` holds the most recently
/// returned byte together with the position it was read at, and is cleared
/// by [`unread_one()`](Self::unread_one) and at end of input.
pub struct SourceCursor<'a> {
    stream: Stream<'a>,
    /// Byte returned by the next read before touching the stream.
    pushback: Option<u8>,
    /// Most recently returned byte and its position.
    last: Option<(u8, Position)>,
    /// Position of the next byte to be returned.
    position: Position,
    /// The stream is exhausted (or failed); reads no longer touch it.
    exhausted: bool,
    /// The stream reported an I/O error rather than a clean end.
    failed: bool,
}

impl<'a> SourceCursor<'a> {
    /// Cursor over an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::owned(io::Cursor::new(bytes.into()))
    }

    /// Cursor over a file, buffered.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| Diagnostic::open_failure(path, &err))?;
        Ok(Self::owned(BufReader::new(file)))
    }

    /// Cursor that takes ownership of `source`.
    pub fn owned(source: impl BufRead + 'a) -> Self {
        Self::with_stream(Stream::Owned(Box::new(source)))
    }

    /// Cursor over a stream the caller keeps ownership of.
    pub fn borrowed(source: &'a mut dyn BufRead) -> Self {
        Self::with_stream(Stream::Borrowed(source))
    }

    fn with_stream(stream: Stream<'a>) -> Self {
        SourceCursor {
            stream,
            pushback: None,
            last: None,
            position: Position::START,
            exhausted: false,
            failed: false,
        }
    }

    /// Position of the next byte to be read.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Position of the most recently read byte, or of the next byte when
    /// nothing can be unread.
    #[inline]
    pub fn last_position(&self) -> Position {
        self.last.map_or(self.position, |(_, pos)| pos)
    }

    /// Read the next byte.
    ///
    /// Reports `EndOfInput` when the stream has no more bytes; doing so is
    /// idempotent.
    pub fn read_char(&mut self) -> Result<u8> {
        let byte = match self.pushback.take() {
            Some(byte) => byte,
            None => match self.fetch() {
                Ok(Some(byte)) => byte,
                Ok(None) => {
                    self.last = None;
                    return Err(Diagnostic::end_of_input().at(self.position));
                }
                Err(diag) => {
                    self.last = None;
                    return Err(diag.at(self.position));
                }
            },
        };
        self.last = Some((byte, self.position));
        self.position = self.position.advance(byte);
        Ok(byte)
    }

    /// Push back the most recently read byte.
    ///
    /// Must follow a successful [`read_char()`](Self::read_char). A second
    /// call without an intervening read is a programming error, caught by a
    /// debug assertion; release builds ignore it.
    pub fn unread_one(&mut self) {
        debug_assert!(self.pushback.is_none(), "only one byte can be pushed back");
        if let Some((byte, pos)) = self.last.take() {
            self.pushback = Some(byte);
            self.position = pos;
        }
    }

    /// Look at the next byte without consuming it. `None` at end of input.
    pub fn peek(&mut self) -> Result<Option<u8>> {
        match self.read_char() {
            Ok(byte) => {
                self.unread_one();
                Ok(Some(byte))
            }
            Err(diag) if self.failed => Err(diag),
            Err(_) => Ok(None),
        }
    }

    /// Whether the cursor is at end of input.
    pub fn at_eof(&mut self) -> Result<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Advance past whitespace, leaving the cursor on the first significant
    /// byte. Stops silently at end of input.
    pub fn skip_spaces(&mut self) {
        self.skip_while(is_space);
    }

    /// Advance to the next byte that can start a number (a digit or `-`).
    /// Stops silently at end of input.
    pub fn skip_non_numeric(&mut self) {
        self.skip_while(|byte| !is_digit(byte) && byte != b'-');
    }

    fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        loop {
            let Ok(byte) = self.read_char() else {
                return;
            };
            if !pred(byte) {
                self.unread_one();
                return;
            }
        }
    }

    /// Release an owned stream. Further reads report end of input.
    ///
    /// Idempotent; a borrowed stream is only detached.
    pub fn close(&mut self) {
        self.stream = Stream::Closed;
        self.pushback = None;
        self.last = None;
        self.exhausted = true;
    }

    /// Pull one byte from the stream.
    fn fetch(&mut self) -> Result<Option<u8>> {
        if self.exhausted {
            return Ok(None);
        }
        let source = match &mut self.stream {
            Stream::Owned(source) => source.as_mut(),
            Stream::Borrowed(source) => &mut **source,
            Stream::Closed => {
                self.exhausted = true;
                return Ok(None);
            }
        };
        loop {
            let next = match source.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.exhausted = true;
                    self.failed = true;
                    return Err(Diagnostic::stream_failure(&err));
                }
            };
            match next {
                Some(byte) => {
                    source.consume(1);
                    return Ok(Some(byte));
                }
                None => {
                    self.exhausted = true;
                    return Ok(None);
                }
            }
        }
    }
}

impl std::fmt::Debug for SourceCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stream = match self.stream {
            Stream::Owned(_) => "owned",
            Stream::Borrowed(_) => "borrowed",
            Stream::Closed => "closed",
        };
        f.debug_struct("SourceCursor")
            .field("stream", &stream)
            .field("pushback", &self.pushback)
            .field("position", &self.position)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
