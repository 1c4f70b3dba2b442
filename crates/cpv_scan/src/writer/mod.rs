//! Text writer producing output the [`Reader`](crate::Reader) reads back.
//!
//! Integers are written in canonical decimal form (no leading zeros, `-`
//! only for negatives); floats use the configured decimal separator.
//! Output is buffered when the writer owns a file and is flushed on
//! [`flush()`](Writer::flush), [`close()`](Writer::close), or drop.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cpv_diagnostic::{Diagnostic, Result};
use tracing::{debug, trace};

use crate::{DecimalSeparator, Float, Integer};

/// Destination held by a writer.
enum Sink<'a> {
    Owned(Box<dyn Write + 'a>),
    Borrowed(&'a mut dyn Write),
    Closed,
}

/// Typed writer over one output stream.
pub struct Writer<'a> {
    sink: Sink<'a>,
    decimal_separator: DecimalSeparator,
}

impl<'a> Writer<'a> {
    /// Writer into a newly created (or truncated) file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| Diagnostic::open_failure(path, &err))?;
        Ok(Self::owned(BufWriter::new(file)))
    }

    /// Writer that takes ownership of `dest`.
    pub fn owned(dest: impl Write + 'a) -> Self {
        Self::with_sink(Sink::Owned(Box::new(dest)))
    }

    /// Writer into a stream the caller keeps ownership of.
    pub fn borrowed(dest: &'a mut dyn Write) -> Self {
        Self::with_sink(Sink::Borrowed(dest))
    }

    fn with_sink(sink: Sink<'a>) -> Self {
        Writer {
            sink,
            decimal_separator: DecimalSeparator::default(),
        }
    }

    pub fn with_comma_as_decimal_separator(&mut self) -> &mut Self {
        self.decimal_separator = DecimalSeparator::Comma;
        self
    }

    pub fn with_dot_as_decimal_separator(&mut self) -> &mut Self {
        self.decimal_separator = DecimalSeparator::Dot;
        self
    }

    pub fn write_space(&mut self) -> Result<()> {
        self.emit(b" ")
    }

    /// Write `\n`, preceded by `\r` when `with_cr` is set.
    pub fn write_newline(&mut self, with_cr: bool) -> Result<()> {
        if with_cr {
            self.emit(b"\r\n")
        } else {
            self.emit(b"\n")
        }
    }

    pub fn write_char(&mut self, c: char) -> Result<()> {
        let mut buf = [0; 4];
        self.emit(c.encode_utf8(&mut buf).as_bytes())
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.emit(s.as_bytes())
    }

    pub fn write_integer<I: Integer>(&mut self, x: I) -> Result<()> {
        self.emit(x.to_string().as_bytes())
    }

    /// Write a float, with exactly `fixed_decimals` fractional digits when
    /// given, otherwise with the shortest representation that reads back
    /// to the same value.
    pub fn write_float<F: Float>(&mut self, x: F, fixed_decimals: Option<usize>) -> Result<()> {
        let mut text = match fixed_decimals {
            Some(precision) => format!("{x:.precision$}"),
            None => x.to_string(),
        };
        if self.decimal_separator != DecimalSeparator::Dot {
            text = text.replace('.', &self.decimal_separator.as_char().to_string());
        }
        self.emit(text.as_bytes())
    }

    /// Write every value, with `sep` between consecutive values.
    pub fn write_iter<T: Writable>(
        &mut self,
        values: impl IntoIterator<Item = T>,
        sep: &str,
    ) -> Result<()> {
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.write_str(sep)?;
            }
            value.write_to(self)?;
        }
        Ok(())
    }

    /// Write rows separated by `\n`, elements within a row by a space.
    ///
    /// No newline follows the last row.
    pub fn write_grid<R, T>(&mut self, rows: impl IntoIterator<Item = R>) -> Result<()>
    where
        R: IntoIterator<Item = T>,
        T: Writable,
    {
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                self.write_newline(false)?;
            }
            self.write_iter(row, " ")?;
        }
        Ok(())
    }

    /// Write any [`Writable`] value.
    pub fn write<T: Writable + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.write_to(self)
    }

    pub fn flush(&mut self) -> Result<()> {
        let result = match &mut self.sink {
            Sink::Owned(dest) => dest.flush(),
            Sink::Borrowed(dest) => dest.flush(),
            Sink::Closed => Ok(()),
        };
        trace!("flushed output");
        result.map_err(|err| Diagnostic::output_failure(&err))
    }

    /// Flush and release the output stream. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        let flushed = self.flush();
        self.sink = Sink::Closed;
        flushed
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<()> {
        let result = match &mut self.sink {
            Sink::Owned(dest) => dest.write_all(bytes),
            Sink::Borrowed(dest) => dest.write_all(bytes),
            Sink::Closed => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "writer is closed",
            )),
        };
        result.map_err(|err| {
            debug!(error = %err, "write failed");
            Diagnostic::output_failure(&err)
        })
    }
}

impl Drop for Writer<'_> {
    fn drop(&mut self) {
        if let Err(diag) = self.flush() {
            debug!(error = %diag, "flush on drop failed");
        }
    }
}

impl std::fmt::Debug for Writer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sink = match self.sink {
            Sink::Owned(_) => "owned",
            Sink::Borrowed(_) => "borrowed",
            Sink::Closed => "closed",
        };
        f.debug_struct("Writer")
            .field("sink", &sink)
            .field("decimal_separator", &self.decimal_separator)
            .finish()
    }
}

/// A value the writer can render.
///
/// Sequences render their elements separated by single spaces.
pub trait Writable {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()>;
}

macro_rules! writable_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Writable for $t {
            fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
                writer.write_integer(*self)
            }
        }
    )*};
}

writable_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Writable for f32 {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_float(*self, None)
    }
}

impl Writable for f64 {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_float(*self, None)
    }
}

impl Writable for char {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_char(*self)
    }
}

impl Writable for str {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_str(self)
    }
}

impl Writable for String {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_str(self)
    }
}

impl<T: Writable> Writable for [T] {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        writer.write_iter(self, " ")
    }
}

impl<T: Writable> Writable for Vec<T> {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        self.as_slice().write_to(writer)
    }
}

impl<T: Writable + ?Sized> Writable for &T {
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<()> {
        (**self).write_to(writer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
