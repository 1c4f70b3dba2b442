//! Fixed-count sequences of tokens.
//!
//! With an empty separator each element is read in the current mode, so a
//! lenient reader accepts any insignificant bytes between elements. With a
//! non-empty separator the separator is the only thing allowed between two
//! elements, and elements are read strictly.

use cpv_diagnostic::{Diagnostic, Result};
use tracing::trace;

use super::numeric::in_interval;
use super::text::length_bounds;
use super::Reader;
use crate::{Float, Integer};

/// Elements reserved up front, whatever `n` the caller asks for.
const PREALLOCATED_ELEMENTS: usize = 1 << 12;

impl<'a> Reader<'a> {
    /// Read exactly `n` elements with `element`, consuming `sep` between
    /// consecutive elements. Fails on the first bad element.
    ///
    /// Lenient mode skips whitespace before the first element.
    pub fn read_n<T>(
        &mut self,
        n: usize,
        sep: &str,
        mut element: impl FnMut(&mut Reader<'a>) -> Result<T>,
    ) -> Result<Vec<T>> {
        if n == 0 {
            return Err(Diagnostic::invalid_argument("n must be strictly positive"));
        }
        if !self.config.strict {
            self.cursor.skip_spaces();
        }
        let mut values = Vec::with_capacity(n.min(PREALLOCATED_ELEMENTS));
        for i in 0..n {
            values.push(element(self)?);
            if !sep.is_empty() && i + 1 < n {
                self.read_constant(sep)?;
            }
        }
        trace!(count = n, sep = %sep.escape_default(), "read sequence");
        Ok(values)
    }

    pub fn read_n_integers<I: Integer>(&mut self, n: usize, sep: &str) -> Result<Vec<I>> {
        if sep.is_empty() {
            self.read_n(n, sep, |reader| reader.read_integer())
        } else {
            self.read_n(n, sep, |reader| reader.read_integer_strict())
        }
    }

    /// Read `n` integers, each required to lie in `[min, max]`.
    pub fn read_n_integers_in<I: Integer>(
        &mut self,
        n: usize,
        min: I,
        max: I,
        sep: &str,
    ) -> Result<Vec<I>> {
        if sep.is_empty() {
            self.read_n(n, sep, |reader| reader.read_integer_in(min, max))
        } else {
            self.read_n(n, sep, |reader| {
                let start = reader.position();
                let value = reader.read_integer_strict()?;
                in_interval("x", value, min, max, start)
            })
        }
    }

    pub fn read_n_floats<F: Float>(&mut self, n: usize, sep: &str) -> Result<Vec<F>> {
        if sep.is_empty() {
            self.read_n(n, sep, |reader| reader.read_float())
        } else {
            self.read_n(n, sep, |reader| reader.read_float_strict())
        }
    }

    /// Read `n` strings, each of exactly `exact_len` bytes when given.
    pub fn read_n_strings(
        &mut self,
        n: usize,
        exact_len: Option<usize>,
        sep: &str,
    ) -> Result<Vec<String>> {
        let (min, max) = match exact_len {
            Some(len) => length_bounds(&(len..=len))?,
            None => length_bounds(&(..))?,
        };
        if sep.is_empty() {
            self.read_n(n, sep, |reader| reader.read_string_len(min..=max))
        } else {
            self.read_n(n, sep, |reader| reader.read_string_strict(|_, _| true, min, max))
        }
    }
}
