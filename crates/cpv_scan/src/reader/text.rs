//! Whitespace-delimited strings, literal tokens, and alternatives.

use std::ops::{Bound, RangeBounds};

use cpv_diagnostic::{Diagnostic, DiagnosticKind, Result};

use super::Reader;
use crate::is_space;

impl Reader<'_> {
    /// Read a whitespace-delimited string of any length.
    pub fn read_string(&mut self) -> Result<String> {
        self.read_string_matching(|_, _| true, ..)
    }

    /// Read a string of exactly `len` bytes.
    pub fn read_string_exact(&mut self, len: usize) -> Result<String> {
        self.read_string_matching(|_, _| true, len..=len)
    }

    /// Read a string whose length lies in `bounds`.
    pub fn read_string_len(&mut self, bounds: impl RangeBounds<usize>) -> Result<String> {
        self.read_string_matching(|_, _| true, bounds)
    }

    /// Read a string made only of bytes in `allowed`, with length in `bounds`.
    pub fn read_string_of(
        &mut self,
        allowed: &str,
        bounds: impl RangeBounds<usize>,
    ) -> Result<String> {
        let allowed = allowed.as_bytes();
        self.read_string_matching(|_, byte| allowed.contains(&byte), bounds)
    }

    /// Read a whitespace-delimited string, checking every byte with
    /// `check(index, byte)` and the length against `bounds`.
    ///
    /// Lenient mode skips whitespace first. The terminating whitespace byte
    /// is left unread. Bytes that are not valid UTF-8 are replaced with
    /// `U+FFFD` in the returned string.
    ///
    /// # Errors
    ///
    /// - `UnexpectedCharacter` if the string would start with whitespace
    /// - `RangeViolation` if the length falls outside `bounds` or `check`
    ///   rejects a byte
    /// - `EndOfInput` if the input ends before the first byte
    /// - `InvalidArgument` if `bounds` admits no positive length
    pub fn read_string_matching(
        &mut self,
        check: impl FnMut(usize, u8) -> bool,
        bounds: impl RangeBounds<usize>,
    ) -> Result<String> {
        let (min, max) = length_bounds(&bounds)?;
        if !self.config.strict {
            self.cursor.skip_spaces();
        }
        self.read_string_strict(check, min, max)
    }

    /// Read exactly `token`, byte for byte.
    ///
    /// All `token.len()` bytes are consumed before comparing.
    pub fn read_constant(&mut self, token: &str) -> Result<()> {
        if token.is_empty() {
            return Err(Diagnostic::invalid_argument("Cannot read the empty string"));
        }
        let result = self.scan_constant(token);
        self.traced("constant", result)
    }

    /// Read a string that must equal one of `tokens`.
    ///
    /// The string is read with a length between the shortest and the longest
    /// candidate; any failure to match lists every candidate.
    pub fn read_any_of(&mut self, tokens: &[&str]) -> Result<String> {
        let (Some(min), Some(max)) = (
            tokens.iter().map(|token| token.len()).min(),
            tokens.iter().map(|token| token.len()).max(),
        ) else {
            return Err(Diagnostic::invalid_argument(
                "At least one candidate token is required",
            ));
        };
        if min == 0 {
            return Err(Diagnostic::invalid_argument(
                "Candidate tokens must not be the empty string",
            ));
        }
        if !self.config.strict {
            self.cursor.skip_spaces();
        }
        let start = self.cursor.position();
        let no_match = || {
            let listed: Vec<String> = tokens.iter().map(|token| format!("'{token}'")).collect();
            Diagnostic::expected(format!("one of {}", listed.join(", "))).at(start)
        };
        match self.read_string_strict(|_, _| true, min, max) {
            Ok(value) if tokens.iter().any(|token| *token == value) => Ok(value),
            Ok(_) => Err(no_match()),
            Err(diag) if diag.kind == DiagnosticKind::RangeViolation => Err(no_match()),
            Err(diag) => Err(diag),
        }
    }

    /// Read a string at the cursor with no skipping.
    pub(super) fn read_string_strict(
        &mut self,
        check: impl FnMut(usize, u8) -> bool,
        min: usize,
        max: usize,
    ) -> Result<String> {
        let result = self.scan_string(check, min, max);
        self.traced("string", result)
    }

    fn scan_string(
        &mut self,
        mut check: impl FnMut(usize, u8) -> bool,
        min: usize,
        max: usize,
    ) -> Result<String> {
        let start = self.cursor.position();
        let mut bytes = Vec::new();
        loop {
            let byte = match self.cursor.read_char() {
                Ok(byte) => byte,
                Err(diag) if bytes.is_empty() => return Err(diag),
                Err(_) => break,
            };
            if is_space(byte) {
                if bytes.is_empty() {
                    return Err(self.expected_here("non-space character"));
                }
                self.cursor.unread_one();
                break;
            }
            if bytes.len() >= max {
                return Err(length_violation(min, max).at(start));
            }
            if !check(bytes.len(), byte) {
                return Err(
                    Diagnostic::invalid_byte_at(byte, bytes.len()).at(self.cursor.last_position())
                );
            }
            bytes.push(byte);
        }
        if bytes.len() < min {
            return Err(length_violation(min, max).at(start));
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn scan_constant(&mut self, token: &str) -> Result<()> {
        let start = self.cursor.position();
        let mut matches = true;
        for &expected in token.as_bytes() {
            matches &= self.cursor.read_char()? == expected;
        }
        if !matches {
            return Err(Diagnostic::expected(format!("'{}'", token.escape_default())).at(start));
        }
        Ok(())
    }
}

/// Resolve a length range to inclusive `(min, max)`.
///
/// An unbounded end means no maximum. A range that admits no positive
/// length is rejected: a string token always has at least one byte.
pub(super) fn length_bounds(bounds: &impl RangeBounds<usize>) -> Result<(usize, usize)> {
    let min = match bounds.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let max = match bounds.end_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => n.checked_sub(1),
        Bound::Unbounded => Some(usize::MAX),
    };
    match max {
        Some(max) if max > 0 && min <= max => Ok((min, max)),
        _ => Err(Diagnostic::invalid_argument(
            "String length bounds must admit a positive length",
        )),
    }
}

#[cold]
fn length_violation(min: usize, max: usize) -> Diagnostic {
    Diagnostic::interval_constraint("len(string)", min, max)
}
