//! Integer and decimal floating-point tokens.

use cpv_diagnostic::{Diagnostic, DiagnosticKind, Position, Result};
use tracing::debug;

use super::Reader;
use crate::{is_digit, Float, Integer, Signed, Unsigned};

impl Reader<'_> {
    /// Read an integer literal of type `I`.
    ///
    /// Lenient mode first skips to the next digit or `-`.
    ///
    /// # Errors
    ///
    /// `UnexpectedCharacter` if no literal starts at the cursor (or a
    /// leading zero is not allowed), `Overflow` if it does not fit in `I`,
    /// `EndOfInput` if the input ends first.
    pub fn read_integer<I: Integer>(&mut self) -> Result<I> {
        self.skip_before_number();
        self.read_integer_strict()
    }

    /// Read an integer and require `min <= n <= max`.
    pub fn read_integer_in<I: Integer>(&mut self, min: I, max: I) -> Result<I> {
        self.skip_before_number();
        let start = self.cursor.position();
        let value = self.read_integer_strict()?;
        in_interval("n", value, min, max, start)
    }

    /// Read a decimal floating-point literal of type `F`.
    ///
    /// The grammar is `-? digits (separator digits)?`, where the separator
    /// follows the configured [`DecimalSeparator`](crate::DecimalSeparator).
    /// Exponents, `inf`, and `nan` are not accepted.
    pub fn read_float<F: Float>(&mut self) -> Result<F> {
        self.skip_before_number();
        self.read_float_strict()
    }

    /// Parse an integer at the cursor with no skipping.
    pub(super) fn read_integer_strict<I: Integer>(&mut self) -> Result<I> {
        let result = I::read_strict(self);
        self.traced("integer", result)
    }

    pub(super) fn read_float_strict<F: Float>(&mut self) -> Result<F> {
        let result = self.scan_float();
        self.traced("float", result)
    }

    /// Read an unsigned literal, accumulating with a pre-checked bound.
    pub(crate) fn read_unsigned_strict<U: Unsigned>(&mut self) -> Result<U> {
        let start = self.cursor.position();
        let mut n = U::ZERO;
        let mut started = false;
        loop {
            let byte = match self.cursor.read_char() {
                Ok(byte) => byte,
                Err(_) if started => return Ok(n),
                Err(diag) => return Err(diag),
            };
            if !is_digit(byte) {
                if !started {
                    return Err(self.unexpected(byte));
                }
                self.cursor.unread_one();
                return Ok(n);
            }
            if started && n == U::ZERO && !self.config.leading_zeros {
                return Err(Diagnostic::unexpected_byte(b'0').at(start));
            }
            started = true;
            let digit = U::from_digit(byte - b'0');
            if n > (U::MAX - digit) / U::TEN {
                return Err(Diagnostic::overflow(U::MAX).at(start));
            }
            n = U::TEN * n + digit;
        }
    }

    /// Read a signed literal through its unsigned magnitude.
    pub(crate) fn read_signed_strict<S: Signed>(&mut self) -> Result<S> {
        let start = self.cursor.position();
        let negative = match self.cursor.read_char()? {
            b'-' => true,
            byte if is_digit(byte) => {
                self.cursor.unread_one();
                false
            }
            byte => return Err(self.unexpected(byte)),
        };
        let (limit, bound) = if negative {
            (S::min_magnitude(), S::MIN)
        } else {
            (S::max_magnitude(), S::MAX)
        };
        let magnitude = match self.read_unsigned_strict::<S::Magnitude>() {
            Ok(magnitude) => magnitude,
            Err(diag) if diag.kind == DiagnosticKind::Overflow => {
                return Err(Diagnostic::overflow(bound).at(start));
            }
            Err(diag) => return Err(diag),
        };
        if magnitude > limit {
            return Err(Diagnostic::overflow(bound).at(start));
        }
        Ok(S::from_magnitude(magnitude, negative))
    }

    /// Scan a float literal into a normalized string, then convert it.
    fn scan_float<F: Float>(&mut self) -> Result<F> {
        let separator = self.config.decimal_separator.as_byte();
        let start = self.cursor.position();
        let mut literal = String::new();
        // Every integer-part digit so far is '0'.
        let mut is_zero = true;
        let mut in_fraction = false;
        loop {
            let byte = match self.cursor.read_char() {
                Ok(byte) => byte,
                Err(_) if ends_with_digit(&literal) => break,
                Err(diag) => return Err(diag),
            };
            if byte == b'-' {
                if !literal.is_empty() {
                    return Err(self.unexpected(byte));
                }
                literal.push('-');
            } else if byte == separator {
                if !ends_with_digit(&literal) || in_fraction {
                    return Err(self.unexpected(byte));
                }
                in_fraction = true;
                literal.push('.');
            } else if is_digit(byte) {
                if is_zero && !in_fraction && !self.config.leading_zeros && ends_with_digit(&literal)
                {
                    return Err(Diagnostic::unexpected_byte(b'0').at(start));
                }
                if byte != b'0' {
                    is_zero = false;
                }
                literal.push(char::from(byte));
            } else {
                if literal.is_empty() {
                    return Err(self.unexpected(byte));
                }
                // "1." is complete; a lone "-" is rejected by the parse below.
                self.cursor.unread_one();
                break;
            }
        }
        literal
            .parse::<F>()
            .map_err(|_| Diagnostic::expected("a floating-point number").at(start))
    }

    fn skip_before_number(&mut self) {
        if !self.config.strict {
            self.cursor.skip_non_numeric();
        }
    }
}

/// Require `min <= value <= max`, naming the value `var` in the failure.
pub(super) fn in_interval<I: Integer>(
    var: &str,
    value: I,
    min: I,
    max: I,
    start: Position,
) -> Result<I> {
    if value < min || value > max {
        debug!(var, %value, %min, %max, "value out of range");
        return Err(Diagnostic::interval_constraint(var, min, max).at(start));
    }
    Ok(value)
}

fn ends_with_digit(literal: &str) -> bool {
    literal.as_bytes().last().is_some_and(|&byte| is_digit(byte))
}
