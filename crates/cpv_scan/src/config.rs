//! Reader mode configuration.

/// Character accepted between the integer and fractional parts of a float.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DecimalSeparator {
    #[default]
    Dot,
    Comma,
}

impl DecimalSeparator {
    #[inline]
    pub fn as_byte(self) -> u8 {
        match self {
            DecimalSeparator::Dot => b'.',
            DecimalSeparator::Comma => b',',
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }
}

/// Lexical policy of a [`Reader`](crate::Reader).
///
/// The fields persist across reads until changed; they are not per-call
/// parameters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ReaderConfig {
    /// Require every token to start exactly at the cursor. When `false`,
    /// insignificant characters are skipped before each token.
    pub strict: bool,
    /// Accept numeric literals such as `007` and `-00`.
    pub leading_zeros: bool,
    pub decimal_separator: DecimalSeparator,
}

impl ReaderConfig {
    /// Strict mode, no leading zeros, `.` separator.
    pub fn strict() -> Self {
        ReaderConfig {
            strict: true,
            ..ReaderConfig::default()
        }
    }

    /// Lenient mode, no leading zeros, `.` separator.
    pub fn lenient() -> Self {
        ReaderConfig::default()
    }
}
