//! Core diagnostic type for reader and validation failures.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::{CallSite, Location, Position};

/// What kind of failure a [`Diagnostic`] describes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// An input or output file could not be opened.
    OpenFailure,
    /// The input ended (or could not be read) before a token was complete.
    EndOfInput,
    /// The input does not follow the expected grammar.
    UnexpectedCharacter,
    /// An integer literal does not fit in the requested type.
    Overflow,
    /// A well-formed token violates a caller-given bound.
    RangeViolation,
    /// The API was misused (empty literal, zero-length read, ...).
    InvalidArgument,
    /// A validation predicate failed.
    ValidationFailure,
    /// Writing output failed.
    OutputFailure,
}

impl DiagnosticKind {
    /// Report prefix used when the diagnostic is displayed.
    pub fn prefix(self) -> &'static str {
        match self {
            DiagnosticKind::OpenFailure
            | DiagnosticKind::EndOfInput
            | DiagnosticKind::OutputFailure => "I/O ERROR",
            DiagnosticKind::UnexpectedCharacter => "UNEXPECTED READ",
            DiagnosticKind::Overflow => "INTEGER OVERFLOW",
            DiagnosticKind::RangeViolation | DiagnosticKind::ValidationFailure => {
                "FAILED VALIDATION"
            }
            DiagnosticKind::InvalidArgument => "INVALID ARGUMENT",
        }
    }

    /// Whether this kind is a constraint failure rather than a lexical one.
    pub fn is_validation(self) -> bool {
        matches!(
            self,
            DiagnosticKind::RangeViolation | DiagnosticKind::ValidationFailure
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A failure with its kind, message, and optional provenance.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{kind}: {message}{location}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub location: Location,
}

impl Diagnostic {
    /// Create a diagnostic with no provenance.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            location: Location::default(),
        }
    }

    /// A file could not be opened.
    #[cold]
    pub fn open_failure(path: &Path, cause: &std::io::Error) -> Self {
        Self::new(
            DiagnosticKind::OpenFailure,
            format!("Couldn't open {}: {cause}", path.display()),
        )
    }

    /// The input has no more bytes.
    #[cold]
    pub fn end_of_input() -> Self {
        Self::new(DiagnosticKind::EndOfInput, "Reached EOF")
    }

    /// The underlying stream failed; no further bytes can be read.
    #[cold]
    pub fn stream_failure(cause: &std::io::Error) -> Self {
        Self::new(
            DiagnosticKind::EndOfInput,
            format!("Reached EOF: stream failed ({cause})"),
        )
    }

    /// A byte that the grammar does not allow here.
    #[cold]
    pub fn unexpected_byte(byte: u8) -> Self {
        Self::new(
            DiagnosticKind::UnexpectedCharacter,
            format!("Encountered character '{}'", char::from(byte).escape_default()),
        )
    }

    /// A token class or literal that was expected but not found.
    #[cold]
    pub fn expected(what: impl fmt::Display) -> Self {
        Self::new(DiagnosticKind::UnexpectedCharacter, format!("Expected {what}"))
    }

    /// An integer literal exceeded `limit`.
    #[cold]
    pub fn overflow(limit: impl fmt::Display) -> Self {
        Self::new(DiagnosticKind::Overflow, format!("Exceeded limit {limit}"))
    }

    /// `var` does not lie in `[low, high]`.
    #[cold]
    pub fn interval_constraint(
        var: &str,
        low: impl fmt::Display,
        high: impl fmt::Display,
    ) -> Self {
        Self::new(
            DiagnosticKind::RangeViolation,
            format!("Expected {low} <= {var} <= {high}"),
        )
    }

    /// A string byte rejected by a per-position predicate.
    #[cold]
    pub fn invalid_byte_at(byte: u8, index: usize) -> Self {
        Self::new(
            DiagnosticKind::RangeViolation,
            format!(
                "Invalid character '{}' at position {index}",
                char::from(byte).escape_default()
            ),
        )
    }

    /// The API was called with arguments it cannot honor.
    #[cold]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::InvalidArgument, message)
    }

    /// A validation predicate failed with `message`.
    pub fn validation_failure(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::ValidationFailure, message)
    }

    /// Writing output failed.
    #[cold]
    pub fn output_failure(cause: &std::io::Error) -> Self {
        Self::new(
            DiagnosticKind::OutputFailure,
            format!("Couldn't write output: {cause}"),
        )
    }

    /// Attach the input position the failure was detected at.
    ///
    /// Keeps an already attached position: the innermost reader call knows
    /// best where the failure happened.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        if self.location.position.is_none() {
            self.location.position = Some(position);
        }
        self
    }

    /// Attach the validator call site that raised the failure.
    #[must_use]
    pub fn with_call_site(mut self, file: &'static str, line: u32) -> Self {
        self.location.call_site = Some(CallSite { file, line });
        self
    }

    /// Input position, if the failure came from the reader.
    pub fn position(&self) -> Option<Position> {
        self.location.position
    }

    /// Validator call site, if the failure came from an assertion.
    pub fn call_site(&self) -> Option<CallSite> {
        self.location.call_site
    }

    /// Whether this is a constraint failure rather than a lexical one.
    pub fn is_validation(&self) -> bool {
        self.kind.is_validation()
    }

    /// Full report for the error stream.
    ///
    /// Assertion failures render as a framed block naming the call site:
    ///
    /// ```text
    /// FAILED VALIDATION AT src/main.rs::42
    /// ---
    /// Comparison failed: 7 > 5
    /// ---
    /// ```
    ///
    /// Everything else renders as its `Display` form.
    pub fn report(&self) -> String {
        match self.location.call_site {
            Some(site) => format!("{} AT {site}\n---\n{}\n---", self.kind, self.message),
            None => self.to_string(),
        }
    }
}
