//! Diagnostics shared by the cpv scanner and validators.
//!
//! Every failure in the toolkit is a [`Diagnostic`]: a [`DiagnosticKind`]
//! plus a human-readable message. Reader failures additionally record the
//! [`Position`] in the input where they happened; failed assertions record
//! the [`CallSite`] of the check that fired.
//!
//! ```text
//! let n: i32 = reader.read_integer_in(1, 100_000)?;
//! // RangeViolation -> "FAILED VALIDATION: Expected 1 <= n <= 100000 (at line 1, column 7)"
//! ```

mod diagnostic;
mod location;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use location::{CallSite, Location, Position};

/// Result type for every fallible cpv operation.
pub type Result<T> = std::result::Result<T, Diagnostic>;
