//! Pass/fail outcome with a nestable message.

use std::ops::{BitAnd, BitOr, Not};

use cpv_diagnostic::{Diagnostic, Result};
use tracing::debug;

/// Outcome of a validation predicate.
///
/// Immutable once built: combinators consume their operands and produce a
/// new result whose message embeds the operands' messages, indented one
/// level.
///
/// # Variants
///
/// - `Success`: the property holds; the message says why.
/// - `Failure`: the property does not hold; the diagnostic has kind
///   `ValidationFailure` and says what went wrong.
#[derive(Clone, Eq, PartialEq, Debug)]
#[must_use = "a validation result does nothing unless checked"]
pub enum ValidationResult {
    Success(String),
    Failure(Diagnostic),
}

impl ValidationResult {
    pub fn success(message: impl Into<String>) -> Self {
        ValidationResult::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let diagnostic = Diagnostic::validation_failure(message);
        debug!(message = %diagnostic.message, "validation result failed");
        ValidationResult::Failure(diagnostic)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, ValidationResult::Failure(_))
    }

    /// The success message or the failure message, whichever is present.
    pub fn message(&self) -> &str {
        match self {
            ValidationResult::Success(message) => message,
            ValidationResult::Failure(diagnostic) => &diagnostic.message,
        }
    }

    /// The failure diagnostic, if any.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ValidationResult::Success(_) => None,
            ValidationResult::Failure(diagnostic) => Some(diagnostic),
        }
    }

    /// Convert into a `Result`, keeping the success message.
    pub fn into_result(self) -> Result<String> {
        match self {
            ValidationResult::Success(message) => Ok(message),
            ValidationResult::Failure(diagnostic) => Err(diagnostic),
        }
    }

    /// Logical AND. Both operands are already evaluated, so both messages
    /// appear in the result whichever one failed.
    pub fn and(self, other: ValidationResult) -> Self {
        let holds = self.is_success() && other.is_success();
        Self::combine(holds, &self, "AND", &other)
    }

    /// Logical OR. Both messages appear in the result.
    pub fn or(self, other: ValidationResult) -> Self {
        let holds = self.is_success() || other.is_success();
        Self::combine(holds, &self, "OR", &other)
    }

    fn combine(holds: bool, lhs: &Self, operator: &str, rhs: &Self) -> Self {
        let message = format!(
            "{}\n{operator}\n{}",
            indent(lhs.message()),
            indent(rhs.message())
        );
        Self::from_outcome(holds, message)
    }

    fn from_outcome(holds: bool, message: String) -> Self {
        if holds {
            Self::success(message)
        } else {
            Self::failure(message)
        }
    }
}

impl Not for ValidationResult {
    type Output = ValidationResult;

    fn not(self) -> ValidationResult {
        let message = format!("NOT\n{}", indent(self.message()));
        Self::from_outcome(self.is_failure(), message)
    }
}

impl BitAnd for ValidationResult {
    type Output = ValidationResult;

    fn bitand(self, rhs: ValidationResult) -> ValidationResult {
        self.and(rhs)
    }
}

impl BitOr for ValidationResult {
    type Output = ValidationResult;

    fn bitor(self, rhs: ValidationResult) -> ValidationResult {
        self.or(rhs)
    }
}

/// Prefix every line of `message` with two spaces.
fn indent(message: &str) -> String {
    format!("  {}", message.replace('\n', "\n  "))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
