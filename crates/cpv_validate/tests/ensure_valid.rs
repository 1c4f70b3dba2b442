//! `ensure_valid!` as seen from a validator function.

#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use cpv_diagnostic::{Diagnostic, DiagnosticKind, Result};
use cpv_validate::{between, ensure_valid, eq, ValidationResult};
use pretty_assertions::assert_eq;

fn check_range(n: i32) -> Result<&'static str> {
    ensure_valid!(between(n, 1, 10));
    Ok("in range")
}

#[test]
fn passing_check_falls_through() {
    assert_eq!(check_range(5), Ok("in range"));
}

#[test]
fn failing_check_returns_early_with_call_site() {
    let err = check_range(11).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::ValidationFailure);
    assert_eq!(err.message, "Value does not lie in [1, 10]: 11 > 10");

    let site = err.call_site().unwrap();
    assert!(site.file.ends_with("ensure_valid.rs"));
    assert!(site.line > 0);
}

#[test]
fn report_frames_the_nested_message() {
    let err = check_range(0).unwrap_err();
    let site = err.call_site().unwrap();
    assert_eq!(
        err.report(),
        format!(
            "FAILED VALIDATION AT {}::{}\n---\nValue does not lie in [1, 10]: 0 < 1\n---",
            site.file, site.line
        )
    );
}

/// Error type of a caller that wraps diagnostics.
#[derive(Debug, PartialEq)]
struct ValidatorError(Diagnostic);

impl From<Diagnostic> for ValidatorError {
    fn from(diagnostic: Diagnostic) -> Self {
        ValidatorError(diagnostic)
    }
}

fn check_not_equal(a: u8, b: u8) -> std::result::Result<(), ValidatorError> {
    ensure_valid!(!eq(a, b));
    Ok(())
}

#[test]
fn converts_into_caller_error_type() {
    assert_eq!(check_not_equal(1, 2), Ok(()));
    let ValidatorError(diagnostic) = check_not_equal(3, 3).unwrap_err();
    assert_eq!(diagnostic.message, "NOT\n  Elements are equal");
}

#[test]
fn accepts_any_result_expression() {
    fn run(result: ValidationResult) -> Result<()> {
        ensure_valid!(result);
        Ok(())
    }
    assert!(run(ValidationResult::success("fine")).is_ok());
    assert!(run(ValidationResult::failure("nope")).is_err());
}
