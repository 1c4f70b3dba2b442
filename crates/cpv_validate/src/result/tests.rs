use cpv_diagnostic::DiagnosticKind;
use pretty_assertions::assert_eq;

use super::*;

fn pass(message: &str) -> ValidationResult {
    ValidationResult::success(message)
}

fn fail(message: &str) -> ValidationResult {
    ValidationResult::failure(message)
}

#[test]
fn failure_carries_validation_diagnostic() {
    let result = fail("boom");
    assert!(result.is_failure());
    let diagnostic = result.diagnostic().cloned();
    assert_eq!(
        diagnostic.map(|d| d.kind),
        Some(DiagnosticKind::ValidationFailure)
    );
    assert_eq!(result.message(), "boom");
}

#[test]
fn not_flips_and_indents() {
    let negated = !pass("Elements are equal");
    assert!(negated.is_failure());
    assert_eq!(negated.message(), "NOT\n  Elements are equal");

    let double = !!pass("ok");
    assert!(double.is_success());
    assert_eq!(double.message(), "NOT\n  NOT\n    ok");
}

#[test]
fn and_truth_table() {
    assert!((pass("a") & pass("b")).is_success());
    assert!((pass("a") & fail("b")).is_failure());
    assert!((fail("a") & pass("b")).is_failure());
    assert!((fail("a") & fail("b")).is_failure());
}

#[test]
fn or_truth_table() {
    assert!((pass("a") | pass("b")).is_success());
    assert!((pass("a") | fail("b")).is_success());
    assert!((fail("a") | pass("b")).is_success());
    assert!((fail("a") | fail("b")).is_failure());
}

#[test]
fn combined_message_keeps_both_operands() {
    let result = pass("left").and(fail("right"));
    assert_eq!(result.message(), "  left\nAND\n  right");

    let result = fail("left").or(fail("right"));
    assert_eq!(result.message(), "  left\nOR\n  right");
}

#[test]
fn nested_messages_indent_every_line() {
    let result = (pass("a") & pass("b")) | !fail("c");
    assert_eq!(
        result.message(),
        "    a\n  AND\n    b\nOR\n  NOT\n    c"
    );
}

#[test]
fn into_result_exposes_diagnostic() {
    assert_eq!(pass("fine").into_result(), Ok("fine".to_string()));
    let err = fail("bad").into_result().unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::ValidationFailure);
    assert_eq!(err.to_string(), "FAILED VALIDATION: bad");
}
