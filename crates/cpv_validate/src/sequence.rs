//! Predicates over whole sequences.
//!
//! Every check stops at the first violation and reports its zero-based
//! index, scanning left to right.

use std::borrow::Borrow;
use std::fmt::Debug;

use crate::{between, ValidationResult};

/// Check `predicate` on every element.
///
/// The predicate may carry state between elements, e.g. the previous value:
///
/// ```ignore
/// let mut prev = f[0];
/// ensure_valid!(all(&f[1..], |&x| {
///     let result = neq(prev, x);
///     prev = x;
///     result
/// }));
/// ```
pub fn all<I, P>(values: I, mut predicate: P) -> ValidationResult
where
    I: IntoIterator,
    P: FnMut(I::Item) -> ValidationResult,
{
    for (index, value) in values.into_iter().enumerate() {
        let result = predicate(value);
        if result.is_failure() {
            return ValidationResult::failure(format!(
                "Failed check for element {index}: {}",
                result.message()
            ));
        }
    }
    ValidationResult::success("Property satisfied by all elements")
}

/// Check `low <= x <= high` for every element.
pub fn all_between<I, T>(values: I, low: T, high: T) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialOrd + Debug,
{
    all(values, |value| {
        between(<I::Item as Borrow<T>>::borrow(&value), &low, &high)
    })
}

/// Check that no two elements compare equal.
///
/// Sorts a copy of the elements, so the type must be totally ordered.
pub fn distinct<I>(values: I) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Ord + Debug,
{
    let mut sorted: Vec<I::Item> = values.into_iter().collect();
    sorted.sort_unstable();
    match sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        Some(pair) => ValidationResult::failure(format!(
            "Elements are not distinct: Multiple occurrences of {:?}",
            pair[0]
        )),
        None => ValidationResult::success("Elements are distinct"),
    }
}

/// Check adjacent pairs for order.
///
/// Increasing by default; `decreasing` reverses the direction. `strict`
/// forbids equal neighbours.
pub fn sorted<T: PartialOrd>(values: &[T], strict: bool, decreasing: bool) -> ValidationResult {
    sorted_by(values, |a, b| match (strict, decreasing) {
        (true, false) => a < b,
        (false, false) => a <= b,
        (true, true) => a > b,
        (false, true) => a >= b,
    })
}

/// Check that `in_order(a, b)` holds for every adjacent pair `(a, b)`.
pub fn sorted_by<T>(values: &[T], mut in_order: impl FnMut(&T, &T) -> bool) -> ValidationResult {
    for (index, pair) in values.windows(2).enumerate() {
        if !in_order(&pair[0], &pair[1]) {
            return ValidationResult::failure(format!(
                "Array is not sorted: Wrong order at positions {index} and {}",
                index + 1
            ));
        }
    }
    ValidationResult::success("Array is sorted")
}
