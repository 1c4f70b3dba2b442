//! Comparison predicates over two (or three) values of one type.
//!
//! Failure messages show the operands with their `Debug` form, so strings
//! appear quoted and integers bare.

use std::fmt::Debug;

use crate::ValidationResult;

pub fn eq<T: PartialEq + Debug>(a: T, b: T) -> ValidationResult {
    if a == b {
        ValidationResult::success("Elements are equal")
    } else {
        ValidationResult::failure(format!("Elements are not equal: {a:?} != {b:?}"))
    }
}

pub fn neq<T: PartialEq + Debug>(a: T, b: T) -> ValidationResult {
    if a == b {
        ValidationResult::failure(format!("Elements are not unequal: {a:?} == {b:?}"))
    } else {
        ValidationResult::success("Elements are unequal")
    }
}

/// `a < b`.
pub fn lt<T: PartialOrd + Debug>(a: T, b: T) -> ValidationResult {
    comparison(a < b, &a, ">=", &b)
}

/// `a <= b`.
pub fn lte<T: PartialOrd + Debug>(a: T, b: T) -> ValidationResult {
    comparison(a <= b, &a, ">", &b)
}

/// `a > b`.
pub fn gt<T: PartialOrd + Debug>(a: T, b: T) -> ValidationResult {
    comparison(a > b, &a, "<=", &b)
}

/// `a >= b`.
pub fn gte<T: PartialOrd + Debug>(a: T, b: T) -> ValidationResult {
    comparison(a >= b, &a, "<", &b)
}

/// `low <= x <= high`.
///
/// The failure message names the interval and the violated end:
/// `Value does not lie in [1, 10]: 11 > 10`.
pub fn between<T: PartialOrd + Debug>(x: T, low: T, high: T) -> ValidationResult {
    let interval = format!("[{low:?}, {high:?}]");
    if x < low {
        ValidationResult::failure(format!(
            "Value does not lie in {interval}: {x:?} < {low:?}"
        ))
    } else if x > high {
        ValidationResult::failure(format!(
            "Value does not lie in {interval}: {x:?} > {high:?}"
        ))
    } else {
        ValidationResult::success(format!("Value (x = {x:?}) lies in {interval}"))
    }
}

/// `negated` is the operator that holds when the comparison fails.
fn comparison<T: Debug>(holds: bool, a: &T, negated: &str, b: &T) -> ValidationResult {
    if holds {
        ValidationResult::success("Comparison satisfied")
    } else {
        ValidationResult::failure(format!("Comparison failed: {a:?} {negated} {b:?}"))
    }
}
