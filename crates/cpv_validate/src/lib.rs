//! Validation algebra for contest input validators.
//!
//! A [`ValidationResult`] is either a success message or a failure
//! [`Diagnostic`](cpv_diagnostic::Diagnostic). Predicates produce them,
//! `!`, `&` and `|` combine them, and [`ensure_valid!`] turns a failure into
//! an early return that reports where the check was written.
//!
//! ```text
//! let n: u32 = reader.read()?;
//! ensure_valid!(between(n, 2, 100_000));
//! let f: Vec<u32> = reader.read_vec(k)?;
//! ensure_valid!(all_between(&f, 0, n - 1) & sorted(&f, true, false));
//! ```
//!
//! Combined results keep both operands' messages as an indented tree, so a
//! failure three levels deep still explains which leaf predicate fired:
//!
//! ```text
//! NOT
//!   Elements are equal
//! ```

mod compare;
mod result;
mod sequence;

pub use compare::{between, eq, gt, gte, lt, lte, neq};
pub use result::ValidationResult;
pub use sequence::{all, all_between, distinct, sorted, sorted_by};

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}

/// Return early from the enclosing function if a validation failed.
///
/// On failure the diagnostic is tagged with the call site, its framed
/// report is written to standard error and logged at error level, and
/// `Err(diagnostic.into())` is returned. The enclosing function's error
/// type must implement `From<Diagnostic>`.
///
/// # Usage
///
/// ```ignore
/// fn validate(r: &mut Reader<'_>) -> cpv_diagnostic::Result<()> {
///     let n: i32 = r.read()?;
///     ensure_valid!(between(n, 1, 1000));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure_valid {
    ($result:expr $(,)?) => {{
        if let $crate::ValidationResult::Failure(diagnostic) = $result {
            let diagnostic = diagnostic.with_call_site(::std::file!(), ::std::line!());
            let report = diagnostic.report();
            ::std::eprintln!("{report}");
            $crate::__private::tracing::error!(%report, "validation failed");
            return ::std::result::Result::Err(::std::convert::From::from(diagnostic));
        }
    }};
}
