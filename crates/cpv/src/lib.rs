//! cpv: check that contest input files follow their exact grammar.
//!
//! A validator reads the input with a [`Reader`], asserting whitespace and
//! ranges as it goes, and states the remaining constraints with the
//! validation predicates and [`ensure_valid!`]:
//!
//! ```ignore
//! use cpv::{all_between, ensure_valid, sorted, Reader, Result};
//!
//! fn validate(r: &mut Reader<'_>) -> Result<()> {
//!     r.make_strict();
//!     let n: usize = r.read_integer_in(1, 300_000)?;
//!     r.must_be_newline()?;
//!     let a: Vec<i64> = r.read_vec(n)?;
//!     ensure_valid!(all_between(&a, -1_000_000_000, 1_000_000_000) & sorted(&a, true, false));
//!     r.must_be_newline()?;
//!     r.must_be_eof()
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     let path = std::env::args().nth(1).unwrap_or_default();
//!     cpv::run_validator(path, validate)
//! }
//! ```

mod runner;

pub use cpv_diagnostic::{CallSite, Diagnostic, DiagnosticKind, Location, Position, Result};
pub use cpv_scan::{
    is_digit, is_space, DecimalSeparator, Float, Integer, Readable, Reader, ReaderConfig, Signed,
    SourceCursor, Unsigned, Writable, Writer,
};
pub use cpv_validate::{
    all, all_between, between, distinct, ensure_valid, eq, gt, gte, lt, lte, neq, sorted,
    sorted_by, ValidationResult,
};
pub use runner::{run_validator, validate_file};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so validators stay silent by
/// default. `RUST_LOG` is the filter (e.g. `cpv_scan=trace`); setting
/// `CPV_LOG_TREE` switches from flat lines to an indented tree. Logs go to
/// standard error. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os("CPV_LOG_TREE").is_some();
        let flat = (!tree).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
        });
        let hierarchical = tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true));
        // An already installed global subscriber wins.
        if let Err(err) = tracing_subscriber::registry()
            .with(flat)
            .with(hierarchical)
            .with(EnvFilter::from_default_env())
            .try_init()
        {
            tracing::debug!(%err, "global subscriber already installed");
        }
    });
}
