//! Entry glue for validator binaries.

use std::path::Path;
use std::process::ExitCode;

use cpv_diagnostic::Result;
use cpv_scan::Reader;
use tracing::{debug, info};

/// Open `input` and run `validate` over it.
///
/// The reader starts lenient; validators that need the strict grammar call
/// [`Reader::make_strict`] first.
pub fn validate_file<F>(input: impl AsRef<Path>, validate: F) -> Result<()>
where
    F: FnOnce(&mut Reader<'_>) -> Result<()>,
{
    let input = input.as_ref();
    let mut reader = Reader::open(input)?;
    debug!(input = %input.display(), "validating");
    validate(&mut reader)
}

/// Run a validator as a process: `SUCCESS` when the input is valid,
/// `FAILURE` otherwise.
///
/// Failures are reported on standard error. Assertion failures from
/// `ensure_valid!` have already printed their framed report and are not
/// printed twice.
pub fn run_validator<F>(input: impl AsRef<Path>, validate: F) -> ExitCode
where
    F: FnOnce(&mut Reader<'_>) -> Result<()>,
{
    crate::init_tracing();
    match validate_file(input, validate) {
        Ok(()) => {
            info!("input is valid");
            ExitCode::SUCCESS
        }
        Err(diagnostic) => {
            if diagnostic.call_site().is_none() {
                eprintln!("{}", diagnostic.report());
            }
            ExitCode::FAILURE
        }
    }
}
