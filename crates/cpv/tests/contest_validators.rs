//! Validators for real contest inputs, run against valid and broken files.

#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use cpv::{
    all, all_between, between, ensure_valid, lte, neq, validate_file, DiagnosticKind, Reader,
    Result,
};
use pretty_assertions::assert_eq;

// === OII 2022: bus ===

const BUS_MIN_N: u32 = 2;
const BUS_MAX_N: u32 = 100_000;
const BUS_MIN_L: u32 = 1;
const BUS_MAX_L: u32 = 100_000;
const BUS_MIN_K: usize = 2;
const BUS_MAX_SUM_K: usize = 300_000;

fn validate_bus(r: &mut Reader<'_>) -> Result<()> {
    r.make_strict();

    let n: u32 = r.read()?;
    ensure_valid!(between(n, BUS_MIN_N, BUS_MAX_N));
    r.must_be_space()?;

    let l: u32 = r.read()?;
    ensure_valid!(between(l, BUS_MIN_L, BUS_MAX_L));
    r.must_be_newline()?;

    let mut sum_k = 0;
    for _ in 0..l {
        let k = r.read_integer_in(BUS_MIN_K, usize::MAX)?;
        sum_k += k;
        r.must_be_space()?;

        let stops: Vec<u32> = r.read_vec(k)?;
        ensure_valid!(all_between(&stops, 0, n - 1));

        // Consecutive stops differ.
        let mut prev = stops[0];
        ensure_valid!(all(&stops[1..], |&stop| {
            let result = neq(prev, stop);
            prev = stop;
            result
        }));

        r.must_be_newline()?;
    }

    ensure_valid!(lte(sum_k, BUS_MAX_SUM_K));
    r.must_be_eof()
}

#[test]
fn bus_valid_input() {
    let mut r = Reader::from_bytes("8 2\n3 0 5 7\n2 1 6\n");
    validate_bus(&mut r).unwrap();
}

#[test]
fn bus_repeated_stop() {
    let mut r = Reader::from_bytes("8 2\n3 0 5 7\n2 1 1\n");
    let err = validate_bus(&mut r).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::ValidationFailure);
    assert_eq!(
        err.message,
        "Failed check for element 0: Elements are not unequal: 1 == 1"
    );
    assert!(err.call_site().is_some());
}

#[test]
fn bus_stop_out_of_range() {
    let mut r = Reader::from_bytes("8 1\n2 0 8\n");
    let err = validate_bus(&mut r).unwrap_err();
    assert_eq!(
        err.message,
        "Failed check for element 1: Value does not lie in [0, 7]: 8 > 7"
    );
}

#[test]
fn bus_line_with_single_stop() {
    let mut r = Reader::from_bytes("8 1\n1 3\n");
    let err = validate_bus(&mut r).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::RangeViolation);
    assert!(err.message.starts_with("Expected 2 <= n <= "));
}

#[test]
fn bus_double_space() {
    let mut r = Reader::from_bytes("8 1\n2  0 3\n");
    let err = validate_bus(&mut r).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::UnexpectedCharacter);
}

#[test]
fn bus_missing_final_newline() {
    let mut r = Reader::from_bytes("8 1\n2 0 3");
    let err = validate_bus(&mut r).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::EndOfInput);
}

// === OII 2023: bastioni ===

fn validate_bastioni(r: &mut Reader<'_>) -> Result<()> {
    r.make_strict();
    let n: usize = r.read_integer_in(1, 300_000)?;
    r.must_be_newline()?;
    r.read_string_of("=#<>", n..=n)?;
    r.must_be_newline()?;
    r.must_be_eof()
}

#[test]
fn bastioni_valid_input() {
    let mut r = Reader::from_bytes("5\n=#<>=\n");
    validate_bastioni(&mut r).unwrap();
}

#[test]
fn bastioni_bad_character() {
    let mut r = Reader::from_bytes("5\n=#<x=\n");
    let err = validate_bastioni(&mut r).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::RangeViolation);
    assert_eq!(err.message, "Invalid character 'x' at position 3");
}

#[test]
fn bastioni_wrong_length() {
    let mut r = Reader::from_bytes("5\n=#<\n");
    let err = validate_bastioni(&mut r).unwrap_err();
    assert_eq!(err.message, "Expected 5 <= len(string) <= 5");
}

#[test]
fn bastioni_trailing_garbage() {
    let mut r = Reader::from_bytes("1\n=\n\n");
    let err = validate_bastioni(&mut r).unwrap_err();
    assert_eq!(err.message, "Expected EOF");
}

// === OIS 2020: islands ===

fn validate_islands(r: &mut Reader<'_>) -> Result<()> {
    r.make_strict();
    let rows: usize = r.read_integer_in(1, 1000)?;
    r.must_be_space()?;
    let cols: usize = r.read_integer_in(1, 1000)?;
    r.must_be_newline()?;

    let map: Vec<Vec<u16>> = r.read_grid(rows, cols)?;
    ensure_valid!(all(&map, |row| all_between(row, 0u16, 1)));

    r.must_be_newline()?;
    r.must_be_eof()
}

#[test]
fn islands_valid_input() {
    let mut r = Reader::from_bytes("2 3\n0 1 0\n1 1 0\n");
    validate_islands(&mut r).unwrap();
}

#[test]
fn islands_cell_out_of_range() {
    let mut r = Reader::from_bytes("2 3\n0 1 0\n1 2 0\n");
    let err = validate_islands(&mut r).unwrap_err();
    assert_eq!(
        err.message,
        "Failed check for element 1: Failed check for element 1: \
         Value does not lie in [0, 1]: 2 > 1"
    );
}

#[test]
fn islands_short_row() {
    let mut r = Reader::from_bytes("2 3\n0 1\n1 1 0\n");
    let err = validate_islands(&mut r).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::UnexpectedCharacter);
    assert_eq!(
        err.position().map(|p| (p.line, p.column)),
        Some((2, 4))
    );
}

// === From a file ===

#[test]
fn validate_file_runs_over_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "3\n<=>\n").unwrap();
    validate_file(&path, validate_bastioni).unwrap();

    std::fs::write(&path, "3\n<=>>\n").unwrap();
    let err = validate_file(&path, validate_bastioni).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::RangeViolation);
}

#[test]
fn validate_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_file(dir.path().join("absent.txt"), validate_bastioni).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::OpenFailure);
}
