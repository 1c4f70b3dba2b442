use std::io;

use cpv_diagnostic::DiagnosticKind;
use pretty_assertions::assert_eq;

use super::*;
use crate::Reader;

/// Run `f` against a writer over an in-memory buffer and return the text.
fn render(f: impl FnOnce(&mut Writer<'_>) -> Result<()>) -> String {
    let mut out = Vec::new();
    {
        let mut writer = Writer::borrowed(&mut out);
        f(&mut writer).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn whitespace_helpers() {
    let text = render(|w| {
        w.write_char('a')?;
        w.write_space()?;
        w.write_char('b')?;
        w.write_newline(false)?;
        w.write_str("c")?;
        w.write_newline(true)
    });
    assert_eq!(text, "a b\nc\r\n");
}

#[test]
fn integers_are_canonical() {
    let text = render(|w| {
        w.write_integer(-2_147_483_648i32)?;
        w.write_space()?;
        w.write_integer(0u8)?;
        w.write_space()?;
        w.write_integer(u64::MAX)
    });
    assert_eq!(text, "-2147483648 0 18446744073709551615");
}

#[test]
fn float_with_fixed_decimals() {
    assert_eq!(render(|w| w.write_float(1.23456f64, Some(2))), "1.23");
    assert_eq!(render(|w| w.write_float(2.0f64, Some(0))), "2");
    assert_eq!(render(|w| w.write_float(0.5f32, None)), "0.5");
}

#[test]
fn float_honors_comma_separator() {
    let text = render(|w| {
        w.with_comma_as_decimal_separator();
        w.write_float(-1.25f64, None)?;
        w.write_space()?;
        w.with_dot_as_decimal_separator();
        w.write_float(1.25f64, None)
    });
    assert_eq!(text, "-1,25 1.25");
}

#[test]
fn iter_and_grid_layout() {
    let text = render(|w| w.write_iter([1, 2, 3], ", "));
    assert_eq!(text, "1, 2, 3");

    let grid = vec![vec![1, 2], vec![3, 4]];
    let text = render(|w| w.write_grid(&grid));
    assert_eq!(text, "1 2\n3 4");
}

#[test]
fn generic_write_dispatch() {
    let text = render(|w| {
        w.write(&vec![7u16, 8])?;
        w.write_newline(false)?;
        w.write("word")?;
        w.write_space()?;
        w.write(&'x')
    });
    assert_eq!(text, "7 8\nword x");
}

#[test]
fn closed_writer_reports_output_failure() {
    let mut out = Vec::new();
    let mut writer = Writer::borrowed(&mut out);
    writer.close().unwrap();
    writer.close().unwrap();
    let err = writer.write_space().unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::OutputFailure);
}

struct Refusing;

impl io::Write for Refusing {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "no space left"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_stream_reports_output_failure() {
    let mut writer = Writer::owned(Refusing);
    let err = writer.write_str("hello").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::OutputFailure);
    assert!(err.message.contains("no space left"));
}

#[test]
fn create_in_missing_directory_is_open_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = Writer::create(dir.path().join("nope").join("out.txt")).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::OpenFailure);
}

#[test]
fn file_output_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    {
        let mut writer = Writer::create(&path).unwrap();
        writer.write_integer(3u32).unwrap();
        writer.write_newline(false).unwrap();
        writer.write_iter([-1i64, 0, 42], " ").unwrap();
        writer.write_newline(false).unwrap();
    }
    let mut reader = Reader::open(&path).unwrap();
    reader.make_strict();
    let n: u32 = reader.read_integer().unwrap();
    reader.must_be_newline().unwrap();
    let values: Vec<i64> = reader.read_vec(n as usize).unwrap();
    reader.must_be_newline().unwrap();
    reader.must_be_eof().unwrap();
    assert_eq!(values, vec![-1, 0, 42]);
}
