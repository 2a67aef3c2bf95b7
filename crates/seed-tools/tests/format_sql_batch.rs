//! File-level tests for the SQL batch formatter.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use seed_tools::config::SqlBatchConfig;
use seed_tools::sql_batch::{FormatError, format_file};
use uuid::Uuid;

/// A fresh scratch directory under the system temp dir.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seed-tools-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

#[test]
fn test_formats_file_and_overwrites_output() {
    let dir = scratch_dir();
    let config = SqlBatchConfig {
        input: dir.join("dump.sql"),
        output: dir.join("dump.numbered.sql"),
    };
    fs::write(&config.input, "INSERT A;\n\nINSERT B;\n").unwrap();
    fs::write(&config.output, "stale contents that must disappear").unwrap();

    let mut printed: Vec<u8> = Vec::new();
    let report = format_file(&config, &mut printed).unwrap();

    assert_eq!(report.statements, 2);
    assert_eq!(report.suspect_lines, 0);
    assert_eq!(report.output, config.output);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "-- 1\nINSERT A;\n\n-- 2\nINSERT B;"
    );

    let printed = String::from_utf8(printed).unwrap();
    assert_eq!(printed.matches("-- ").count(), 2);
    assert!(printed.find("INSERT A;").unwrap() < printed.find("INSERT B;").unwrap());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_input_is_a_read_error() {
    let dir = scratch_dir();
    let config = SqlBatchConfig {
        input: dir.join("missing.sql"),
        output: dir.join("out.sql"),
    };

    let err = format_file(&config, &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, FormatError::Read { .. }));
    assert!(!config.output.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unwritable_output_is_a_write_error() {
    let dir = scratch_dir();
    let config = SqlBatchConfig {
        input: dir.join("dump.sql"),
        output: dir.join("no-such-dir").join("out.sql"),
    };
    fs::write(&config.input, "SELECT 1;\n").unwrap();

    let err = format_file(&config, &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, FormatError::Write { .. }));

    let _ = fs::remove_dir_all(&dir);
}

/// A writer whose reader has gone away, like stdout piped into `head -1`.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn test_output_file_is_written_when_printing_fails() {
    let dir = scratch_dir();
    let config = SqlBatchConfig {
        input: dir.join("dump.sql"),
        output: dir.join("dump.numbered.sql"),
    };
    fs::write(&config.input, "INSERT A;\n\nINSERT B;\n").unwrap();

    let report = format_file(&config, &mut ClosedPipe).unwrap();

    assert_eq!(report.statements, 2);
    assert!(config.output.exists());
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "-- 1\nINSERT A;\n\n-- 2\nINSERT B;"
    );

    let _ = fs::remove_dir_all(&dir);
}
