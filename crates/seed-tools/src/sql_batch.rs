//! Line-oriented formatting of SQL dump files.
//!
//! Each non-blank line of the input is treated as one statement. Statements
//! are numbered from 1, printed, and written to the output file as
//! `-- <n>` blocks separated by blank lines. Statements that span several
//! lines are not reassembled; lines that do not end in `;` are counted so
//! the operator can spot them.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::SqlBatchConfig;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Outcome of formatting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    pub statements: usize,
    /// Statements whose trimmed text does not end with `;`.
    pub suspect_lines: usize,
    pub output: PathBuf,
}

/// Splits on line breaks (`\n` or `\r\n`) and drops lines that are blank after trimming.
pub fn split_statements(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

pub fn statement_header(index: usize) -> String {
    format!("-- {}", index + 1)
}

/// Joins `-- <n>\n<statement>` blocks with blank lines.
pub fn render_document(statements: &[&str]) -> String {
    statements
        .iter()
        .enumerate()
        .map(|(i, statement)| format!("{}\n{statement}", statement_header(i)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Writes each statement under its numbered header.
pub fn print_statements(out: &mut impl Write, statements: &[&str]) -> io::Result<()> {
    for (i, statement) in statements.iter().enumerate() {
        writeln!(out, "{}", statement_header(i))?;
        writeln!(out, "{statement}")?;
    }
    out.flush()
}

pub fn count_suspect_lines(statements: &[&str]) -> usize {
    statements
        .iter()
        .filter(|statement| !statement.trim_end().ends_with(';'))
        .count()
}

/// Reads `config.input`, writes the numbered document to `config.output`
/// (replacing any existing file), then prints the statements to `out`.
///
/// A failure to print (for example a closed pipe on stdout) is logged and
/// does not fail the run; the output file is already on disk by then.
pub fn format_file(
    config: &SqlBatchConfig,
    out: &mut impl Write,
) -> Result<FormatReport, FormatError> {
    let contents = std::fs::read_to_string(&config.input).map_err(|source| FormatError::Read {
        path: config.input.clone(),
        source,
    })?;

    let statements = split_statements(&contents);
    info!(
        "Found {} statements in {}",
        statements.len(),
        config.input.display()
    );

    let suspect_lines = count_suspect_lines(&statements);
    if suspect_lines > 0 {
        warn!(
            "{} line(s) do not end with ';' and may be fragments of multi-line statements",
            suspect_lines
        );
    }

    std::fs::write(&config.output, render_document(&statements)).map_err(|source| {
        FormatError::Write {
            path: config.output.clone(),
            source,
        }
    })?;
    info!("Wrote formatted batch to {}", config.output.display());

    if let Err(e) = print_statements(out, &statements) {
        warn!("Failed to print statements: {e}");
    }

    Ok(FormatReport {
        statements: statements.len(),
        suspect_lines,
        output: config.output.clone(),
    })
}
