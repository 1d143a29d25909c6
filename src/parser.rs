//! Runner record parsing.
//!
//! Input is plain text, one `name,lap1,lap2` record per line. A read either
//! yields every record in the file or fails as a whole on the first bad line.

use crate::model::RunnerRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const FIELD_DELIMITER: char = ',';
const FIELDS_PER_RECORD: usize = 3;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid data format (line {line}: {reason})")]
    Format { line: usize, reason: FormatReason },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatReason {
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),
    #[error("could not convert '{0}' to a lap time")]
    LapTime(String),
}

/// Read all records from `path`, failing on the first malformed line.
///
/// Records parsed before the bad line are discarded along with the rest.
pub fn read_records_strict(path: &Path) -> Result<Vec<RunnerRecord>, ParseError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ParseError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ParseError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut records = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record = parse_line(trimmed).map_err(|reason| ParseError::Format {
            line: idx + 1,
            reason,
        })?;
        records.push(record);
    }

    tracing::debug!(path = %path.display(), count = records.len(), "parsed runner records");
    Ok(records)
}

/// Read records for a report run.
///
/// Any parse failure is reported on `console` and yields an empty list, so
/// callers only ever see "records" or "nothing". Only a failed console write
/// is returned as an error.
pub fn read_runner_data(
    path: &Path,
    console: &mut impl Write,
) -> std::io::Result<Vec<RunnerRecord>> {
    match read_records_strict(path) {
        Ok(records) => Ok(records),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding runner data");
            writeln!(console, "Error: {e}")?;
            Ok(Vec::new())
        }
    }
}

/// Parse one already-trimmed, non-empty line.
///
/// Lap fields tolerate surrounding whitespace; the name is kept as written.
pub fn parse_line(line: &str) -> Result<RunnerRecord, FormatReason> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELDS_PER_RECORD {
        return Err(FormatReason::FieldCount(fields.len()));
    }
    let lap1 = parse_lap(fields[1])?;
    let lap2 = parse_lap(fields[2])?;
    Ok(RunnerRecord::new(fields[0], lap1, lap2))
}

fn parse_lap(field: &str) -> Result<f64, FormatReason> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| FormatReason::LapTime(field.to_string()))
}
