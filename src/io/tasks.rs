//! Task assignment file reader.
//!
//! One row per task, with a header naming at least the machine column and
//! the processing time column. Other columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::config::CsvLayout;
use crate::error::{Error, Result};
use crate::models::TaskRecord;
use crate::validation::{check_duration, validate_records, ValidationError, ValidationErrorKind};

/// Reads task records from a CSV stream.
///
/// A completely empty stream yields no records. Unknown columns are
/// ignored.
///
/// # Errors
/// - `Validation` for missing columns, non-numeric, negative or
///   non-finite processing times, and empty machine ids (all rows are
///   checked before failing).
/// - `Csv` for structurally malformed input.
pub fn read_task_records<R: Read>(reader: R, layout: &CsvLayout) -> Result<Vec<TaskRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let (machine_idx, time_idx) = locate_columns(&headers, layout)?;

    let mut records = Vec::new();
    let mut errors = Vec::new();
    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        let context = format!("row {}", idx + 1);
        let machine = row.get(machine_idx).unwrap_or_default();
        let raw_time = row.get(time_idx).unwrap_or_default();

        match raw_time.parse::<f64>() {
            Ok(time) => {
                if let Some(err) = check_duration(&context, time) {
                    errors.push(err);
                }
                records.push(TaskRecord::new(machine, time));
            }
            Err(_) => errors.push(ValidationError::new(
                ValidationErrorKind::NonNumericDuration,
                format!("{context}: processing time '{raw_time}' is not a number"),
            )),
        }
    }

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }
    validate_records(&records)?;

    debug!("read {} task record(s)", records.len());
    Ok(records)
}

/// Reads task records from a file.
///
/// # Errors
/// `FileAccess` if the file cannot be opened, `CsvFile` (naming the file)
/// for malformed CSV; otherwise as [`read_task_records`].
pub fn load_task_file(path: impl AsRef<Path>, layout: &CsvLayout) -> Result<Vec<TaskRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    read_task_records(file, layout).map_err(|e| e.in_file(path))
}

fn locate_columns(headers: &StringRecord, layout: &CsvLayout) -> Result<(usize, usize)> {
    let find = |name: &str| headers.iter().position(|h| h == name);
    let machine_idx = find(&layout.machine_column);
    let time_idx = find(&layout.processing_time_column);

    match (machine_idx, time_idx) {
        (Some(m), Some(t)) => Ok((m, t)),
        _ => {
            let missing = [
                (machine_idx, &layout.machine_column),
                (time_idx, &layout.processing_time_column),
            ]
            .into_iter()
            .filter(|(idx, _)| idx.is_none())
            .map(|(_, name)| {
                ValidationError::new(
                    ValidationErrorKind::MissingColumn,
                    format!("Missing column: {name}"),
                )
            })
            .collect();
            Err(Error::Validation(missing))
        }
    }
}
