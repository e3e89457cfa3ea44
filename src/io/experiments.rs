//! Experiment results file reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{Error, Result};
use crate::models::ExperimentRecord;

/// Reads experiment records from a CSV stream.
pub fn read_experiment_records<R: Read>(reader: R) -> Result<Vec<ExperimentRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for record in rdr.deserialize::<ExperimentRecord>() {
        records.push(record?);
    }
    Ok(records)
}

/// Reads experiment records from a file.
///
/// Malformed rows are reported as `CsvFile` with the file path.
pub fn load_experiment_file(path: impl AsRef<Path>) -> Result<Vec<ExperimentRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    read_experiment_records(file).map_err(|e| e.in_file(path))
}
