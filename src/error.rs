//! Crate-wide error type.
//!
//! Evaluation itself is pure and only fails on malformed input, so most
//! variants describe where the input came from rather than what the
//! evaluator was doing.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by loading, evaluating, and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file is missing or unreadable, or an output location
    /// cannot be written.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is structurally readable but semantically invalid.
    #[error("{}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    /// The CSV stream itself is malformed.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV file on disk is malformed.
    #[error("malformed CSV in {}: {source}", path.display())]
    CsvFile {
        /// Offending file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A file search pattern is invalid.
    #[error("invalid search pattern {pattern}: {source}")]
    Pattern {
        /// Pattern as built from the inputs.
        pattern: String,
        /// Underlying pattern error.
        #[source]
        source: glob::PatternError,
    },

    /// A configuration file could not be read or parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Parser or reader message.
        message: String,
    },

    /// A report could not be serialized.
    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// The chart backend failed.
    #[error("plot rendering failed: {0}")]
    Plot(String),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Attaches the source file to a bare CSV error.
    ///
    /// Other variants are returned unchanged.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Csv(source) => Self::CsvFile {
                path: path.into(),
                source,
            },
            other => other,
        }
    }

    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn format_validation(errors: &[ValidationError]) -> String {
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    format!("invalid input: {}", messages.join("; "))
}
