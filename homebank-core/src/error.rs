//! Error taxonomy shared by all converters.
//!
//! Every variant aborts the run; there is no per-row recovery.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse {}: {message}", path.display())]
    FileParse { path: PathBuf, message: String },

    #[error("no valid {format} header row found")]
    MissingHeader { format: &'static str },

    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid date '{value}': {source}")]
    DateParse {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line {line}: invalid amount '{value}'")]
    AmountParse { line: usize, value: String },

    #[error("cannot write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Input line the error points at, if it is a row-level error
    pub fn line(&self) -> Option<usize> {
        match self {
            ConvertError::MalformedRow { line, .. }
            | ConvertError::DateParse { line, .. }
            | ConvertError::AmountParse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
