//src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected at least {expected} tab-separated fields, found {found}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("taxid {taxid} is not present in the nodes file")]
    UnknownTaxid { taxid: String },

    #[error("taxid {taxid} has no scientific name in the names file")]
    MissingName { taxid: String },

    #[error("lineage of taxid {taxid} did not reach the root within {max_depth} steps")]
    CycleDetected { taxid: String, max_depth: usize },
}

impl LineageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LineageError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineageError>;
