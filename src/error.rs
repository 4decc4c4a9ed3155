//! Errors raised while loading, correcting and enriching survey data.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Which of the two input tables an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Stations,
    Base,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Stations => write!(f, "field stations"),
            Dataset::Base => write!(f, "base stations"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{dataset} file `{}` does not exist", path.display())]
    MissingInput { dataset: Dataset, path: PathBuf },

    #[error("file `{}` does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("columns {missing:?} not found in the {dataset} file")]
    ColumnMismatch {
        dataset: Dataset,
        missing: Vec<String>,
    },

    #[error("could not format time value `{value}`: {reason}")]
    TimeFormat { value: String, reason: &'static str },

    #[error("row {row}: column `{column}` holds `{value}`, expected a finite number")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("reference model request #{request} failed: {reason}")]
    Enrichment { request: usize, reason: String },

    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
