use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected at least {expected} columns, found {found}")]
    MissingColumns {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: cannot parse {value:?} as a number")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("expected a series of {expected} periods, got {found}")]
    PeriodCount { expected: usize, found: usize },

    #[error("plot error: {0}")]
    Plot(String),

    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn plot(err: impl std::fmt::Display) -> Self {
        Self::Plot(err.to_string())
    }
}
