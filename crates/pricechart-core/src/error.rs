// File: crates/pricechart-core/src/error.rs
// Summary: Error type for dataset loading and control-value parsing.

use std::path::PathBuf;

/// Failures surfaced by the core. Malformed numeric fields are never errors;
/// only loading the dataset and parsing control selections can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid {control} selection `{value}`")]
    InvalidSelection { control: &'static str, value: String },

    #[error("invalid change event `{0}`: expected key=value pairs")]
    InvalidEvent(String),
}

pub type Result<T> = std::result::Result<T, Error>;
