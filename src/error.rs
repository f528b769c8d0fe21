use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MocktailError {
    #[error("working directory error: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("non-finite number cannot be represented in JSON")]
    NonFiniteNumber,
}

pub type Result<T> = std::result::Result<T, MocktailError>;
