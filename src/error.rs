use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqError {
    #[error("Could not open corpus at '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read failure in '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type FreqResult<T> = Result<T, FreqError>;
