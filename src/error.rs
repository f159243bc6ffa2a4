use std::path::PathBuf;

/// Top-level error type for the planner.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ledger file exists but is not valid JSON in the expected shape.
    /// The store fails fast instead of resetting, so the file can still be
    /// repaired by hand.
    #[error("ledger file {path} is corrupt: {source}")]
    StoreCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode ledger: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{field} must be a finite number, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
