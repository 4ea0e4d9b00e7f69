use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Home directory not found; pass --projects-dir explicitly")]
    HomeDirNotFound,

    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure to read one `sessions-index.json`. Never fatal: the parser turns
/// these into warnings and carries on with the remaining projects.
#[derive(Debug, Error)]
pub(crate) enum IndexError {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
