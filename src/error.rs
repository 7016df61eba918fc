use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),
    #[error("Cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
impl ExploreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExploreError::Io {
            path: path.into(),
            source,
        }
    }
}
