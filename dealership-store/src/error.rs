use std::io;
use std::path::PathBuf;

/// Flat-file persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dealership file {0} is empty")]
    Empty(PathBuf),

    #[error("Malformed dealership header in {path}: {line:?}")]
    MalformedHeader { path: PathBuf, line: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
