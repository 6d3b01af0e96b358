use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    #[error("invalid id {0}")]
    InvalidId(i64),
    #[error("unable to access {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to get user's home directory")]
    HomeDirUnavailable,
    #[error("failed to write output")]
    Output(#[source] std::io::Error),
    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Problems with the command line itself, detected before storage is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("invalid id \"{0}\"")]
    InvalidId(String),
    #[error("expected {expected} ids but got {actual}")]
    WrongIdCount { expected: usize, actual: usize },
    #[error("missing description")]
    MissingDescription,
}

impl TodoError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TodoError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}
