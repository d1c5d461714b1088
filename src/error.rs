use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("'{}' is neither a jar file nor a directory", path.display())]
    InvalidPathKind { path: PathBuf },
    #[error("failed to open jar {}: {source}", path.display())]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read jar {}: {source}", path.display())]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FinderError>;
