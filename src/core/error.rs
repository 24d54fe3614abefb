use std::path::PathBuf;

/// Errors produced by core `vcm` operations.
///
/// Every variant is fatal: the CLI propagates it to the entry point, which
/// prints the message and exits non-zero. There is no recoverable path.
#[derive(Debug, thiserror::Error)]
pub enum VcmError {
    #[error("unknown version control system: {0} (expected git or svn)")]
    UnknownVcs(String),

    #[error("identifier not found in catalog: {0}")]
    IdentifierNotFound(String),

    #[error("dot-folder is already a symbolic link: {}", .0.display())]
    AlreadyLinked(PathBuf),

    #[error("destination already exists in storage: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("move did not take effect, source still present: {}", .0.display())]
    MoveIncomplete(PathBuf),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to read catalog: {0}")]
    CatalogRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write catalog: {0}")]
    CatalogWrite(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
