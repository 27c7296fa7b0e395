//! Error taxonomy for comparison runs.
//!
//! Any error aborts the whole run; no partial results are published.

use std::path::PathBuf;

/// Errors raised by the comparison engine
#[derive(Debug, thiserror::Error)]
pub enum CompareError
{
    /// The primary or a candidate document could not be opened or decoded
    #[error("failed to read document {}", path.display())]
    DocumentRead
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus directory could not be listed
    #[error("failed to list corpus directory {}", dir.display())]
    Scan
    {
        dir: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// A configured exclude glob does not compile
    #[error("invalid exclude pattern")]
    InvalidPattern(#[from] globset::Error),

    /// The worker pool could not be started
    #[error("failed to start worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl CompareError
{
    pub fn document_read(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self
    {
        CompareError::DocumentRead { path: path.into(), source }
    }

    /// Path of the offending document for read failures
    pub fn document(&self) -> Option<&std::path::Path>
    {
        match self
        {
            CompareError::DocumentRead { path, .. } => Some(path),
            _ => None,
        }
    }
}
