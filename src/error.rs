/// Error types for documentation loading.
///
/// Every variant carries the path that failed so the walker can log it and
/// move on; none of these ever reach a query caller.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("failed to list directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocsError>;
