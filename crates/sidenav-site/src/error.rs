//! Sidebar error types.

use std::path::PathBuf;

/// Error raised while building the sidebar.
///
/// Missing and empty tracks are not errors; only unexpected filesystem
/// failures (permissions, a track path that is a regular file) end up here.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Reading a track directory failed.
    #[error("Failed to read track directory {}: {source}", path.display())]
    Io {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SidebarError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
