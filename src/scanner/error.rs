//! Scanner Error Types
//!
//! Every variant is scoped to a single directory. None of these abort a run; the
//! orchestrator attaches them to that directory's report and moves on.

use std::path::PathBuf;

/// Per-directory scan failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// Directory missing, unreadable, or not a git repository
    #[error("failed to open repository: {message}")]
    Open { directory: PathBuf, message: String },

    /// HEAD could not be resolved to a commit (e.g. no commits yet)
    #[error("failed to resolve HEAD: {message}")]
    HeadResolution { directory: PathBuf, message: String },

    /// The history walk failed part way through
    #[error("failed to walk commit history: {message}")]
    Traversal { directory: PathBuf, message: String },

    /// The run was interrupted before this directory finished
    #[error("scan cancelled")]
    Cancelled { directory: PathBuf },

    /// The scan task itself died (panic or runtime shutdown)
    #[error("scan task failed: {message}")]
    Task { directory: PathBuf, message: String },
}

impl ScanError {
    /// Directory the failure belongs to
    pub fn directory(&self) -> &PathBuf {
        match self {
            ScanError::Open { directory, .. }
            | ScanError::HeadResolution { directory, .. }
            | ScanError::Traversal { directory, .. }
            | ScanError::Cancelled { directory }
            | ScanError::Task { directory, .. } => directory,
        }
    }

    /// Short stable label, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::Open { .. } => "open",
            ScanError::HeadResolution { .. } => "head",
            ScanError::Traversal { .. } => "traversal",
            ScanError::Cancelled { .. } => "cancelled",
            ScanError::Task { .. } => "task",
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
