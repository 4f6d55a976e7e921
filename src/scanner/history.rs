//! Commit history access
//!
//! The scanner only needs three things from version control: open a directory,
//! resolve HEAD, and walk its ancestors newest first. `LogProvider` and `CommitLog`
//! capture exactly that, with `GitLogProvider` as the gix-backed implementation.

use std::path::Path;

use gix::bstr::ByteSlice;
use gix::revision::walk::Sorting;

use super::error::{ScanError, ScanResult};
use super::types::Commit;

/// Lazy, single-pass sequence of commits
pub type CommitWalk<'a> = Box<dyn Iterator<Item = ScanResult<Commit>> + 'a>;

/// Opens commit logs for directories
pub trait LogProvider: Send + Sync + 'static {
    type Log: CommitLog;

    fn open(&self, directory: &Path) -> ScanResult<Self::Log>;
}

/// Read-only view of one repository's history
pub trait CommitLog {
    type Head;

    /// Resolve the commit HEAD currently points at
    fn head(&self) -> ScanResult<Self::Head>;

    /// Walk from `head` through its ancestors, most recent commit time first
    fn walk(&self, head: Self::Head) -> ScanResult<CommitWalk<'_>>;
}

/// Commit logs backed by on-disk git repositories
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLogProvider;

impl LogProvider for GitLogProvider {
    type Log = GitLog;

    fn open(&self, directory: &Path) -> ScanResult<GitLog> {
        let problem = if !directory.exists() {
            Some("directory does not exist")
        } else if !directory.is_dir() {
            Some("not a directory")
        } else {
            None
        };
        if let Some(message) = problem {
            return Err(ScanError::Open {
                directory: directory.to_path_buf(),
                message: message.to_string(),
            });
        }

        let repository = gix::open(directory).map_err(|e| ScanError::Open {
            directory: directory.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(GitLog {
            directory: directory.to_path_buf(),
            repository,
        })
    }
}

/// History of a single git repository
///
/// Owns the repository handle; dropping the log releases it.
#[derive(Debug)]
pub struct GitLog {
    directory: std::path::PathBuf,
    repository: gix::Repository,
}

impl CommitLog for GitLog {
    type Head = gix::ObjectId;

    fn head(&self) -> ScanResult<gix::ObjectId> {
        self.repository
            .head_id()
            .map(|id| id.detach())
            .map_err(|e| ScanError::HeadResolution {
                directory: self.directory.clone(),
                message: e.to_string(),
            })
    }

    fn walk(&self, head: gix::ObjectId) -> ScanResult<CommitWalk<'_>> {
        let walk = self
            .repository
            .rev_walk([head])
            .sorting(Sorting::ByCommitTime(Default::default()))
            .all()
            .map_err(|e| ScanError::Traversal {
                directory: self.directory.clone(),
                message: e.to_string(),
            })?;

        let directory = self.directory.clone();
        Ok(Box::new(walk.map(move |info| {
            let traversal = |message: String| ScanError::Traversal {
                directory: directory.clone(),
                message,
            };

            let info = info.map_err(|e| traversal(e.to_string()))?;
            let commit = info.object().map_err(|e| traversal(e.to_string()))?;
            let message = commit
                .message_raw()
                .map_err(|e| traversal(format!("commit {}: {}", commit.id, e)))?;

            Ok(Commit::new(
                commit.id.to_string(),
                message.to_str_lossy().into_owned(),
            ))
        })))
    }
}
