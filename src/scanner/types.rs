//! Scanner Data Types
//!
//! Value types flowing through a scan: what to scan, what the history yields, and
//! what comes back out.

use std::path::{Path, PathBuf};

use super::error::ScanError;
use super::pattern::SearchPattern;

/// One directory to scan, with everything the scanner needs to do it
#[derive(Debug, Clone)]
pub struct ScanTarget {
    directory: PathBuf,
    pattern: SearchPattern,
    width: usize,
}

impl ScanTarget {
    pub fn new(directory: impl Into<PathBuf>, pattern: SearchPattern, width: usize) -> Self {
        Self {
            directory: directory.into(),
            pattern,
            width,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn pattern(&self) -> &SearchPattern {
        &self.pattern
    }

    /// Total output columns available for one match line
    pub fn width(&self) -> usize {
        self.width
    }
}

/// A commit as seen through the commit log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: String,
    pub message: String,
}

impl Commit {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// A matching commit rendered for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLine {
    pub id: String,
    pub summary: String,
}

impl std::fmt::Display for MatchLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.summary)
    }
}

/// Final outcome of scanning one directory
///
/// Matches are kept in traversal order (newest first) and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub directory: PathBuf,
    pub outcome: Result<Vec<MatchLine>, ScanError>,
}

impl ScanReport {
    pub fn succeeded(directory: impl Into<PathBuf>, matches: Vec<MatchLine>) -> Self {
        Self {
            directory: directory.into(),
            outcome: Ok(matches),
        }
    }

    pub fn failed(error: ScanError) -> Self {
        Self {
            directory: error.directory().clone(),
            outcome: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Matches on success, empty on failure
    pub fn matches(&self) -> &[MatchLine] {
        match &self.outcome {
            Ok(matches) => matches,
            Err(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&ScanError> {
        self.outcome.as_ref().err()
    }
}
