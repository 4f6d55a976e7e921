//! Repository Scanner
//!
//! Scans one directory: open, resolve HEAD, walk history once, keep the commits
//! whose message matches. Every failure is folded into the returned report.

use std::time::Instant;

use unicode_width::UnicodeWidthStr;

use super::error::{ScanError, ScanResult};
use super::format::render;
use super::history::{CommitLog, LogProvider};
use super::types::{MatchLine, ScanReport, ScanTarget};
use crate::core::shutdown::CancelToken;

/// Scan a single target to completion
///
/// Blocking; the repository handle opened here is dropped before returning.
pub fn scan<P: LogProvider>(
    provider: &P,
    target: &ScanTarget,
    cancel: &CancelToken,
) -> ScanReport {
    let started = Instant::now();
    log::debug!(
        "Scanning {} for /{}/",
        target.directory().display(),
        target.pattern().as_str()
    );

    match collect_matches(provider, target, cancel) {
        Ok((matches, visited)) => {
            log::info!(
                "Scanned {}: {} of {} commits matched in {:?}",
                target.directory().display(),
                matches.len(),
                visited,
                started.elapsed()
            );
            ScanReport::succeeded(target.directory(), matches)
        }
        Err(e) => {
            // The report itself carries the user-facing error line
            log::info!(
                "Scan of {} failed ({}): {}",
                target.directory().display(),
                e.kind(),
                e
            );
            ScanReport::failed(e)
        }
    }
}

/// Walk the history and collect matches; any error discards what was collected
fn collect_matches<P: LogProvider>(
    provider: &P,
    target: &ScanTarget,
    cancel: &CancelToken,
) -> ScanResult<(Vec<MatchLine>, usize)> {
    let history = provider.open(target.directory())?;
    let head = history.head()?;

    let mut matches = Vec::new();
    let mut visited = 0usize;
    for commit in history.walk(head)? {
        if cancel.is_cancelled() {
            return Err(ScanError::Cancelled {
                directory: target.directory().to_path_buf(),
            });
        }

        let commit = commit?;
        visited += 1;

        if target.pattern().matches(&commit.message) {
            let available = target.width().saturating_sub(commit.id.width());
            matches.push(MatchLine {
                summary: render(&commit.message, available),
                id: commit.id,
            });
        }
    }

    Ok((matches, visited))
}
