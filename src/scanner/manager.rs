//! Scan Orchestrator
//!
//! Runs one scan per target on tokio's blocking pool, all at once, and hands the
//! reports back in the order the targets were given. Scans share nothing but the
//! provider and the cancel token, so one failing directory never affects another.

use std::sync::Arc;

use futures::future::join_all;

use super::error::ScanError;
use super::history::LogProvider;
use super::task::scan;
use super::types::{ScanReport, ScanTarget};
use crate::core::shutdown::CancelToken;

/// Coordinates concurrent scans over a shared log provider
#[derive(Debug)]
pub struct ScannerManager<P: LogProvider> {
    provider: Arc<P>,
    cancel: CancelToken,
}

impl<P: LogProvider> ScannerManager<P> {
    pub fn new(provider: P, cancel: CancelToken) -> Self {
        Self {
            provider: Arc::new(provider),
            cancel,
        }
    }

    /// Scan every target concurrently and wait for all of them
    ///
    /// The returned reports line up one-to-one with `targets`. Failed scans are
    /// reports like any other and are never retried.
    pub async fn run_all(&self, targets: Vec<ScanTarget>) -> Vec<ScanReport> {
        log::debug!("Starting {} scan(s)", targets.len());

        let handles: Vec<_> = targets
            .into_iter()
            .map(|target| {
                let provider = Arc::clone(&self.provider);
                let cancel = self.cancel.clone();
                let directory = target.directory().to_path_buf();
                let handle = tokio::task::spawn_blocking(move || {
                    scan(provider.as_ref(), &target, &cancel)
                });
                (directory, handle)
            })
            .collect();

        let (directories, handles): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
        let joined = join_all(handles).await;

        let reports: Vec<ScanReport> = directories
            .into_iter()
            .zip(joined)
            .map(|(directory, joined)| match joined {
                Ok(report) => report,
                Err(e) => {
                    log::info!(
                        "Scan task for {} did not finish: {}",
                        directory.display(),
                        e
                    );
                    ScanReport::failed(ScanError::Task {
                        directory,
                        message: e.to_string(),
                    })
                }
            })
            .collect();

        let failed = reports.iter().filter(|r| !r.is_success()).count();
        log::debug!(
            "All scans finished: {} succeeded, {} failed",
            reports.len() - failed,
            failed
        );
        reports
    }
}
