//! Signal-driven cancellation
//!
//! Signals flip a shared `CancelToken`; scans poll it between commits and stop early.
//! A second signal exits the process immediately.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Exit code used when the run was interrupted
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Shared cancellation flag, cheap to clone into each scan
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        // Release pairs with the Acquire load in is_cancelled
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Owns the token and wires process signals to it
#[derive(Debug, Default)]
pub struct ShutdownCoordinator {
    token: CancelToken,
    signal_count: Arc<AtomicUsize>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn trigger_shutdown(&self) {
        self.token.cancel();
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Install signal handlers; must be called from within a tokio runtime
    pub fn install_signal_handlers(&self) {
        #[cfg(unix)]
        {
            unsafe {
                libc::signal(libc::SIGPIPE, libc::SIG_DFL);
            }

            use tokio::signal::unix::{signal, SignalKind};
            let signals = [
                SignalKind::interrupt(),
                SignalKind::terminate(),
                SignalKind::hangup(),
                SignalKind::quit(),
            ];

            for kind in signals {
                let token = self.token.clone();
                let counter = Arc::clone(&self.signal_count);
                tokio::spawn(async move {
                    if let Ok(mut sig) = signal(kind) {
                        while sig.recv().await.is_some() {
                            on_signal(&token, &counter);
                        }
                    }
                });
            }
        }

        #[cfg(not(unix))]
        {
            let token = self.token.clone();
            let counter = Arc::clone(&self.signal_count);
            tokio::spawn(async move {
                while tokio::signal::ctrl_c().await.is_ok() {
                    on_signal(&token, &counter);
                }
            });
        }
    }
}

fn on_signal(token: &CancelToken, counter: &AtomicUsize) {
    let previous = counter.fetch_add(1, Ordering::AcqRel);
    token.cancel();
    if previous >= 1 {
        log::warn!("Second interrupt received; exiting");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }
    log::warn!("Interrupt received; stopping scans");
}
