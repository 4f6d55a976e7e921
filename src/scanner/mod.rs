//! Scanner Component
//!
//! Searches commit history for messages matching a pattern.
//!
//! ## Pieces
//!
//! - **history**: `LogProvider`/`CommitLog` traits and the gix-backed `GitLogProvider`
//! - **pattern**: compiled search pattern
//! - **format**: first-line, width-aware message rendering
//! - **task**: scans one repository into a `ScanReport`
//! - **manager**: `ScannerManager` fans scans out concurrently and collects reports in order

pub mod error;
pub mod format;
pub mod history;
pub mod manager;
pub mod pattern;
pub mod task;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{ScanError, ScanResult};
pub use history::{CommitLog, GitLogProvider, LogProvider};
pub use manager::ScannerManager;
pub use pattern::SearchPattern;
pub use types::{Commit, MatchLine, ScanReport, ScanTarget};
