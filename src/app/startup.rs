//! Application entry point
//!
//! `run` takes the raw arguments and the output streams, and turns every outcome
//! into a single exit code. Fatal problems (usage, config, pattern) stop before any
//! scanning; per-directory failures are only reported.

use std::ffi::OsString;
use std::io::Write;

use clap::{CommandFactory, FromArgMatches};

use super::cli::config::is_disabled_log_file;
use super::cli::{Args, Config};
use super::error::AppResult;
use super::output::write_report;
use super::terminal;
use crate::core::logging::{configure_logging, LogSettings, DEFAULT_LOG_LEVEL};
use crate::core::shutdown::{CancelToken, INTERRUPTED_EXIT_CODE};
use crate::core::styles::palette_to_clap;
use crate::core::version::long_version;
use crate::scanner::{GitLogProvider, ScanTarget, ScannerManager, SearchPattern};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// What the process knows about its surroundings before parsing arguments
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Width of the attached terminal, if there is one
    pub terminal_width: Option<usize>,
    /// Colour default when neither flag nor config decides
    pub color: bool,
    pub cancel: CancelToken,
}

impl RunContext {
    /// Probe the real terminal
    pub fn detect(cancel: CancelToken) -> Self {
        Self {
            terminal_width: terminal::detect_width(),
            color: terminal::detect_color(),
            cancel,
        }
    }
}

/// Parse `args`, search every configured directory and report to `out`/`err`
pub async fn run<I, T, O, E>(args: I, context: &RunContext, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let command = Args::command()
        .styles(palette_to_clap(context.color))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version());

    let args = match command
        .try_get_matches_from(args)
        .and_then(|matches| Args::from_arg_matches(&matches))
    {
        Ok(args) => args,
        Err(e) => {
            let rendered = if context.color {
                e.render().ansi().to_string()
            } else {
                e.render().to_string()
            };
            return if e.use_stderr() {
                let _ = write!(err, "{}", rendered);
                EXIT_FAILURE
            } else {
                let _ = write!(out, "{}", rendered);
                EXIT_SUCCESS
            };
        }
    };

    match search(&args, context, out, err).await {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Run aborted: {:?}", e);
            let _ = writeln!(err, "{}", e);
            EXIT_FAILURE
        }
    }
}

async fn search<O: Write, E: Write>(
    args: &Args,
    context: &RunContext,
    out: &mut O,
    err: &mut E,
) -> AppResult<i32> {
    let pattern = args.pattern()?;
    let config = Config::load(args.config_file.as_deref()).await?;

    let color = args
        .color_choice()
        .or(config.color)
        .unwrap_or(context.color);

    let settings = log_settings(args, &config, color);
    if let Err(e) = configure_logging(&settings) {
        writeln!(err, "warning: logging unavailable: {}", e)?;
    }
    log::info!("git-log-searcher {} starting", env!("CARGO_PKG_VERSION"));

    let pattern = SearchPattern::new(pattern)?;
    let width = terminal::resolve_width(args.width.or(config.width), context.terminal_width);
    log::debug!(
        "Searching {} director{} for /{}/ at width {}",
        config.directories.len(),
        if config.directories.len() == 1 { "y" } else { "ies" },
        pattern.as_str(),
        width
    );

    let targets = config
        .directories
        .iter()
        .map(|directory| ScanTarget::new(directory.clone(), pattern.clone(), width))
        .collect();

    let manager = ScannerManager::new(GitLogProvider, context.cancel.clone());
    let reports = manager.run_all(targets).await;

    for report in &reports {
        write_report(report, out, err, color)?;
    }
    out.flush()?;
    err.flush()?;

    if context.cancel.is_cancelled() {
        log::info!("Search interrupted");
        return Ok(INTERRUPTED_EXIT_CODE);
    }
    Ok(EXIT_SUCCESS)
}

/// Command line over config file over defaults
fn log_settings(args: &Args, config: &Config, color: bool) -> LogSettings {
    let file = match &args.log_file {
        Some(path) if is_disabled_log_file(path) => None,
        Some(path) => Some(path.clone()),
        None => config.log_file(),
    };

    LogSettings {
        level: args
            .log_level
            .clone()
            .or_else(|| config.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        format: args
            .log_format
            .clone()
            .or_else(|| config.log_format.clone())
            .unwrap_or_else(|| "text".to_string()),
        file,
        color,
    }
}
