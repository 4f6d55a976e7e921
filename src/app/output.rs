//! Report writer
//!
//! Writes one finished report at a time, so output from different directories
//! never interleaves.

use std::io::Write;

use crate::core::styles::StyleRole;
use crate::scanner::types::ScanReport;

/// Write a report: matches to `out`, a failure line to `err`
pub fn write_report<O: Write, E: Write>(
    report: &ScanReport,
    out: &mut O,
    err: &mut E,
    color: bool,
) -> std::io::Result<()> {
    let directory = report.directory.display().to_string();

    match &report.outcome {
        Ok(matches) => {
            let header = format!("searched `{}`", directory);
            writeln!(out, "{}", StyleRole::Header.paint(&header, color))?;
            for line in matches {
                writeln!(
                    out,
                    "{}: {}",
                    StyleRole::Identifier.paint(&line.id, color),
                    StyleRole::Summary.paint(&line.summary, color)
                )?;
            }
            writeln!(out)?;
        }
        Err(e) => {
            let message = format!("error in `{}`: {}", directory, e);
            writeln!(err, "{}", StyleRole::Error.paint(&message, color))?;
        }
    }
    Ok(())
}
