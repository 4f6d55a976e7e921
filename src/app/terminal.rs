//! Terminal capabilities: output width and colour support

use std::io::IsTerminal;

/// Width used when no terminal is attached
pub const FALLBACK_WIDTH: usize = 80;

/// Column count of the controlling terminal, if any
pub fn detect_width() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols))
        .filter(|&cols| cols > 0)
}

/// Whether stdout should get colour by default
pub fn detect_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Pick the output width: explicit setting, then the terminal, then the fallback
pub fn resolve_width(explicit: Option<u16>, detected: Option<usize>) -> usize {
    explicit
        .map(usize::from)
        .or(detected)
        .unwrap_or(FALLBACK_WIDTH)
}
