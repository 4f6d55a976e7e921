//! Commit message rendering
//!
//! Reduces a commit message to its first line and fits it into a column budget.
//! Works on code points, so multi-byte characters are never split.

/// Marker appended to truncated summaries
pub const ELLIPSIS: &str = "...";

/// Render the first line of `message` within `width` code points.
///
/// A first line shorter than `width` is returned as-is. Anything else is cut to
/// `width - 3` code points followed by [`ELLIPSIS`], so the result is exactly
/// `width` long. Widths of 1 to 3 leave room for the ellipsis only, and a zero
/// width renders nothing.
pub fn render(message: &str, width: usize) -> String {
    let first_line = first_line(message);

    if first_line.chars().count() < width {
        return first_line.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut rendered: String = first_line.chars().take(keep).collect();
    rendered.push_str(ELLIPSIS);
    rendered
}

fn first_line(message: &str) -> &str {
    let line = match message.find('\n') {
        Some(end) => &message[..end],
        None => message,
    };
    line.strip_suffix('\r').unwrap_or(line)
}
