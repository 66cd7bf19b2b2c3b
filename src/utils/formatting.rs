//! Formatting utilities used for CLI and report outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pads to `width` terminal columns (emoji and accents count by display width).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(fill))
}

/// Share of `part` in `whole` as a rounded percentage, `--` when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "--".to_string();
    }
    format!("{:.0}%", part as f64 * 100.0 / whole as f64)
}
