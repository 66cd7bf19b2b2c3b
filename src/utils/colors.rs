/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Chart bar colour for the n-th series of a grouped chart.
pub fn series_color(index: usize) -> &'static str {
    match index % 3 {
        0 => BLUE,
        1 => MAGENTA,
        _ => YELLOW,
    }
}
