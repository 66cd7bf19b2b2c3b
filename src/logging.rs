//! Diagnostic logging setup.
//!
//! Events go through the `log` facade as `event=... module=...` key/value
//! lines on stderr. `RUST_LOG` wins over the configured level.

use env_logger::Env;

const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Lower-cases a configured level, falling back to `warn` for unknown names.
pub fn normalize_level(raw: &str) -> &'static str {
    let wanted = raw.trim().to_ascii_lowercase();
    LEVELS
        .iter()
        .copied()
        .find(|l| *l == wanted)
        .unwrap_or("warn")
}

/// Installs the global logger. Calling it twice is harmless.
pub fn init(level: &str) {
    let level = normalize_level(level);
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init();
}
