//! Console Logger
//!
//! Routes `log` records to the browser console with a `[module]` tag.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[cart] message` using the last path segment of the target
fn format_record(level: Level, target: &str, message: &str) -> String {
    let tag = target.rsplit("::").next().unwrap_or(target);
    match level {
        Level::Trace => format!("[{}] (trace) {}", tag, message),
        _ => format!("[{}] {}", tag, message),
    }
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uses_last_segment() {
        let line = format_record(Level::Info, "boutique_ui::animation::engine", "landed");
        assert_eq!(line, "[engine] landed");
    }

    #[test]
    fn test_format_trace_is_marked() {
        let line = format_record(Level::Trace, "app", "frame");
        assert_eq!(line, "[app] (trace) frame");
    }
}
