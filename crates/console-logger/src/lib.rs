//! Console Logger
//!
//! `log` backend for the front end. Records go to the browser console at the
//! matching severity (stderr when not running in a browser), and the most
//! recent lines are kept in a circular buffer so the app can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            recent: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.recent
            .lock()
            .map(|buf| buf.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn remember(&self, line: String) {
        if let Ok(mut buf) = self.recent.lock() {
            if buf.len() == self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("catalog")
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }
        assert_eq!(
            logger.recent(),
            vec![
                "[INFO catalog] line 2".to_string(),
                "[INFO catalog] line 3".to_string(),
                "[INFO catalog] line 4".to_string(),
            ]
        );
    }

    #[test]
    fn test_records_below_level_are_skipped() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Info, "still noise");
        emit(&logger, Level::Warn, "careful");
        emit(&logger, Level::Error, "broken");
        assert_eq!(
            logger.recent(),
            vec!["[WARN catalog] careful".to_string(), "[ERROR catalog] broken".to_string()]
        );
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_line() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent(), vec!["[INFO catalog] b".to_string()]);
    }
}
