//! Console Logger
//!
//! `log` backend for browser builds. Each record is formatted once, written
//! to the devtools console (stderr on native targets), and kept in a bounded
//! ring buffer so the most recent lines can be inspected from the app.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger with a fixed-capacity buffer of formatted lines
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append a line, evicting the oldest once full
    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// `2026-10-19T08:00:00.000Z WARN tasklist_ui::store: message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Parse a level name, falling back to `Info` for anything unrecognised
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the global logger.
///
/// Calling again after a successful install is a no-op; the first level and
/// capacity stay in effect.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent buffered lines from the global logger
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::lines).unwrap_or_default()
}
