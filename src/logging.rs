//! Console Logger
//!
//! `log` backend that writes to the browser console and keeps a rolling
//! buffer of the most recent records for inspection.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Records kept in the rolling buffer
pub const RECENT_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl From<&Record<'_>> for LogLine {
    fn from(record: &Record<'_>) -> Self {
        Self {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

/// Fixed-size ring of log lines, oldest evicted first
#[derive(Debug)]
pub struct RecentLog {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl RecentLog {
    pub const fn new(capacity: usize) -> Self {
        Self { lines: VecDeque::new(), capacity }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }
}

struct ConsoleLogger {
    recent: Mutex<RecentLog>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    recent: Mutex::new(RecentLog::new(RECENT_CAPACITY)),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine::from(record);
        let text = wasm_bindgen::JsValue::from(format!("{} [{}] {}", line.level, line.target, line.message));
        match record.level() {
            Level::Error => web_sys::console::error_1(&text),
            Level::Warn => web_sys::console::warn_1(&text),
            Level::Info => web_sys::console::log_1(&text),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&text),
        }
        if let Ok(mut recent) = self.recent.lock() {
            recent.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Most recent records, oldest first
pub fn recent_records() -> Vec<LogLine> {
    LOGGER.recent.lock().map(|r| r.snapshot()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> LogLine {
        LogLine { level: Level::Info, target: "test".into(), message: format!("line {}", n) }
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let mut recent = RecentLog::new(3);
        for n in 0..5 {
            recent.push(line(n));
        }
        let kept: Vec<_> = recent.snapshot().into_iter().map(|l| l.message).collect();
        assert_eq!(kept, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_line_keeps_record_target() {
        let line = LogLine::from(
            &Record::builder()
                .level(Level::Warn)
                .target("jobdash_ui::api")
                .args(format_args!("GET {} failed", "/logs"))
                .build(),
        );
        assert_eq!(line.level, Level::Warn);
        assert_eq!(line.target, "jobdash_ui::api");
        assert_eq!(line.message, "GET /logs failed");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut recent = RecentLog::new(0);
        recent.push(line(1));
        assert!(recent.snapshot().is_empty());
    }
}
