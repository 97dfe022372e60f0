//! Browser Logging
//!
//! `log` backend for the browser console. The most recent lines are also
//! kept in a bounded ring buffer so they can be shown on the settings page.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Lines kept for the diagnostics dump
const MAX_LINES: usize = 200;

/// Fixed-capacity line buffer, oldest lines dropped first
struct RingBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RingBuffer {
    const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: VecDeque::new(),
        }
    }

    fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

struct ConsoleLogger {
    level: LevelFilter,
    recent: Mutex<RingBuffer>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    level: LevelFilter::Debug,
    recent: Mutex::new(RingBuffer::new(MAX_LINES)),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} [{}] {}: {}",
            Utc::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );

        let js = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js),
            Level::Warn => web_sys::console::warn_1(&js),
            Level::Info => web_sys::console::info_1(&js),
            Level::Debug | Level::Trace => web_sys::console::log_1(&js),
        }

        if let Ok(mut recent) = self.recent.lock() {
            recent.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; later calls are no-ops
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOGGER.level);
    }
}

/// Recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .recent
        .lock()
        .map(|recent| recent.snapshot())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("ignored".to_string());
        assert!(buffer.snapshot().is_empty());
    }
}
