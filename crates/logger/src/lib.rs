//! Logging infrastructure for vkbd.
//!
//! A process-wide logger writing timestamped lines to a file and keeping
//! the most recent entries in memory. Calls made before [`init`] are
//! dropped, so library crates can log without coordinating startup order.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    min_level: LogLevel,
    file_path: PathBuf,
}

impl Logger {
    fn new(file_path: PathBuf, max_entries: usize, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Truncate on startup
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== vkbd log start ===");
        }

        Self {
            entries: VecDeque::with_capacity(max_entries.min(1024)),
            max_entries,
            min_level,
            file_path,
        }
    }

    fn push(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();

        // Reopen each time so a deleted log file gets recreated
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.as_str(), message);
        }

        self.entries.push_back(LogEntry {
            timestamp,
            level,
            message,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the global logger.
///
/// Only the first call takes effect.
///
/// # Arguments
///
/// * `file_path` - Path to the log file, truncated on init
/// * `max_entries` - Number of entries kept in memory
/// * `min_level` - Entries below this level are discarded
pub fn init(file_path: PathBuf, max_entries: usize, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, max_entries, min_level)));
}

/// Whether [`init`] has run.
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Change the minimum level at runtime.
pub fn set_min_level(level: LogLevel) {
    with_logger(|logger| logger.min_level = level);
}

fn with_logger(f: impl FnOnce(&mut Logger)) {
    // Poisoned mutex: drop the message rather than panic inside logging
    if let Some(Ok(mut logger)) = LOGGER.get().map(Mutex::lock) {
        f(&mut logger);
    }
}

/// Record a message at `level`.
pub fn log(level: LogLevel, message: impl Into<String>) {
    with_logger(|logger| logger.push(level, message.into()));
}

pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message);
}

pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

/// Snapshot of the in-memory entries, oldest first.
pub fn entries() -> Vec<LogEntry> {
    let mut out = Vec::new();
    with_logger(|logger| out = logger.entries.iter().cloned().collect());
    out
}
