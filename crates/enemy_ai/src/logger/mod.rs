//! Глобальный logger симуляции
//!
//! Host (движок, headless binary, тесты) регистрирует свой LogPrinter один раз,
//! AI системы пишут через `crate::log*` функции.
//! Сообщения ниже текущего LogLevel отбрасываются до форматирования timestamp.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

/// Уровень логирования (порядок вариантов = порядок важности)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// Заменить текущий printer
pub fn set_logger(logger: Box<dyn LogPrinter>) {
    // Poisoned mutex: printer паниковал в другом потоке, просто перезаписываем
    let mut guard = LOGGER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(logger);
}

/// Установить printer только если никто не успел раньше (тесты, headless app)
pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    let mut guard = LOGGER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if guard.is_none() {
        *guard = Some(logger);
    }
}

pub fn set_log_level(level: LogLevel) {
    let mut guard = LOGGER_LEVEL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = level;
}

pub fn log_level() -> LogLevel {
    LOGGER_LEVEL
        .lock()
        .map(|level| *level)
        .unwrap_or(LogLevel::Debug)
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < log_level() {
        return;
    }

    // Timestamp добавляем здесь, printer получает готовую строку
    let guard = LOGGER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(logger) = guard.as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

/// Printer по умолчанию: stdout
pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}
