//! Console Logger
//!
//! A `log` backend for WASM frontends. Every record is prefixed with a local
//! timestamp and routed to the browser console method matching its level.

use chrono::{Local, NaiveTime};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing to `window.console`
pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &'static str, level: LevelFilter) -> Self {
        Self { app_name, level }
    }
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Render one log line: `[HH:MM:SS.mmm] LEVEL app target: message`
pub fn format_line(time: NaiveTime, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!(
        "[{}] {:<5} {} {}: {}",
        time.format("%H:%M:%S%.3f"),
        level,
        app_name,
        target,
        message
    )
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
            Local::now().time(),
            self.app_name,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = JsValue::from_str(&line);

        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
