use wasm_bindgen::JsValue;

use crate::domain::logging::{Clock, LogLevel, Logger, Record};

/// Writes records to the devtools console, prefixed with local wall time
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// Debug output in debug builds, info and above otherwise
    pub fn for_build() -> Self {
        Self::new(if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info })
    }
}

fn wall_time() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds(),
        date.get_milliseconds()
    )
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, record: &Record<'_>) {
        let line = JsValue::from_str(&format!("[{}] {}", wall_time(), record));
        match record.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }
}

/// `performance.now()`, the time origin of `requestAnimationFrame`
/// timestamps; `Date.now()` where no performance object exists.
#[derive(Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}
