use std::fmt;
use std::sync::OnceLock;

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace,
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Part of the chart runtime a record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "store")]
    Store,
    #[display(fmt = "viewport")]
    Viewport,
    #[display(fmt = "minimap")]
    Minimap,
    #[display(fmt = "app")]
    App,
    #[display(fmt = "data")]
    Data,
    #[display(fmt = "dom")]
    Dom,
    #[display(fmt = "wasm")]
    Wasm,
}

/// One formatted message on its way to the installed [`Logger`]
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: &'a str,
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.level, self.component, self.message)
    }
}

pub trait Logger: Send + Sync {
    /// Checked before the message is formatted
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>);
}

/// Millisecond clock that every transition is timed against
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> f64;
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn Clock>> = OnceLock::new();

/// Installs the process logger. Only the first call wins.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

/// Installs the animation clock. Only the first call wins.
pub fn init_clock(clock: Box<dyn Clock>) {
    let _ = CLOCK.set(clock);
}

pub fn logger() -> &'static dyn Logger {
    LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&Silent)
}

/// The installed clock; time stands still at 0 until one is installed
pub fn clock() -> &'static dyn Clock {
    CLOCK.get().map(|clock| clock.as_ref()).unwrap_or(&Silent)
}

struct Silent;

impl Logger for Silent {
    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _record: &Record<'_>) {}
}

impl Clock for Silent {
    fn now_ms(&self) -> f64 {
        0.0
    }
}

#[doc(hidden)]
pub fn emit(level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    let logger = logger();
    if logger.enabled(level) {
        let message = args.to_string();
        logger.log(&Record { level, component, message: &message });
    }
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Trace,
                $component,
                format_args!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Debug,
                $component,
                format_args!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, format_args!($($arg)*))
    };
}
