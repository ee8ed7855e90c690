//! Provides logging functionality.

use once_cell::sync::OnceCell;

/// The global logger.
pub static LOGGER: OnceCell<Logger> = OnceCell::new();

/// The core logger, encapsulating logging configuration.
#[derive(Debug)]
pub struct Logger {
    /// The level of logging to perform.
    pub level: LogLevel,
}

/// The log level, which determines the verbosity of logging.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No logging.
    Quiet,
    /// Normal logging.
    Normal,
    /// Verbose logging, including every image found.
    Verbose,
}

impl Logger {
    /// Creates a new logger at the given log level.
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Registers the logger as the global logger.
    ///
    /// Only the first registration takes effect.
    pub fn register(self) {
        let _ = LOGGER.set(self);
    }
}

/// Logs a message at the given level.
///
/// The second argument is the verb, which appears in green text.
/// The rest of the arguments are the same as in the `format!` macro.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $verb:expr, $($arg:tt)*) => {
        if let Some(logger) = $crate::logger::LOGGER.get() {
            if logger.level >= $level {
                use ::termcolor::*;
                use std::io::Write;

                let writer = BufferWriter::stderr(ColorChoice::Auto);
                let mut buffer = writer.buffer();

                let _ = buffer
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_intense(true));
                let _ = write!(buffer, "{:>12} ", $verb);
                let _ = buffer.reset();

                let _ = writeln!(buffer, $($arg)*);

                let _ = writer.print(&buffer);
            }
        }
    };
}

/// Logs a message unless logging is quiet.
#[macro_export]
macro_rules! log {
    ($verb:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logger::LogLevel::Normal, $verb, $($arg)*)
    };
}

/// Logs a message only when logging is verbose.
#[macro_export]
macro_rules! verbose {
    ($verb:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logger::LogLevel::Verbose, $verb, $($arg)*)
    };
}
