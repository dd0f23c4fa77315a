//! Harness logging
//!
//! Entries flow through `Harness::log` to one process-wide `Logger`. The
//! conformance runner swaps in its own logger to collect messages into the
//! test report; otherwise `DefaultLogger` prints them to the console.

use colored::*;
use std::fmt;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for harness log entries
///
/// ```no_run
/// use xr_conformance_gfx::xrc::Harness;
/// use xr_conformance_gfx::xrc::log::{Logger, LogEntry};
///
/// struct ReportLogger;
///
/// impl Logger for ReportLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.severity, entry.message);
///     }
/// }
///
/// Harness::set_logger(ReportLogger);
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Emitting component, e.g. `"xrc::AdapterSelector"`
    pub source: String,
    pub message: String,
    /// Call site, recorded by `xrc_error!` only
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    /// `file:line` of the call site, when recorded
    pub fn location(&self) -> Option<String> {
        match (self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            _ => None,
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (per-adapter, per-format)
    Trace,

    /// Development information
    Debug,

    /// Important informational messages
    Info,

    /// Potential issues
    Warn,

    /// Failures, with file:line details
    Error,
}

impl LogSeverity {
    /// Inverse of `severity as u8`; out-of-range values saturate to `Error`
    pub const fn from_level(level: u8) -> LogSeverity {
        match level {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }

    /// Fixed-width upper-case label used in console output
    pub const fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    /// Parse a severity name as used in configuration (`"warn"`, `"ERROR"`, ...)
    pub fn parse(name: &str) -> Option<LogSeverity> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogSeverity::Trace),
            "debug" => Some(LogSeverity::Debug),
            "info" => Some(LogSeverity::Info),
            "warn" | "warning" => Some(LogSeverity::Warn),
            "error" => Some(LogSeverity::Error),
            _ => None,
        }
    }
}

/// Console logger installed until the runner provides its own
///
/// Warnings and errors go to stderr, everything else to stdout.
pub struct DefaultLogger;

impl DefaultLogger {
    /// Uncolored console line for `entry`
    pub fn format_line(entry: &LogEntry) -> String {
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            timestamp(entry),
            entry.severity.label(),
            entry.source,
            entry.message
        );
        if let Some(location) = entry.location() {
            line.push_str(&format!(" ({})", location));
        }
        line
    }
}

fn timestamp(entry: &LogEntry) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    datetime.format("%H:%M:%S%.3f").to_string()
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let mut line = format!(
            "[{}] [{}] [{}] {}",
            timestamp(entry).dimmed(),
            severity,
            entry.source.bright_blue(),
            entry.message
        );
        if let Some(location) = entry.location() {
            line.push_str(&format!(" ({})", location.dimmed()));
        }

        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! __xrc_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::xrc::Harness::log(
            $crate::xrc::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! xrc_trace {
    ($source:expr, $($arg:tt)*) => { $crate::__xrc_log!(Trace, $source, $($arg)*) };
}

/// ```no_run
/// xr_conformance_gfx::xrc_debug!("xrc::AdapterSelector", "Enumerated {} adapters", 2);
/// ```
#[macro_export]
macro_rules! xrc_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__xrc_log!(Debug, $source, $($arg)*) };
}

#[macro_export]
macro_rules! xrc_info {
    ($source:expr, $($arg:tt)*) => { $crate::__xrc_log!(Info, $source, $($arg)*) };
}

#[macro_export]
macro_rules! xrc_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__xrc_log!(Warn, $source, $($arg)*) };
}

/// Error entry carrying the call site
#[macro_export]
macro_rules! xrc_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::xrc::Harness::log_detailed(
            $crate::xrc::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
