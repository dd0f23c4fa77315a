/// Harness - process-wide state for the conformance graphics helpers
///
/// Holds the configuration and the logger. `initialize` also forces
/// construction of the format registry so that it is built before concurrent
/// test execution begins.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::format::FormatRegistry;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Configuration, set once by `Harness::initialize`
static CONFIG: OnceLock<HarnessConfig> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity forwarded to the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Process-wide entry point of the graphics helpers
///
/// # Example
///
/// ```no_run
/// use xr_conformance_gfx::xrc::{Harness, HarnessConfig};
///
/// Harness::initialize(HarnessConfig::from_env()?)?;
/// let registry = Harness::registry();
/// # Ok::<(), xr_conformance_gfx::xrc::Error>(())
/// ```
pub struct Harness;

impl Harness {
    /// Install the configuration and build the format registry
    ///
    /// The first call wins. Later calls succeed only when they pass the same
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a different configuration is already installed.
    pub fn initialize(config: HarnessConfig) -> Result<()> {
        let installed = CONFIG.get_or_init(|| config);
        if *installed != config {
            let error = Error::InvalidConfig(
                "Harness already initialized with a different configuration".to_string(),
            );
            crate::xrc_error!("xrc::Harness", "{}", error);
            return Err(error);
        }

        Self::set_min_severity(installed.min_log_severity);

        let registry = FormatRegistry::global();
        crate::xrc_debug!("xrc::Harness", "Format registry ready with {} entries", registry.len());
        Ok(())
    }

    /// Installed configuration, or the default one before `initialize`
    pub fn config() -> HarnessConfig {
        CONFIG.get().copied().unwrap_or_default()
    }

    /// The process-wide format capability registry
    pub fn registry() -> &'static FormatRegistry {
        FormatRegistry::global()
    }

    // ===== LOGGING API =====

    /// Replace the logger with a custom implementation
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset the logger to `DefaultLogger`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop entries below `severity`
    pub fn set_min_severity(severity: LogSeverity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn min_severity() -> LogSeverity {
        LogSeverity::from_level(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Internal logging method (for logs without file:line)
    ///
    /// Used by `xrc_info!`, `xrc_warn!`, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Internal logging method with file:line information
    ///
    /// Used by `xrc_error!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if entry.severity < Self::min_severity() {
            return;
        }
        if let Ok(lock) = logger().read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
