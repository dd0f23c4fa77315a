//! Harness configuration
//!
//! The runner normally builds a `HarnessConfig` from the environment once at
//! startup and hands it to `Harness::initialize`.

use crate::adapter::AdapterLuid;
use crate::error::{Error, Result};
use crate::log::LogSeverity;

/// Environment variable holding the adapter LUID to test (decimal or `0x` hex)
pub const ADAPTER_LUID_ENV: &str = "XRC_ADAPTER_LUID";

/// Environment variable holding the minimum log severity
pub const LOG_LEVEL_ENV: &str = "XRC_LOG_LEVEL";

/// Process-wide configuration of the graphics helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Adapter requested by the runtime; zero selects the default adapter
    pub adapter_luid: AdapterLuid,
    /// Entries below this severity are dropped before reaching the logger
    pub min_log_severity: LogSeverity,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            adapter_luid: AdapterLuid::ZERO,
            min_log_severity: LogSeverity::Info,
        }
    }
}

impl HarnessConfig {
    /// Build a configuration from `XRC_ADAPTER_LUID` and `XRC_LOG_LEVEL`,
    /// falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADAPTER_LUID_ENV) {
            let id = parse_u64(&value).ok_or_else(|| {
                Error::InvalidConfig(format!("{}={}", ADAPTER_LUID_ENV, value))
            })?;
            config.adapter_luid = AdapterLuid::from_u64(id);
        }

        if let Some(value) = lookup(LOG_LEVEL_ENV) {
            config.min_log_severity = LogSeverity::parse(&value).ok_or_else(|| {
                Error::InvalidConfig(format!("{}={}", LOG_LEVEL_ENV, value))
            })?;
        }

        Ok(config)
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
