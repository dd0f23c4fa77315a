//! Error types for the conformance graphics helpers
//!
//! Every failure is returned to the immediate caller, who decides whether it
//! is a test failure, a skip, or a harness abort.

use std::fmt;

/// Result type for conformance graphics operations
pub type Result<T> = std::result::Result<T, Error>;

/// Conformance graphics errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing registry key or no matching adapter. Expected and non-fatal:
    /// the caller treats it as "skip" or "not applicable".
    NotFound(String),

    /// The shader compiler rejected the source
    CompileError {
        /// Status code returned by the compiler backend
        status: i32,
        /// Diagnostic text from the compiler's error buffer
        diagnostics: String,
    },

    /// Adapter factory creation, enumeration or description retrieval failed
    PlatformError {
        /// Which platform call failed
        context: String,
        /// Status code returned by the platform
        status: i32,
    },

    /// A configuration value could not be parsed
    InvalidConfig(String),
}

impl Error {
    /// True for `NotFound`, which callers treat as "not applicable"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Status code carried by compile and platform errors
    pub fn status(&self) -> Option<i32> {
        match self {
            Error::CompileError { status, .. } | Error::PlatformError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::CompileError { status, diagnostics } => {
                write!(f, "Shader compilation failed ({:#010X}): {}", *status as u32, diagnostics)
            }
            Error::PlatformError { context, status } => {
                write!(f, "Platform error in {} ({:#010X})", context, *status as u32)
            }
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
