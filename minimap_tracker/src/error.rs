//! Error types for the minimap tracker
//!
//! Two kinds of failure exist in this core: a missing reference (a world
//! object, component or camera the host no longer provides) and a fatal
//! failure inside a scan pass. Stale world handles are normal lifecycle,
//! not errors, and never surface here.

use std::fmt;

/// Result type for minimap tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Minimap tracker errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A world object or required collaborator is absent
    MissingReference(String),

    /// Unexpected failure inside a scan pass
    ScanFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingReference(msg) => write!(f, "Missing reference: {}", msg),
            Error::ScanFailed(msg) => write!(f, "Scan failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build a [`Error::ScanFailed`] with a source tag and formatted message
///
/// # Example
///
/// ```ignore
/// return Err(tracker_err!("minimap::Scanner", "world query failed: {}", reason));
/// ```
#[macro_export]
macro_rules! tracker_err {
    ($source:expr, $($arg:tt)*) => {
        $crate::Error::ScanFailed(format!("[{}] {}", $source, format!($($arg)*)))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
