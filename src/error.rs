//! Error handling for the chaintable library
//!
//! The table itself has almost no failure surface: lookups and erasures report
//! "not found" as plain booleans. The errors here cover the capacity ceiling and
//! the configuration layer.

use thiserror::Error;

/// Main error type for the chaintable library
#[derive(Error, Debug)]
pub enum ChainTableError {
    /// I/O related errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Growing the table would exceed the capacity ceiling
    #[error("Capacity exceeded: requested {requested} buckets, maximum is {max}")]
    CapacityExceeded {
        /// Bucket count the resize attempted to allocate
        requested: usize,
        /// Configured (or addressable) ceiling
        max: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ChainTableError {
    /// Create a capacity exceeded error
    pub fn capacity_exceeded(requested: usize, max: usize) -> Self {
        Self::CapacityExceeded { requested, max }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// A refused resize leaves the table intact, so the caller can keep using it
    /// (for lookups, erasures, or inserts after making room).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::CapacityExceeded { .. } => true,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::CapacityExceeded { .. } => "capacity",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ChainTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ChainTableError::configuration("bad load factor");
        assert_eq!(err.category(), "config");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_capacity_exceeded() {
        let err = ChainTableError::capacity_exceeded(80, 64);
        assert_eq!(err.category(), "capacity");
        assert!(err.is_recoverable());

        let display = format!("{}", err);
        assert!(display.contains("Capacity exceeded"));
        assert!(display.contains("80"));
        assert!(display.contains("64"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: ChainTableError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(err.is_recoverable());
        assert!(format!("{}", err).contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChainTableError::configuration("debug test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Configuration"));
        assert!(debug_str.contains("debug test"));
    }
}
