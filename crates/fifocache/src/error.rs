//! Error types for fifocache

use std::fmt;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key not present in the cache
    NotFound,

    /// Capacity must be at least 1
    InvalidCapacity(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "Key not found"),
            Error::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {} (must be greater than 0)", capacity)
            }
        }
    }
}

impl std::error::Error for Error {}
