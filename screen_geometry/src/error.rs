//! Error types for screen_geometry
//!
//! The helpers are pure computations over caller-supplied camera and
//! scene values, so the only failure is input the plane math cannot
//! handle (zero-area screen, degenerate clip range, etc.).

use std::fmt;

/// Result type for screen_geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// screen_geometry errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera or target state that would produce NaN or degenerate planes
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
