//! Error types for the Verdant library.
//!
//! Correcting a message never fails: every operation in [`crate::spelling`]
//! is total over its input. Errors only arise at the edges, when reading or
//! writing configuration and term files or rendering CLI output.
//!
//! # Examples
//!
//! ```
//! use verdant::error::{Result, VerdantError};
//!
//! fn load() -> Result<()> {
//!     Err(VerdantError::config("threshold must be within 0..=100"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Verdant operations.
#[derive(Error, Debug)]
pub enum VerdantError {
    /// I/O errors (reading term lists, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid corrector configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed dictionary input
    #[error("Dictionary error: {0}")]
    Dictionary(String),
}

/// Result type alias for operations that may fail with VerdantError.
pub type Result<T> = std::result::Result<T, VerdantError>;

impl VerdantError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        VerdantError::Config(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        VerdantError::Dictionary(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VerdantError::config("bad threshold");
        assert_eq!(error.to_string(), "Configuration error: bad threshold");

        let error = VerdantError::dictionary("line 3 has no letters or digits");
        assert_eq!(error.to_string(), "Dictionary error: line 3 has no letters or digits");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let verdant_error = VerdantError::from(io_error);

        match verdant_error {
            VerdantError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
