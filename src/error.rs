//! Error types for envblock
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EnvError
pub type Result<T> = std::result::Result<T, EnvError>;

/// Unified error type for envblock operations
#[derive(Debug, Error)]
pub enum EnvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Block Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough room for the record, counting the mandatory trailing zero byte
    #[error("env block full: record needs {needed} bytes, {available} available")]
    CapacityExceeded { needed: usize, available: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
