/*!
 * Error types for the transplayer library.
 *
 * The text-processing core is total — decoding, extraction and rendering
 * always produce a (possibly degraded) result. Errors only arise at the
 * persistence boundary and in the binary's file handling.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors from the saved-definitions store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error reading or writing the store file
    #[error("definitions file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing or serializing the store contents
    #[error("definitions file format invalid: {0}")]
    Format(#[from] serde_json::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the definitions store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
