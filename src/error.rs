//! Error types for the Verba library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`VerbaError`] enum. Index operations themselves are total over any word and
//! never fail; errors come from the surrounding layers (file ingestion, query
//! parsing, output serialization).

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Verba operations.
#[derive(Error, Debug)]
pub enum VerbaError {
    /// I/O errors (reading input documents).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors.
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization, normalization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VerbaError.
pub type Result<T> = std::result::Result<T, VerbaError>;

impl VerbaError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        VerbaError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VerbaError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        VerbaError::Query(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        VerbaError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VerbaError::Other(msg.into())
    }
}
