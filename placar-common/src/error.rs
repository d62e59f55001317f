//! Common error types for placar

use thiserror::Error;

/// Common result type for placar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the placar modules
///
/// Only primary-dataset structural failures are surfaced to callers; every
/// other anomaly degrades silently to the most harmless default (zero,
/// empty, fallback label).
#[derive(Error, Debug)]
pub enum Error {
    /// Primary dataset unreachable or non-success response
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Primary dataset yielded zero usable records
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
