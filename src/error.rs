//! Error handling for the eval-only benchmark
//!
//! Every failure the driver can report is a variant of [`BenchError`].

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors raised while collecting, summarising or printing samples
#[derive(Debug, Error)]
pub enum BenchError {
    /// Built-in configuration failed validation
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    /// An elapsed time that cannot come from a monotonic clock
    #[error("sample #{index} is not a valid elapsed time: {value} ns")]
    InvalidSample { index: usize, value: f64 },

    /// Standard deviation needs at least two samples
    #[error("need at least {needed} samples to summarise, got {got}")]
    InsufficientSamples { needed: usize, got: usize },

    /// The trial loop produced the wrong number of samples
    #[error("expected {expected} samples, collected {got}")]
    SampleCountMismatch { expected: usize, got: usize },

    /// Writing the report failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
