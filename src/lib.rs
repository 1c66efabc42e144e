//! Eval-only arithmetic microbenchmark
//!
//! Times 100 evaluations of `3.0 * (3.0 + 3.0) / 3.0`, repeats that 100
//! times and reports the mean and sample standard deviation.

pub mod core;
pub mod error;
pub mod stats;
pub mod ui;
pub mod utils;

pub use crate::core::{run_benchmark, run_benchmark_with, BenchConfig, BenchmarkReport, MonotonicStopwatch, Stopwatch};
pub use error::{BenchError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
