use std::hint::black_box;
use std::io::{self, Write};
use std::time::Instant;

use tracing::{debug, info, trace};

use crate::error::{BenchError, Result};
use crate::stats::sample_set::SampleSet;
use crate::stats::summary::{SampleSummary, MIN_SAMPLES};
use crate::ui::report;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Label printed in front of the summary line
pub const DEFAULT_LABEL: &str = "python_eval_only_100x";
/// Timed executions of the workload per run
pub const DEFAULT_TRIALS: usize = 100;
/// Expression evaluations per workload execution
pub const DEFAULT_ITERATIONS: usize = 100;

/// Fixed benchmark parameters. Not user-configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub label: &'static str,
    pub trials: usize,
    pub iterations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL,
            trials: DEFAULT_TRIALS,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trials < MIN_SAMPLES {
            return Err(BenchError::InvalidConfig(format!(
                "trials must be at least {}, got {}",
                MIN_SAMPLES, self.trials
            )));
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// WORKLOAD
// ============================================================================

/// `3.0 * (3.0 + 3.0) / 3.0` with opaque operands
#[inline(never)]
pub fn expression() -> f64 {
    black_box(3.0_f64) * (black_box(3.0_f64) + black_box(3.0_f64)) / black_box(3.0_f64)
}

/// Evaluate the expression `iterations` times, discarding every result
pub fn calc(iterations: usize) {
    for _ in 0..iterations {
        black_box(expression());
    }
}

// ============================================================================
// TIMING
// ============================================================================

/// Measures how long a closure takes to run
pub trait Stopwatch {
    /// Run `f` once and return the elapsed time in nanoseconds
    fn time<F: FnOnce()>(&mut self, f: F) -> f64;
}

/// Stopwatch backed by the monotonic system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicStopwatch;

impl Stopwatch for MonotonicStopwatch {
    fn time<F: FnOnce()>(&mut self, f: F) -> f64 {
        let start = Instant::now();
        f();
        start.elapsed().as_nanos() as f64
    }
}

// ============================================================================
// DRIVER
// ============================================================================

/// Samples of one run together with their summary
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub samples: SampleSet,
    pub summary: SampleSummary,
}

/// Time `config.trials` executions of the workload
pub fn collect_samples<S: Stopwatch>(stopwatch: &mut S, config: &BenchConfig) -> Result<SampleSet> {
    config.validate()?;

    let mut samples = SampleSet::with_capacity(config.trials);
    for trial in 0..config.trials {
        let elapsed_ns = stopwatch.time(|| calc(config.iterations));
        trace!(trial, elapsed_ns, "trial complete");
        samples.push(elapsed_ns)?;
    }
    samples.ensure_len(config.trials)?;

    Ok(samples)
}

/// Run the whole benchmark against any writer and stopwatch
pub fn run_benchmark_with<W, S>(out: &mut W, stopwatch: &mut S, config: &BenchConfig) -> Result<BenchmarkReport>
where
    W: Write,
    S: Stopwatch,
{
    let samples = collect_samples(stopwatch, config)?;
    let summary = SampleSummary::from_samples(&samples)?;
    debug!(
        count = summary.count,
        mean = summary.mean,
        stdev = summary.stdev,
        min = summary.min,
        max = summary.max,
        median = summary.median,
        p95 = summary.p95,
        "samples summarised"
    );

    report::write_report(out, config.label, &summary)?;
    info!(label = config.label, "benchmark complete");

    Ok(BenchmarkReport { samples, summary })
}

/// Run the benchmark with the default parameters and print to stdout
pub fn run_benchmark() -> Result<BenchmarkReport> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_benchmark_with(&mut out, &mut MonotonicStopwatch, &BenchConfig::default())
}
