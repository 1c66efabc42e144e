//! Summary statistics for the eval-only benchmark
//!
//! Mean and Bessel-corrected standard deviation over every collected
//! sample. No outliers are dropped: the printed figures must be
//! reproducible from the raw samples alone.

use crate::error::{BenchError, Result};
use crate::stats::sample_set::SampleSet;

/// Smallest set a sample standard deviation is defined for
pub const MIN_SAMPLES: usize = 2;

/// Statistics computed from one [`SampleSet`]
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    pub stdev: f64, // sample stdev, divides by n - 1
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub p95: f64,
}

impl SampleSummary {
    /// Summarise a sample set. Fails when it holds fewer than two samples.
    pub fn from_samples(set: &SampleSet) -> Result<Self> {
        let samples = set.as_slice();
        if samples.len() < MIN_SAMPLES {
            return Err(BenchError::InsufficientSamples {
                needed: MIN_SAMPLES,
                got: samples.len(),
            });
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let stdev = variance.sqrt();

        // SampleSet only admits finite values, so total_cmp orders them numerically
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Ok(Self {
            count: samples.len(),
            mean,
            stdev,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median: Self::percentile(&sorted, 50.0),
            p95: Self::percentile(&sorted, 95.0),
        })
    }

    /// Nearest-rank percentile of sorted data
    fn percentile(sorted_data: &[f64], p: f64) -> f64 {
        if sorted_data.is_empty() {
            return 0.0;
        }
        let idx = (p / 100.0 * (sorted_data.len() - 1) as f64).round() as usize;
        sorted_data[idx.min(sorted_data.len() - 1)]
    }

    /// Mean truncated toward zero, as printed
    pub fn mean_ns(&self) -> u64 {
        truncate(self.mean)
    }

    /// Standard deviation truncated toward zero, as printed
    pub fn stdev_ns(&self) -> u64 {
        truncate(self.stdev)
    }
}

/// Drop the fractional part. Never rounds.
pub fn truncate(value: f64) -> u64 {
    value.trunc() as u64
}
