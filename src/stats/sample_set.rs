//! Sample storage for the eval-only benchmark
//!
//! Holds the elapsed times of one run, in the order the trials executed.

use crate::error::{BenchError, Result};

/// Ordered elapsed-time samples, in nanoseconds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<f64>,
}

impl SampleSet {
    /// Create an empty set sized for `trials` samples
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            samples: Vec::with_capacity(trials),
        }
    }

    /// Append one elapsed time. Negative and non-finite values are rejected.
    pub fn push(&mut self, elapsed_ns: f64) -> Result<()> {
        if !elapsed_ns.is_finite() || elapsed_ns < 0.0 {
            return Err(BenchError::InvalidSample {
                index: self.samples.len(),
                value: elapsed_ns,
            });
        }
        self.samples.push(elapsed_ns);
        Ok(())
    }

    /// Build a set from already collected values, validating each one
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let iter = samples.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            set.push(value)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Check the set holds exactly `expected` samples
    pub fn ensure_len(&self, expected: usize) -> Result<()> {
        if self.samples.len() == expected {
            Ok(())
        } else {
            Err(BenchError::SampleCountMismatch {
                expected,
                got: self.samples.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let set = SampleSet::from_samples([30.0, 10.0, 20.0]).unwrap();
        assert_eq!(set.as_slice(), &[30.0, 10.0, 20.0]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn rejects_negative_and_non_finite_samples() {
        let mut set = SampleSet::with_capacity(4);
        set.push(0.0).unwrap();

        let err = set.push(-1.0).unwrap_err();
        assert!(matches!(err, BenchError::InvalidSample { index: 1, .. }));
        assert!(set.push(f64::NAN).is_err());
        assert!(set.push(f64::INFINITY).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ensure_len_reports_mismatch() {
        let set = SampleSet::from_samples([1.0, 2.0]).unwrap();
        assert!(set.ensure_len(2).is_ok());
        assert!(matches!(
            set.ensure_len(100),
            Err(BenchError::SampleCountMismatch { expected: 100, got: 2 })
        ));
    }
}
