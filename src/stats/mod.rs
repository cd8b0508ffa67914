//! Sample statistics
//!
//! Summaries of a generated X sample, used for the debug log and by tests that
//! check distribution shape.

pub mod simple_histogram;

use crate::distribution::Domain;
use simple_histogram::IntervalHistogram;
use std::fmt;

/// Running mean and variance (Welford's algorithm) with min/max
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Moments {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn from_samples(samples: &[f64]) -> Self {
        let mut moments = Self::new();
        for &x in samples {
            moments.record(x);
        }
        moments
    }

    #[inline]
    pub fn record(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of the recorded samples (0.0 when empty)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (0.0 for fewer than two samples)
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Smallest sample, `None` when empty
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest sample, `None` when empty
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }
}

impl Default for Moments {
    fn default() -> Self {
        Self::new()
    }
}

/// Moments plus per-interval occupancy of an X sample
#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub moments: Moments,
    pub histogram: IntervalHistogram,
}

impl SampleSummary {
    pub fn new(domain: Domain, samples: &[f64]) -> Self {
        let mut histogram = IntervalHistogram::new(domain);
        for &x in samples {
            histogram.record(x);
        }

        Self {
            moments: Moments::from_samples(samples),
            histogram,
        }
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.moments;
        write!(
            f,
            "n={} min={:.6} max={:.6} mean={:.6} stddev={:.6} intervals={}/{} densest={}",
            m.count(),
            m.min().unwrap_or(f64::NAN),
            m.max().unwrap_or(f64::NAN),
            m.mean(),
            m.stddev(),
            self.histogram.occupied(),
            self.histogram.len(),
            self.histogram
                .densest()
                .map(|(idx, count)| format!("#{} ({})", idx, count))
                .unwrap_or_else(|| "-".to_string()),
        )
    }
}
