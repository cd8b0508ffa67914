//! Interval histogram
//!
//! Counts samples per sampling interval of a [`Domain`]. Bucket calculation
//! reuses the domain's own interval lookup, so a sample is counted in the
//! interval that selected it.

use crate::distribution::Domain;

/// Per-interval sample counts
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalHistogram {
    domain: Domain,
    buckets: Vec<u64>,
    num_samples: u64,
}

impl IntervalHistogram {
    /// Create an empty histogram with one bucket per interval
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            buckets: vec![0; domain.intervals()],
            num_samples: 0,
        }
    }

    #[inline(always)]
    pub fn record(&mut self, x: f64) {
        self.num_samples += 1;
        self.buckets[self.domain.interval_of(x)] += 1;
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_samples == 0
    }

    /// Counts in interval order
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Number of intervals holding at least one sample
    pub fn occupied(&self) -> usize {
        self.buckets.iter().filter(|&&c| c > 0).count()
    }

    /// Index and count of the fullest interval (lowest index on ties)
    pub fn densest(&self) -> Option<(usize, u64)> {
        if self.is_empty() {
            return None;
        }

        let mut best = (0, self.buckets[0]);
        for (idx, &count) in self.buckets.iter().enumerate().skip(1) {
            if count > best.1 {
                best = (idx, count);
            }
        }
        Some(best)
    }
}
