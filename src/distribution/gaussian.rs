//! Gaussian (normal) distribution implementation
//!
//! Fixed at mean 0.0 and standard deviation 1.0. The sampling window covers
//! five standard deviations on either side of the mean; draws beyond it are
//! rare enough (under one in a million) that redrawing them does not move the
//! sample moments, whatever the interval count.

use super::{sample_x, Distribution, Domain};
use crate::config::Pdf;
use crate::error::GenError;
use crate::Result;
use rand::RngCore;
use rand_distr::{Distribution as _, Normal};

pub const MEAN: f64 = 0.0;
pub const STDDEV: f64 = 1.0;

/// Half-width of the sampling window, in standard deviations
pub const WINDOW_SIGMAS: f64 = 5.0;

/// Gaussian distribution for X-coordinates
#[derive(Debug, Clone)]
pub struct GaussianDistribution {
    mean: f64,
    stddev: f64,
    inner: Normal<f64>,
}

impl GaussianDistribution {
    /// Create a new Gaussian distribution
    ///
    /// Fails unless `stddev` is positive and finite.
    pub fn new(mean: f64, stddev: f64) -> Result<Self> {
        if !(stddev > 0.0 && stddev.is_finite()) {
            return Err(GenError::SamplingFault(format!(
                "gaussian: standard deviation must be positive, got {}",
                stddev
            )));
        }
        let inner = Normal::new(mean, stddev).map_err(|e| {
            GenError::SamplingFault(format!("gaussian(x = {}, std = {}): {}", mean, stddev, e))
        })?;
        Ok(Self {
            mean,
            stddev,
            inner,
        })
    }

    /// The generator's fixed N(0, 1)
    pub fn standard() -> Result<Self> {
        Self::new(MEAN, STDDEV)
    }
}

impl Distribution for GaussianDistribution {
    fn pdf(&self) -> Pdf {
        Pdf::Gaussian
    }

    fn domain(&self, nintervals: usize) -> Domain {
        let half = WINDOW_SIGMAS * self.stddev;
        Domain::new(self.mean - half, self.mean + half, nintervals)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.inner.sample(rng)
    }
}

/// Draw `npoints` N(0, 1) values over `nintervals` intervals
pub fn gaussian(npoints: usize, nintervals: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
    sample_x(&GaussianDistribution::standard()?, npoints, nintervals, rng)
}
