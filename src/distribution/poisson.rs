//! Poisson distribution
//!
//! Counts with a default rate of 1.0. Each interval is one unit wide and
//! centered on an integer, so X takes the values `0, 1, ..., nintervals - 1`;
//! larger counts fall outside the window and are redrawn.

use super::{sample_x, Distribution, Domain};
use crate::config::Pdf;
use crate::error::GenError;
use crate::Result;
use rand::RngCore;
use rand_distr::{Distribution as _, Poisson};

pub const DEFAULT_RATE: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct PoissonDistribution {
    inner: Poisson<f64>,
}

impl PoissonDistribution {
    pub fn new(rate: f64) -> Result<Self> {
        let inner = Poisson::new(rate)
            .map_err(|e| GenError::SamplingFault(format!("poisson(rate = {}): {}", rate, e)))?;
        Ok(Self { inner })
    }

    /// Poisson with the default rate
    pub fn standard() -> Result<Self> {
        Self::new(DEFAULT_RATE)
    }
}

impl Distribution for PoissonDistribution {
    fn pdf(&self) -> Pdf {
        Pdf::Poisson
    }

    fn domain(&self, nintervals: usize) -> Domain {
        Domain::new(-0.5, nintervals as f64 - 0.5, nintervals)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.inner.sample(rng)
    }
}

/// Draw `npoints` Poisson counts below `nintervals`
pub fn poisson(npoints: usize, nintervals: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
    sample_x(&PoissonDistribution::standard()?, npoints, nintervals, rng)
}
