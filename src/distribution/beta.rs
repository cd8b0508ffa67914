//! Beta distribution
//!
//! Fixed at a = 0.5, b = 0.5 (the arcsine distribution): mass piles up at
//! both ends of [0, 1], which produces two dense vertical bands of points.

use super::{sample_x, Distribution, Domain};
use crate::config::Pdf;
use crate::error::GenError;
use crate::Result;
use rand::RngCore;
use rand_distr::{Beta, Distribution as _};

pub const ALPHA: f64 = 0.5;
pub const BETA: f64 = 0.5;

/// Beta(a, b) over the unit interval
#[derive(Debug, Clone)]
pub struct BetaDistribution {
    inner: Beta<f64>,
}

impl BetaDistribution {
    /// Create a Beta(alpha, beta) distribution
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let inner = Beta::new(alpha, beta).map_err(|e| {
            GenError::SamplingFault(format!("beta(a = {}, b = {}): {}", alpha, beta, e))
        })?;
        Ok(Self { inner })
    }

    /// The generator's fixed Beta(0.5, 0.5)
    pub fn standard() -> Result<Self> {
        Self::new(ALPHA, BETA)
    }
}

impl Distribution for BetaDistribution {
    fn pdf(&self) -> Pdf {
        Pdf::Beta
    }

    fn domain(&self, nintervals: usize) -> Domain {
        Domain::new(0.0, 1.0, nintervals)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.inner.sample(rng)
    }
}

/// Draw `npoints` Beta(0.5, 0.5) values over `nintervals` intervals
pub fn beta(npoints: usize, nintervals: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
    sample_x(&BetaDistribution::standard()?, npoints, nintervals, rng)
}
