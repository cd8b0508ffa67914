//! Gamma distribution
//!
//! Fixed at shape 1.0 and scale 2.0, i.e. an exponential with mean 2. The
//! sampling window stops at 20 (ten scale units past the mean); the few draws
//! beyond it are redrawn.

use super::{sample_x, Distribution, Domain};
use crate::config::Pdf;
use crate::error::GenError;
use crate::Result;
use rand::RngCore;
use rand_distr::{Distribution as _, Gamma};

pub const SHAPE: f64 = 1.0;
pub const SCALE: f64 = 2.0;

/// Upper edge of the sampling window
pub const WINDOW_UPPER: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct GammaDistribution {
    inner: Gamma<f64>,
}

impl GammaDistribution {
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        let inner = Gamma::new(shape, scale).map_err(|e| {
            GenError::SamplingFault(format!("gamma(a = {}, b = {}): {}", shape, scale, e))
        })?;
        Ok(Self { inner })
    }

    /// The generator's fixed Gamma(1.0, 2.0)
    pub fn standard() -> Result<Self> {
        Self::new(SHAPE, SCALE)
    }
}

impl Distribution for GammaDistribution {
    fn pdf(&self) -> Pdf {
        Pdf::Gamma
    }

    fn domain(&self, nintervals: usize) -> Domain {
        Domain::new(0.0, WINDOW_UPPER, nintervals)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.inner.sample(rng)
    }
}

/// Draw `npoints` Gamma(1.0, 2.0) values over `nintervals` intervals
pub fn gamma(npoints: usize, nintervals: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
    sample_x(&GammaDistribution::standard()?, npoints, nintervals, rng)
}
