//! Probability distributions for X-coordinate sampling
//!
//! Each supported probability density function has a fixed parameterization and
//! a sampling window split into `nintervals` equal-width intervals. A draw
//! selects the interval it falls in and keeps its exact position inside it, so
//! the sample follows the density at any interval count. Draws outside the
//! window are discarded and redrawn.
//!
//! # Distributions
//!
//! - **Beta**: a = 0.5, b = 0.5, window [0, 1]
//! - **Gamma**: shape 1.0, scale 2.0, window [0, 20]
//! - **Gaussian**: mean 0.0, std-dev 1.0, window [-5, 5]
//! - **Poisson**: rate 1.0, one unit-wide interval per count starting at 0
//!
//! Y-coordinates come from [`uniform::UnitUniform`].
//!
//! # Example
//!
//! ```
//! use mst_gen::config::Pdf;
//! use mst_gen::distribution;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let xs = distribution::sample(Pdf::Beta, 5, 10, &mut rng).unwrap();
//! assert_eq!(xs.len(), 5);
//! assert!(xs.iter().all(|x| (0.0..=1.0).contains(x)));
//! ```

use crate::config::Pdf;
use crate::error::GenError;
use crate::Result;
use rand::RngCore;

pub mod beta;
pub mod gamma;
pub mod gaussian;
pub mod poisson;
pub mod uniform;

/// Consecutive out-of-window draws tolerated for a single sample
pub const MAX_REDRAWS: usize = 10_000;

/// Distribution trait for X-coordinate generation
///
/// Implementations hold only their fixed parameters; randomness comes from the
/// caller's generator so that X and Y share a single random source.
pub trait Distribution {
    /// Which density function this is
    fn pdf(&self) -> Pdf;

    /// Sampling window split into `nintervals` intervals
    fn domain(&self, nintervals: usize) -> Domain;

    /// Draw one raw value, possibly outside the window
    fn draw(&self, rng: &mut dyn RngCore) -> f64;
}

/// A closed sampling window divided into equal-width intervals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    lower: f64,
    upper: f64,
    intervals: usize,
}

impl Domain {
    /// Create a new window
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper` or `intervals == 0`.
    pub fn new(lower: f64, upper: f64, intervals: usize) -> Self {
        assert!(lower < upper, "Domain lower bound must be below upper bound");
        assert!(intervals > 0, "Domain must have at least one interval");

        Self {
            lower,
            upper,
            intervals,
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Width of a single interval
    pub fn width(&self) -> f64 {
        (self.upper - self.lower) / self.intervals as f64
    }

    /// Whether `x` lies inside the window (both edges included)
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// Index of the interval containing `x`
    ///
    /// Values outside the window clamp to the first or last interval.
    pub fn interval_of(&self, x: f64) -> usize {
        let offset = ((x - self.lower) / self.width()).floor();
        if offset <= 0.0 {
            0
        } else {
            (offset as usize).min(self.intervals - 1)
        }
    }

}

/// Build the distribution for `pdf` with its fixed parameters
pub fn for_pdf(pdf: Pdf) -> Result<Box<dyn Distribution>> {
    let dist: Box<dyn Distribution> = match pdf {
        Pdf::Beta => Box::new(beta::BetaDistribution::standard()?),
        Pdf::Gamma => Box::new(gamma::GammaDistribution::standard()?),
        Pdf::Gaussian => Box::new(gaussian::GaussianDistribution::standard()?),
        Pdf::Poisson => Box::new(poisson::PoissonDistribution::standard()?),
    };
    Ok(dist)
}

/// Draw `npoints` X-values for `pdf` over `nintervals` intervals
pub fn sample(
    pdf: Pdf,
    npoints: usize,
    nintervals: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<f64>> {
    match pdf {
        Pdf::Beta => beta::beta(npoints, nintervals, rng),
        Pdf::Gamma => gamma::gamma(npoints, nintervals, rng),
        Pdf::Gaussian => gaussian::gaussian(npoints, nintervals, rng),
        Pdf::Poisson => poisson::poisson(npoints, nintervals, rng),
    }
}

/// Draw `npoints` in-window values from `dist`
///
/// Fails with [`GenError::ResourceExhaustion`] if the buffer cannot be
/// allocated and with [`GenError::SamplingFault`] on a non-finite draw or when
/// [`MAX_REDRAWS`] draws in a row miss the window.
pub fn sample_x(
    dist: &dyn Distribution,
    npoints: usize,
    nintervals: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<f64>> {
    if nintervals == 0 {
        return Err(GenError::SamplingFault(format!(
            "{} sampling needs at least one interval",
            dist.pdf()
        )));
    }

    let domain = dist.domain(nintervals);

    let mut xs = Vec::new();
    xs.try_reserve_exact(npoints)
        .map_err(|_| GenError::ResourceExhaustion { points: npoints })?;

    for i in 0..npoints {
        xs.push(draw_in_window(dist, &domain, i, rng)?);
    }

    Ok(xs)
}

fn draw_in_window(
    dist: &dyn Distribution,
    domain: &Domain,
    index: usize,
    rng: &mut dyn RngCore,
) -> Result<f64> {
    for _ in 0..MAX_REDRAWS {
        let x = dist.draw(rng);
        if !x.is_finite() {
            return Err(GenError::SamplingFault(format!(
                "{} produced non-finite value {} at sample {}",
                dist.pdf(),
                x,
                index
            )));
        }
        if domain.contains(x) {
            return Ok(x);
        }
    }

    Err(GenError::SamplingFault(format!(
        "{} drew {} values outside [{}, {}] at sample {}",
        dist.pdf(),
        MAX_REDRAWS,
        domain.lower(),
        domain.upper(),
        index
    )))
}
