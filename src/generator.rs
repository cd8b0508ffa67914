//! Point-cloud generation
//!
//! Draws all X-coordinates from the configured distribution, then one uniform
//! Y-coordinate per point, from a single random source owned by the run.

use crate::config::Config;
use crate::distribution::{self, uniform::UnitUniform};
use crate::error::GenError;
use crate::output::text::write_point_cloud;
use crate::stats::SampleSummary;
use crate::Result;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::io::Write;

/// 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Ordered sequence of generated points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Create the run's random source
///
/// Seeded from `seed` when given, otherwise from OS entropy.
pub fn new_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => {
            log::debug!("random source seeded with {}", seed);
            Xoshiro256PlusPlus::seed_from_u64(seed)
        }
        None => {
            log::debug!("random source seeded from entropy");
            Xoshiro256PlusPlus::from_entropy()
        }
    }
}

/// Generate the point cloud described by `config`
///
/// Every X is drawn before the first Y. Nothing is returned on failure, so
/// callers never see a partial cloud.
pub fn generate(config: &Config, rng: &mut dyn RngCore) -> Result<PointCloud> {
    let xs = distribution::sample(config.pdf, config.npoints, config.nintervals, rng)?;

    if log::log_enabled!(log::Level::Debug) {
        let domain = distribution::for_pdf(config.pdf)?.domain(config.nintervals);
        let summary = SampleSummary::new(domain, &xs);
        log::debug!("{} x sample: {}", config.pdf, summary);
        log::trace!("per-interval counts: {:?}", summary.histogram.buckets());
    }

    let mut points = Vec::new();
    points
        .try_reserve_exact(xs.len())
        .map_err(|_| GenError::ResourceExhaustion { points: xs.len() })?;

    let uniform = UnitUniform::new();
    for x in xs {
        points.push(Point {
            x,
            y: uniform.draw(rng),
        });
    }

    Ok(PointCloud::new(points))
}

/// Generate a point cloud and write it to `out`
pub fn run<W: Write>(config: &Config, out: W) -> Result<()> {
    log::debug!(
        "generating {} points, pdf {} (id {}), {} intervals",
        config.npoints,
        config.pdf,
        config.pdf.id(),
        config.nintervals
    );

    let mut rng = new_rng(config.seed);
    let cloud = generate(config, &mut rng)?;
    write_point_cloud(out, &cloud)?;

    log::debug!("wrote {} points", cloud.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Pdf;
    use crate::output::text::read_point_cloud;
    use crate::stats::Moments;

    fn config(nintervals: usize, npoints: usize, pdf: Pdf) -> Config {
        Config {
            nintervals,
            npoints,
            pdf,
            seed: Some(2016),
        }
    }

    fn run_to_string(config: &Config) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_generate_point_count() {
        let mut rng = new_rng(Some(1));
        for pdf in Pdf::ALL {
            let cloud = generate(&config(10, 37, pdf), &mut rng).unwrap();
            assert_eq!(cloud.len(), 37);
        }
    }

    #[test]
    fn test_generate_y_in_unit_range() {
        let mut rng = new_rng(Some(2));
        for pdf in Pdf::ALL {
            let cloud = generate(&config(10, 2000, pdf), &mut rng).unwrap();
            assert!(cloud.iter().all(|p| p.y >= 0.0 && p.y < 1.0));
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let cfg = config(20, 100, Pdf::Gamma);
        let a = generate(&cfg, &mut new_rng(cfg.seed)).unwrap();
        let b = generate(&cfg, &mut new_rng(cfg.seed)).unwrap();
        assert_eq!(a, b);

        let c = generate(&cfg, &mut new_rng(Some(9999))).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_shares_one_random_source() {
        // X draws come first, so the X column matches a bare X sample
        let cfg = config(50, 200, Pdf::Gaussian);
        let cloud = generate(&cfg, &mut new_rng(Some(77))).unwrap();
        let mut rng = new_rng(Some(77));
        let xs = distribution::sample(cfg.pdf, cfg.npoints, cfg.nintervals, &mut rng).unwrap();

        let cloud_xs: Vec<f64> = cloud.iter().map(|p| p.x).collect();
        assert_eq!(cloud_xs, xs);
    }

    #[test]
    fn test_run_beta_scenario() {
        let text = run_to_string(&config(10, 5, Pdf::Beta));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "5");

        for line in &lines[1..] {
            let fields: Vec<&str> = line.split(' ').collect();
            assert_eq!(fields.len(), 2, "bad line {:?}", line);

            for field in &fields {
                let (_, fraction) = field.split_once('.').unwrap();
                assert_eq!(fraction.len(), 10, "bad field {:?}", field);
            }

            let x: f64 = fields[0].parse().unwrap();
            let y: f64 = fields[1].parse().unwrap();
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..1.0).contains(&y));
        }
    }

    #[test]
    fn test_run_output_parses_back() {
        for pdf in Pdf::ALL {
            let cfg = config(8, 250, pdf);
            let text = run_to_string(&cfg);
            let cloud = read_point_cloud(text.as_bytes()).unwrap();

            assert_eq!(cloud.len(), cfg.npoints);
            assert!(cloud.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn test_run_gaussian_moments() {
        let text = run_to_string(&config(1000, 100_000, Pdf::Gaussian));
        let cloud = read_point_cloud(text.as_bytes()).unwrap();
        let xs: Vec<f64> = cloud.iter().map(|p| p.x).collect();
        let moments = Moments::from_samples(&xs);

        assert!(moments.mean().abs() < 0.02, "mean = {}", moments.mean());
        assert!((moments.stddev() - 1.0).abs() < 0.02, "stddev = {}", moments.stddev());
    }

    #[test]
    fn test_run_gaussian_moments_on_ten_intervals() {
        let text = run_to_string(&config(10, 100_000, Pdf::Gaussian));
        let cloud = read_point_cloud(text.as_bytes()).unwrap();
        let xs: Vec<f64> = cloud.iter().map(|p| p.x).collect();
        let moments = Moments::from_samples(&xs);

        assert!(moments.mean().abs() < 0.02, "mean = {}", moments.mean());
        assert!((moments.stddev() - 1.0).abs() < 0.02, "stddev = {}", moments.stddev());
    }

    #[test]
    fn test_run_without_seed_still_valid() {
        let mut cfg = config(4, 10, Pdf::Poisson);
        cfg.seed = None;
        let cloud = read_point_cloud(run_to_string(&cfg).as_bytes()).unwrap();
        assert_eq!(cloud.len(), 10);
    }
}
