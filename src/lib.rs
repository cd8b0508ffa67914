//! mst-gen - MST clustering kernel input data generator
//!
//! Produces a synthetic 2D point cloud for the MST clustering benchmark
//! kernel. X-coordinates follow a selectable probability density function
//! over a window split into sampling intervals; Y-coordinates are uniform in
//! [0, 1).
//!
//! # Architecture
//!
//! - **Argument processing**: [`config`] parses the command line (and an
//!   optional TOML file) and validates it into an immutable [`Config`]
//! - **Sampling**: [`distribution`] holds the Beta, Gamma, Gaussian and
//!   Poisson recipes and the interval grid
//! - **Generation**: [`generator`] draws the cloud from one random source
//! - **Output**: [`output::text`] writes the kernel's text format
//!
//! # Example
//!
//! ```
//! use mst_gen::{Config, Pdf};
//!
//! let config = Config { nintervals: 10, npoints: 5, pdf: Pdf::Beta, seed: Some(1) };
//! let mut out = Vec::new();
//! mst_gen::run(&config, &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().count(), 6);
//! assert_eq!(text.lines().next(), Some("5"));
//! ```

pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod output;
pub mod stats;

// Re-export commonly used types
pub use config::{Config, Pdf};
pub use error::GenError;
pub use generator::{generate, run, Point, PointCloud};

/// Result type used throughout mst-gen
pub type Result<T> = std::result::Result<T, GenError>;
