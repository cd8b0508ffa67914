//! Configuration module
//!
//! Handles command-line parsing, optional TOML configuration files, and
//! validation into an immutable [`Config`].

pub mod cli;
pub mod toml;
pub mod validator;

use crate::error::GenError;
use std::fmt;

/// Validated generator configuration
///
/// Built once by the argument processor and passed by reference to the
/// generator. Every field is in range by construction (see
/// [`validator::validate`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of sampling intervals (>= 1)
    pub nintervals: usize,
    /// Number of points to generate (>= 1)
    pub npoints: usize,
    /// Probability density function for X-coordinates
    pub pdf: Pdf,
    /// Fixed seed for the random source, entropy when absent
    pub seed: Option<u64>,
}

/// Supported probability density functions
///
/// Discriminants are the 1-based identifiers used by the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pdf {
    Beta = 1,
    Gamma = 2,
    Gaussian = 3,
    Poisson = 4,
}

impl Pdf {
    /// All functions in identifier order
    pub const ALL: [Pdf; 4] = [Pdf::Beta, Pdf::Gamma, Pdf::Gaussian, Pdf::Poisson];

    /// Command-line name of the function
    pub fn name(self) -> &'static str {
        match self {
            Pdf::Beta => "beta",
            Pdf::Gamma => "gamma",
            Pdf::Gaussian => "gaussian",
            Pdf::Poisson => "poisson",
        }
    }

    /// 1-based identifier
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Fixed parameters, as shown in the usage text
    pub fn parameters(self) -> &'static str {
        match self {
            Pdf::Beta => "a = 0.5 and b = 0.5",
            Pdf::Gamma => "a = 1.0 and b = 2.0",
            Pdf::Gaussian => "x = 0.0 and std = 1.0",
            Pdf::Poisson => "rate = 1.0",
        }
    }

    /// Look up a function by its exact (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Pdf> {
        Pdf::ALL.into_iter().find(|pdf| pdf.name() == name)
    }

    /// Look up a function by its 1-based identifier
    ///
    /// Unknown identifiers are rejected rather than mapped to a default.
    pub fn from_id(id: u32) -> Result<Pdf, GenError> {
        Pdf::ALL
            .into_iter()
            .find(|pdf| pdf.id() == id)
            .ok_or(GenError::UnsupportedDistribution(id))
    }
}

impl fmt::Display for Pdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_ids_follow_name_order() {
        let names: Vec<_> = Pdf::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["beta", "gamma", "gaussian", "poisson"]);

        for (i, pdf) in Pdf::ALL.iter().enumerate() {
            assert_eq!(pdf.id() as usize, i + 1);
        }
    }

    #[test]
    fn test_pdf_from_name_is_case_sensitive() {
        assert_eq!(Pdf::from_name("gaussian"), Some(Pdf::Gaussian));
        assert_eq!(Pdf::from_name("Gaussian"), None);
        assert_eq!(Pdf::from_name("normal"), None);
        assert_eq!(Pdf::from_name(""), None);
    }

    #[test]
    fn test_pdf_from_id() {
        assert_eq!(Pdf::from_id(1).unwrap(), Pdf::Beta);
        assert_eq!(Pdf::from_id(4).unwrap(), Pdf::Poisson);
    }

    #[test]
    fn test_pdf_from_unknown_id_does_not_fall_back() {
        for id in [0, 5, 42] {
            match Pdf::from_id(id) {
                Err(GenError::UnsupportedDistribution(got)) => assert_eq!(got, id),
                other => panic!("expected UnsupportedDistribution, got {:?}", other),
            }
        }
    }
}
