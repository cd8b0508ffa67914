//! Configuration validation

use super::{Config, Pdf};
use crate::error::GenError;
use crate::Result;

pub const INVALID_NINTERVALS: &str = "invalid number of sampling intervals";
pub const INVALID_NPOINTS: &str = "invalid number of tasks";
pub const UNSUPPORTED_PDF: &str = "unsupported probability density function";

/// Unvalidated settings gathered from the command line and config file
///
/// Counts are kept as text so that malformed numbers are reported by the
/// validator in the same order as out-of-range ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    pub nintervals: Option<String>,
    pub npoints: Option<String>,
    pub pdf: Option<String>,
    pub seed: Option<u64>,
}

/// Validate raw settings into a [`Config`]
///
/// Checks run in a fixed order and the first violation is returned:
/// interval count, point count, then the distribution name.
pub fn validate(raw: &RawConfig) -> Result<Config> {
    let nintervals = validate_count(raw.nintervals.as_deref(), INVALID_NINTERVALS)?;
    let npoints = validate_count(raw.npoints.as_deref(), INVALID_NPOINTS)?;
    let pdf = validate_pdf(raw.pdf.as_deref())?;

    Ok(Config {
        nintervals,
        npoints,
        pdf,
        seed: raw.seed,
    })
}

/// Parse a strictly positive count
///
/// Absent or non-numeric input counts as zero and is rejected with `message`.
fn validate_count(value: Option<&str>, message: &str) -> Result<usize> {
    let n = value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0);

    if n < 1 {
        return Err(GenError::invalid(message));
    }

    usize::try_from(n).map_err(|_| GenError::invalid(message))
}

fn validate_pdf(name: Option<&str>) -> Result<Pdf> {
    match name {
        Some(name) if !name.is_empty() => {
            Pdf::from_name(name).ok_or_else(|| GenError::invalid(UNSUPPORTED_PDF))
        }
        _ => Err(GenError::invalid(UNSUPPORTED_PDF)),
    }
}
